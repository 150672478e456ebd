mod layout;
pub use layout::AppLayout;

mod login;
pub use login::Login;

mod users;
pub use users::Users;
