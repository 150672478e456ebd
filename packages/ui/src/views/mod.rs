mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod user_list;
pub use user_list::UserListView;

mod login;
pub use login::LoginView;
