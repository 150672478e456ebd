//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_session_service, make_users_api};

pub mod user_list;
pub use user_list::{Dialog, LoadStatus, Notice, NoticeLevel, PendingOp, UserListState};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod update_user_dialog;
pub use update_user_dialog::{UpdateUserDialog, UserField, UserForm};

mod delete_user_dialog;
pub use delete_user_dialog::DeleteUserDialog;

pub use components::{use_toast, ToastOptions, ToastProvider};
