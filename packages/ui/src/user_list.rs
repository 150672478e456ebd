//! # User list state container
//!
//! Holds the users shown on the admin screen and the transient UI state around
//! them, and orchestrates the three network calls.
//!
//! ## State
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `users` | Records in server order, unique by id. Patched in place after settled requests. |
//! | `dialog` | [`Dialog::Closed`], [`Dialog::Editing`] or [`Dialog::ConfirmingDelete`]. |
//! | `saving` | Edit in flight. Only one edit dialog can be open, so one flag suffices. |
//! | `busy` | Ids with a request in flight and which kind. |
//!
//! ## Transitions
//!
//! The synchronous methods on [`UserListState`] are the whole state machine.
//! The async functions ([`load_users`], [`commit_edit`], [`confirm_delete`])
//! wrap one network call between a `begin_*` and a `finish_*` transition, going
//! through a [`UserListHandle`] so no borrow is held across the await.
//!
//! Outcomes of edit and delete come back as a [`Notice`] for the caller to
//! show as a toast. Load failures are only logged.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use api::{ApiError, User, UserId, UsersApi};
use dioxus::prelude::*;

pub const USER_UPDATED: &str = "User updated successfully!";
pub const USER_UPDATE_FAILED: &str = "Failed to update user";
pub const USER_DELETED: &str = "User deleted successfully!";
pub const USER_DELETE_FAILED: &str = "Failed to delete user";

/// Which dialog is open, and for which user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    Editing(User),
    ConfirmingDelete(UserId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingOp {
    Update,
    Delete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing outcome of an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserListState {
    pub users: Vec<User>,
    pub dialog: Dialog,
    pub saving: bool,
    pub busy: BTreeMap<UserId, PendingOp>,
    pub load_status: LoadStatus,
}

impl UserListState {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            load_status: LoadStatus::Loaded,
            ..Self::default()
        }
    }

    pub fn is_busy(&self, id: UserId) -> bool {
        self.busy.contains_key(&id)
    }

    pub fn is_deleting(&self, id: UserId) -> bool {
        self.busy.get(&id) == Some(&PendingOp::Delete)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Store the result of a list request.
    pub fn finish_load(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => {
                tracing::info!("Loaded {} users", users.len());
                self.users = dedup_by_id(users);
                self.load_status = LoadStatus::Loaded;
            }
            Err(e) => {
                tracing::error!("Error fetching users: {}", e);
                self.users.clear();
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    /// Open the edit dialog for `id`. Returns false if refused.
    ///
    /// Refused while another edit is saving; there is only one edit dialog.
    pub fn request_edit(&mut self, id: UserId) -> bool {
        if self.saving || self.is_busy(id) {
            return false;
        }
        let Some(user) = self.user(id).cloned() else {
            tracing::warn!("Edit requested for unknown user {}", id);
            return false;
        };
        self.dialog = Dialog::Editing(user);
        true
    }

    /// Open the delete confirmation for `id`. Returns false if refused.
    pub fn request_delete(&mut self, id: UserId) -> bool {
        if self.is_busy(id) {
            return false;
        }
        self.dialog = Dialog::ConfirmingDelete(id);
        true
    }

    /// Close whichever dialog is open without any network effect.
    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Mark an edit of `user` as in flight. Returns false if refused.
    pub fn begin_edit(&mut self, user: &User) -> bool {
        if self.saving || self.is_busy(user.id) {
            return false;
        }
        self.saving = true;
        self.busy.insert(user.id, PendingOp::Update);
        true
    }

    /// Settle an edit of `id`. The record is replaced by the server's version.
    pub fn finish_edit(&mut self, id: UserId, result: Result<User, ApiError>) -> Notice {
        let notice = match result {
            Ok(updated) => {
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == id) {
                    *slot = updated;
                }
                Notice::success(USER_UPDATED)
            }
            Err(e) => {
                tracing::error!("Error updating user {}: {}", id, e);
                Notice::error(USER_UPDATE_FAILED)
            }
        };
        self.saving = false;
        self.busy.remove(&id);
        if matches!(self.dialog, Dialog::Editing(_)) {
            self.dialog = Dialog::Closed;
        }
        notice
    }

    /// Take the confirmed delete target and mark it in flight.
    ///
    /// Returns `None` when no confirmation is open or the id is already busy.
    pub fn begin_delete(&mut self) -> Option<UserId> {
        let Dialog::ConfirmingDelete(id) = self.dialog else {
            return None;
        };
        if self.is_busy(id) {
            return None;
        }
        self.busy.insert(id, PendingOp::Delete);
        Some(id)
    }

    /// Settle a delete of `id`.
    pub fn finish_delete(&mut self, id: UserId, result: Result<(), ApiError>) -> Notice {
        let notice = match result {
            Ok(()) => {
                self.users.retain(|u| u.id != id);
                Notice::success(USER_DELETED)
            }
            Err(e) => {
                tracing::error!("Error deleting user {}: {}", id, e);
                Notice::error(USER_DELETE_FAILED)
            }
        };
        self.busy.remove(&id);
        if self.dialog == Dialog::ConfirmingDelete(id) {
            self.dialog = Dialog::Closed;
        }
        notice
    }
}

/// Keep the first record for each id. Rows are keyed by id.
fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = BTreeSet::new();
    users
        .into_iter()
        .filter(|u| {
            let first = seen.insert(u.id);
            if !first {
                tracing::warn!("Dropping duplicate user {} from server response", u.id);
            }
            first
        })
        .collect()
}

/// Mutable access to a [`UserListState`] that may be shared with the UI.
pub trait UserListHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserListState) -> R) -> R;
}

impl UserListHandle for Signal<UserListState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserListState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

impl UserListHandle for Rc<RefCell<UserListState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UserListState) -> R) -> R {
        let mut state = self.borrow_mut();
        f(&mut state)
    }
}

/// Fetch the full collection once. No retry.
pub async fn load_users<A: UsersApi, H: UserListHandle>(api: &A, mut state: H) {
    let result = api.list_users().await;
    state.update(|s| s.finish_load(result));
}

/// Save `user` and patch the list with the server's answer.
///
/// Returns `None` when the edit was refused because one is already running.
pub async fn commit_edit<A: UsersApi, H: UserListHandle>(
    api: &A,
    mut state: H,
    user: User,
) -> Option<Notice> {
    if !state.update(|s| s.begin_edit(&user)) {
        tracing::debug!("Ignoring edit of user {} while busy", user.id);
        return None;
    }
    let result = api.update_user(&user).await;
    Some(state.update(|s| s.finish_edit(user.id, result)))
}

/// Delete the user the confirmation dialog targets.
///
/// Returns `None` when there was nothing to confirm or the id is already busy.
pub async fn confirm_delete<A: UsersApi, H: UserListHandle>(
    api: &A,
    mut state: H,
) -> Option<Notice> {
    let id = state.update(|s| s.begin_delete())?;
    let result = api.delete_user(id).await;
    Some(state.update(|s| s.finish_delete(id, result)))
}
