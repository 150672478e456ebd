use api::{User, UserId};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, ToastOptions};
use crate::icons::{FaPen, FaSpinner, FaTrash};
use crate::user_list::{
    commit_edit, confirm_delete, load_users, Dialog, LoadStatus, Notice, NoticeLevel, UserListState,
};
use crate::delete_user_dialog::DELETE_USER_TITLE;
use crate::update_user_dialog::EDIT_USER_TITLE;
use crate::{make_users_api, DeleteUserDialog, Icon, UpdateUserDialog};

use super::ModalOverlay;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");
const PLACEHOLDER_AVATAR: Asset = asset!("/assets/placeholder.svg");

/// The "All Users" screen: table of users with edit and delete actions.
#[component]
pub fn UserListView() -> Element {
    let mut state = use_signal(UserListState::default);
    let api = use_signal(make_users_api);
    let toast = use_toast();
    let notify = move |notice: Notice| match notice.level {
        NoticeLevel::Success => toast.success(notice.message, ToastOptions::new()),
        NoticeLevel::Error => toast.error(notice.message, ToastOptions::new()),
    };

    // Fetch users once on mount
    let _loader = use_resource(move || async move {
        let client = api();
        load_users(&client, state).await;
    });

    let handle_update = move |user: User| {
        spawn(async move {
            let client = api();
            if let Some(notice) = commit_edit(&client, state, user).await {
                notify(notice);
            }
        });
    };

    let handle_confirm_delete = move |_| {
        spawn(async move {
            let client = api();
            if let Some(notice) = confirm_delete(&client, state).await {
                notify(notice);
            }
        });
    };

    let snapshot = state();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "All Users" }

            {match snapshot.load_status {
                LoadStatus::Pending => rsx! {
                    p { class: "view-muted", "Loading users..." }
                },
                LoadStatus::Failed => rsx! {
                    p { class: "view-muted", "Users could not be loaded." }
                },
                LoadStatus::Loaded => rsx! {
                    div {
                        class: "table-frame",
                        table {
                            class: "user-table",
                            thead {
                                tr {
                                    th { class: "col-id", "ID" }
                                    th { "Avatar" }
                                    th { "First Name" }
                                    th { "Last Name" }
                                    th { "Email" }
                                    th { class: "col-actions", "Actions" }
                                }
                            }
                            tbody {
                                for user in snapshot.users.iter() {
                                    UserRow {
                                        key: "{user.id}",
                                        deleting: snapshot.is_deleting(user.id),
                                        busy: snapshot.is_busy(user.id),
                                        user: user.clone(),
                                        on_edit: move |id| {
                                            state.write().request_edit(id);
                                        },
                                        on_delete: move |id| {
                                            state.write().request_delete(id);
                                        },
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }

        {match snapshot.dialog.clone() {
            Dialog::Closed => rsx! {},
            Dialog::Editing(user) => rsx! {
                ModalOverlay {
                    on_close: move |_| state.write().close_dialog(),
                    labelled_by: EDIT_USER_TITLE.to_string(),
                    UpdateUserDialog {
                        key: "{user.id}",
                        user: user.clone(),
                        saving: snapshot.saving,
                        on_update: handle_update,
                        on_cancel: move |_| state.write().close_dialog(),
                    }
                }
            },
            Dialog::ConfirmingDelete(id) => rsx! {
                ModalOverlay {
                    on_close: move |_| state.write().close_dialog(),
                    labelled_by: DELETE_USER_TITLE.to_string(),
                    DeleteUserDialog {
                        user_id: id,
                        pending: snapshot.is_deleting(id),
                        on_confirm: handle_confirm_delete,
                        on_cancel: move |_| state.write().close_dialog(),
                    }
                }
            },
        }}
    }
}

#[component]
fn UserRow(
    user: User,
    deleting: bool,
    busy: bool,
    on_edit: EventHandler<UserId>,
    on_delete: EventHandler<UserId>,
) -> Element {
    let id = user.id;
    let avatar = if user.avatar.is_empty() {
        PLACEHOLDER_AVATAR.to_string()
    } else {
        user.avatar.clone()
    };

    rsx! {
        tr {
            td { class: "col-id", "{id}" }
            td {
                img {
                    class: "user-avatar",
                    src: "{avatar}",
                    alt: "{user.full_name()}",
                }
            }
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.email}" }
            td {
                class: "col-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    class: "btn-icon",
                    title: "Edit user {id}",
                    disabled: busy,
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    class: "btn-icon",
                    title: "Delete user {id}",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(id),
                    if deleting {
                        Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                    } else {
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
