use api::UserId;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaSpinner;
use crate::Icon;

pub const DELETE_USER_TITLE: &str = "delete-user-title";

/// Confirmation gate before a user is deleted.
#[component]
pub fn DeleteUserDialog(
    user_id: UserId,
    /// A delete for `user_id` is already in flight.
    pending: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-body",
            h2 { id: DELETE_USER_TITLE, class: "modal-title", "Are you sure?" }
            p {
                class: "modal-text",
                "This action cannot be undone. This will permanently delete the user and remove their data from our servers."
            }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: pending,
                    title: "Delete user {user_id}",
                    onclick: move |_| on_confirm.call(()),
                    if pending {
                        Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                    } else {
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pending: bool) -> String {
        dioxus_ssr::render_element(rsx! {
            DeleteUserDialog {
                user_id: 7,
                pending,
                on_confirm: |_| {},
                on_cancel: |_| {},
            }
        })
    }

    #[test]
    fn test_delete_button_disabled_while_pending() {
        let html = render(true);
        assert!(html.contains("disabled"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn test_delete_button_enabled_when_idle() {
        let html = render(false);
        assert!(!html.contains("disabled"));
        assert!(html.contains("Are you sure?"));
        assert!(!html.contains("animate-spin"));
    }
}
