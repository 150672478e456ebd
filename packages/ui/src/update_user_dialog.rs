use api::User;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaSpinner;
use crate::Icon;

pub const EDIT_USER_TITLE: &str = "edit-user-title";

/// Editable fields of a user. The avatar is deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
}

/// Form values seeded from a user record.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    original: User,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserForm {
    pub fn seed(user: &User) -> Self {
        Self {
            original: user.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Email => self.email = value,
        }
    }

    pub fn avatar(&self) -> &str {
        &self.original.avatar
    }

    /// The full replacement record. `id` and `avatar` come from the seed.
    pub fn to_user(&self) -> User {
        User {
            id: self.original.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            avatar: self.original.avatar.clone(),
        }
    }
}

/// Dialog body for editing one user.
///
/// Seeded once on mount; give it a `key` derived from the user id so opening
/// it for a different user re-seeds the form.
#[component]
pub fn UpdateUserDialog(
    user: User,
    saving: bool,
    on_update: EventHandler<User>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| UserForm::seed(&user));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_update.call(form().to_user());
    };

    rsx! {
        form {
            class: "modal-body",
            onsubmit: handle_submit,
            h2 { id: EDIT_USER_TITLE, class: "modal-title", "Edit User" }

            div {
                class: "modal-field",
                Label { html_for: "first_name", "First Name" }
                Input {
                    id: "first_name",
                    name: "first_name",
                    value: form().first_name,
                    oninput: move |evt: FormEvent| form.write().set(UserField::FirstName, evt.value()),
                }
            }

            div {
                class: "modal-field",
                Label { html_for: "last_name", "Last Name" }
                Input {
                    id: "last_name",
                    name: "last_name",
                    value: form().last_name,
                    oninput: move |evt: FormEvent| form.write().set(UserField::LastName, evt.value()),
                }
            }

            div {
                class: "modal-field",
                Label { html_for: "email", "Email" }
                Input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().set(UserField::Email, evt.value()),
                }
            }

            div {
                class: "modal-field",
                Label { html_for: "avatar", "Avatar URL" }
                Input {
                    id: "avatar",
                    name: "avatar",
                    disabled: true,
                    value: form().avatar().to_string(),
                }
            }

            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving,
                    if saving {
                        Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                        " Saving..."
                    } else {
                        "Save changes"
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
