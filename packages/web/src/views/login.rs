use dioxus::prelude::*;
use ui::views::LoginView;

/// `/login` — sign-in stub.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}
