use dioxus::prelude::*;

use crate::use_session;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Placeholder for the sign-in page. Credentials are handled by the backend's
/// login flow; this view only reports the restored session.
#[component]
pub fn LoginView() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Sign in" }
            if session().is_authenticated() {
                p { "You are already signed in." }
            } else {
                p { "Sign in to manage users." }
            }
            Link { to: "/", "Back to users" }
        }
    }
}
