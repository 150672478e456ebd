use dioxus::prelude::*;
use ui::{use_session, LogoutButton, Navbar};

use crate::Route;

/// Shared chrome around every route.
#[component]
pub fn AppLayout() -> Element {
    let session = use_session();

    rsx! {
        Navbar {
            title: "User Management",
            if session().is_authenticated() {
                LogoutButton { class: "btn btn-outline" }
            } else {
                Link { class: "btn btn-outline", to: Route::Login {}, "Sign in" }
            }
        }
        Outlet::<Route> {}
    }
}
