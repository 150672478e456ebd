use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Top bar with the app title. Extra controls go in `children`.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            a { class: "navbar-title", href: "/", "{title}" }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
