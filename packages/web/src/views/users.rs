use dioxus::prelude::*;
use ui::views::UserListView;

/// `/` — the user table.
#[component]
pub fn Users() -> Element {
    rsx! {
        UserListView {}
    }
}
