//! Corner notifications, backed by `dioxus_primitives::toast`.
//!
//! The provider owns the queue and the dismiss timers, so a toast outlives
//! the view that raised it.

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastProviderProps};

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[component]
pub fn ToastProvider(props: ToastProviderProps) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        toast::ToastProvider {
            default_duration: props.default_duration,
            max_toasts: props.max_toasts,
            render_toast: props.render_toast,
            children: props.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::user_list::USER_DELETED;

    /// Raises a toast, then unmounts itself.
    #[component]
    fn Notifier(show: Signal<bool>) -> Element {
        let toast = use_toast();
        use_hook(move || {
            let mut show = show;
            spawn(async move {
                toast.success(USER_DELETED.to_string(), ToastOptions::new());
                show.set(false);
            })
        });
        rsx! { span { "notifier mounted" } }
    }

    #[component]
    fn Host() -> Element {
        let show = use_signal(|| true);
        rsx! {
            ToastProvider {
                if show() {
                    Notifier { show }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_toast_outlives_the_component_that_raised_it() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        for _ in 0..5 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("notifier mounted"));
        assert!(html.contains(USER_DELETED));
    }
}
