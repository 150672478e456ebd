use dioxus::prelude::*;

/// Backdrop plus modal card for the edit and delete dialogs.
///
/// The card is the `dialog` element for assistive tech. Escape or a click on
/// the backdrop calls `on_close`; clicks inside the card stay inside.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] labelled_by: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "{labelled_by}",
                tabindex: "-1",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_labelled_modal_dialog() {
        let html = dioxus_ssr::render_element(rsx! {
            ModalOverlay {
                on_close: |_| {},
                labelled_by: "edit-user-title",
                p { "body" }
            }
        });
        assert!(html.contains("dialog"));
        assert!(html.contains("aria-modal"));
        assert!(html.contains("edit-user-title"));
        assert!(html.contains("body"));
    }
}
