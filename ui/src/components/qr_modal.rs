use dioxus::prelude::*;

use crate::core::config::{self, QR_CODE_PATH};

/// Open/closed state shared by the navbar button and the modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrModalState {
    open: Signal<bool>,
}

impl QrModalState {
    /// Create the state and make it available to descendants.
    pub fn provide(initially_open: bool) -> Self {
        let open = use_signal(|| initially_open);
        use_context_provider(|| Self { open })
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn open(&mut self) {
        self.open.set(true);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }
}

/// "QR code" button placed in the navbar. Requires a `QrModalState` ancestor.
#[component]
pub fn QrButton() -> Element {
    let mut state = use_context::<QrModalState>();

    rsx! {
        button {
            id: "qr-button",
            r#type: "button",
            class: "button button--ghost navbar__qr",
            onclick: move |_| state.open(),
            "QR code"
        }
    }
}

/// Full-viewport modal with the backend's QR code. Render it outside any
/// filtered or transformed ancestor so `position: fixed` covers the viewport.
#[component]
pub fn QrModal() -> Element {
    let mut state = use_context::<QrModalState>();
    let src = config::get().endpoint(QR_CODE_PATH);

    if !state.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "qr-modal",
            class: "qr-modal",
            role: "dialog",
            aria_modal: "true",
            // Backdrop clicks close; clicks inside the panel stop here.
            onclick: move |_| state.close(),
            div {
                class: "qr-modal__panel",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "qr-modal__close",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| state.close(),
                    "×"
                }
                h3 { "Scan to open on your phone" }
                img { class: "qr-modal__image", src: "{src}", alt: "QR code for this page" }
            }
        }
    }
}
