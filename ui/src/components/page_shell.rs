use dioxus::prelude::*;

use super::app_navbar::AppNavbar;
use super::qr_modal::{QrModal, QrModalState};

/// Navbar, page content and the page-level overlays, in that order.
#[component]
pub fn PageShell(#[props(default)] qr_open: bool, children: Element) -> Element {
    QrModalState::provide(qr_open);

    rsx! {
        AppNavbar {}
        main { class: "page-shell", {children} }
        QrModal {}
    }
}
