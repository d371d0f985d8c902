use dioxus::prelude::*;

use super::qr_modal::QrButton;

/// In-page anchors shown in the navbar, in display order.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#predictor", "Predict"),
    ("#insights", "Insights"),
    ("#about", "About"),
];

/// CSS class list for the collapsible menu.
pub fn menu_class(open: bool) -> &'static str {
    if open {
        "nav-menu active"
    } else {
        "nav-menu"
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let mut menu_open = use_signal(|| false);
    let hamburger_class = if menu_open() { "hamburger active" } else { "hamburger" };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "Ecometer" }
                    span { class: "navbar__brand-subtitle", "Fuel & CO₂ predictor" }
                }

                button {
                    class: hamburger_class,
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "hamburger__bar" }
                    span { class: "hamburger__bar" }
                    span { class: "hamburger__bar" }
                }

                nav { class: menu_class(menu_open()),
                    for (href, label) in NAV_LINKS {
                        a {
                            key: "{href}",
                            class: "navbar__link",
                            href,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    QrButton {}
                }
            }
        }
    }
}
