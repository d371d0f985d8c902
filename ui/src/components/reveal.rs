use dioxus::prelude::*;

/// Share of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} visible")
    } else {
        base.to_string()
    }
}

/// Page section that gains the `visible` class the first time it scrolls into view.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[props(default = "page-home__section")] class: &'static str,
    children: Element,
) -> Element {
    let visible = use_signal(|| !cfg!(target_arch = "wasm32"));

    #[cfg(target_arch = "wasm32")]
    let mut watch = use_signal(|| Option::<crate::core::reveal::VisibilityWatch>::None);

    let on_mounted = move |_evt: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            let mut visible = visible;
            let Some(element) = _evt.data().downcast::<web_sys::Element>().cloned() else {
                visible.set(true);
                return;
            };
            match crate::core::reveal::VisibilityWatch::start(&element, REVEAL_THRESHOLD, move || {
                visible.set(true)
            }) {
                Ok(active) => watch.set(Some(active)),
                Err(err) => {
                    tracing::warn!(section = id, ?err, "visibility observer unavailable");
                    visible.set(true);
                }
            }
        }
    };

    rsx! {
        section {
            id,
            class: reveal_class(class, visible()),
            onmounted: on_mounted,
            {children}
        }
    }
}
