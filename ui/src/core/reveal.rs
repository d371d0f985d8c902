//! One-shot "scrolled into view" notifications.
//!
//! The browser build watches an element with an `IntersectionObserver` and
//! fires once the element is at least `threshold` visible, then stops
//! observing. There is no viewport to watch natively, so nothing is provided
//! there and callers treat elements as visible from the start.

#[cfg(target_arch = "wasm32")]
pub use browser::VisibilityWatch;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer. Dropping it disconnects.
    pub struct VisibilityWatch {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl VisibilityWatch {
        pub fn start(
            element: &Element,
            threshold: f64,
            mut on_visible: impl FnMut() + 'static,
        ) -> Result<Self, JsValue> {
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entered = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    if entered {
                        observer.disconnect();
                        on_visible();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
