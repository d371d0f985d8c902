//! Frame timing for animations.
//!
//! Animations advance once per display refresh. In the browser that is a
//! `requestAnimationFrame` callback; the desktop webview build approximates it
//! with a 16 ms timer. Both report a monotonic timestamp in milliseconds.

use std::future::Future;

/// Source of frame timestamps. The real clock waits for the display; tests step manually.
pub trait FrameClock {
    /// Wait for the next frame and return its timestamp in milliseconds.
    fn next_frame(&self) -> impl Future<Output = f64>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayClock;

impl FrameClock for DisplayClock {
    fn next_frame(&self) -> impl Future<Output = f64> {
        next_frame()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn next_frame() -> f64 {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web_sys::window() {
            Some(window) => {
                let fallback = resolve.clone();
                let callback = Closure::once_into_js(move |timestamp: f64| {
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(timestamp));
                });
                if window
                    .request_animation_frame(callback.unchecked_ref())
                    .is_err()
                {
                    tracing::warn!("requestAnimationFrame rejected; frame resolved immediately");
                    let _ = fallback.call1(&JsValue::NULL, &JsValue::from_f64(now_ms()));
                }
            }
            None => {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(now_ms()));
            }
        }
    });

    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(now_ms)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() -> f64 {
    tokio::time::sleep(std::time::Duration::from_millis(16)).await;
    now_ms()
}
