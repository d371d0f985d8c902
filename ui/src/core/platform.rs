//! Platform glue: task spawning and blocking user alerts.

use std::future::Future;

/// Run a future on the Dioxus runtime without awaiting it.
///
/// The task belongs to the calling component's scope and is dropped with it,
/// so work writing into that component's signals never outlives them.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Blocking `window.alert`. Works in the browser and in the desktop webview.
pub fn alert(message: &str) {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = dioxus::document::eval(&format!("window.alert({literal});"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use std::cell::Cell;

    thread_local! {
        static RELEASED: Cell<bool> = const { Cell::new(false) };
    }

    struct ReleaseFlag;

    impl Drop for ReleaseFlag {
        fn drop(&mut self) {
            RELEASED.with(|flag| flag.set(true));
        }
    }

    #[component]
    fn Owner() -> Element {
        use_hook(|| {
            let flag = ReleaseFlag;
            spawn_future(async move {
                let _flag = flag;
                std::future::pending::<()>().await;
            });
        });
        rsx! {}
    }

    #[test]
    fn spawned_work_is_dropped_with_its_component() {
        let mut dom = VirtualDom::new(Owner);
        dom.rebuild_in_place();
        assert!(!RELEASED.with(Cell::get));

        drop(dom);
        assert!(RELEASED.with(Cell::get));
    }
}
