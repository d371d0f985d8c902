use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::PageShell;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Ecometer" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared page chrome around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        PageShell { Outlet::<Route> {} }
    }
}
