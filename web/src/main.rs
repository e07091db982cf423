use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout wrapping the shared header around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
