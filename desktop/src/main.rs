#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// assets directory needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Upsell Analytics – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[cfg(not(any(feature = "desktop", feature = "server")))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { {MAIN_CSS_INLINE} }

        Router::<Route> {}
    }
}

/// Desktop layout wrapping the shared header around the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
