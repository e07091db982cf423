use dioxus::prelude::*;

/// Application header rendered above the dashboard by each platform shell.
#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "Upsell Analytics" }
            span { class: "app-header__tagline",
                "Daily clicks, revenue, and conversion at a glance"
            }
        }
    }
}
