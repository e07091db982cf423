use dioxus::prelude::*;

use crate::{analytics::Summary, core::format};

/// The three headline cards above the chart. Rounding happens here, at
/// display time; the underlying `Summary` keeps full precision.
#[component]
pub fn SummaryCards(summary: Summary, day_count: usize) -> Element {
    let meta = match day_count {
        0 => "No days in range".to_string(),
        1 => "1 day in range".to_string(),
        n => format!("{n} days in range"),
    };

    rsx! {
        div { class: "dashboard-summary",
            div { class: "dashboard-metric",
                span { class: "dashboard-metric__label", "Total clicks" }
                strong { class: "dashboard-metric__value", "{format::format_count(summary.total_clicks)}" }
                span { class: "dashboard-metric__meta", "{meta}" }
            }
            div { class: "dashboard-metric",
                span { class: "dashboard-metric__label", "Total revenue" }
                strong { class: "dashboard-metric__value", "{format::format_currency(summary.total_revenue)}" }
                span { class: "dashboard-metric__meta", "{meta}" }
            }
            div { class: "dashboard-metric",
                span { class: "dashboard-metric__label", "Avg conversion rate" }
                strong { class: "dashboard-metric__value", "{format::format_percent(summary.avg_conversion_rate)}" }
                span { class: "dashboard-metric__meta", "Unweighted daily mean" }
            }
        }
    }
}
