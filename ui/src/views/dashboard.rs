use dioxus::prelude::*;

use crate::analytics::{self, Summary};
use crate::dashboard::{DateRangeControls, SummaryCards, TrendChart};
use crate::dataset;

// Defaults cover the bundled dataset's opening days.
const DEFAULT_START: &str = "2023-12-01";
const DEFAULT_END: &str = "2023-12-05";

/// The metrics dashboard: the only page in the app.
///
/// State is one snapshot — the loaded records plus the two date bounds — and
/// everything shown is derived from it per render through the pure helpers in
/// [`crate::analytics`]. The dataset resource settles exactly once; a load
/// failure is logged and degrades to an empty record list, so the page moves
/// from the loading branch to Ready in every case and never returns.
#[component]
pub fn Dashboard() -> Element {
    let start = use_signal(|| DEFAULT_START.to_string());
    let end = use_signal(|| DEFAULT_END.to_string());

    let records =
        use_resource(|| async { dataset::records_or_empty(dataset::load_daily_metrics().await) });

    match &*records.read_unchecked() {
        None => rsx! {
            div { class: "dashboard-loading", "Loading" }
        },
        Some(all_records) => {
            let filtered = analytics::filter_range(all_records, &start(), &end());
            let summary = Summary::from_records(&filtered);
            let day_count = filtered.len();

            rsx! {
                section { class: "page page-dashboard",
                    DateRangeControls { start, end }
                    SummaryCards { summary, day_count }
                    TrendChart { records: filtered }
                }
            }
        }
    }
}
