use dioxus::prelude::*;

/// Two native date pickers bound to the shared range signals.
///
/// The inputs are deliberately unconstrained: no min/max tied to the dataset
/// span, and nothing stops `start` from passing `end`. An inverted range is a
/// defined state downstream (empty window, zeroed summary), so the controls
/// stay free-form.
#[component]
pub fn DateRangeControls(mut start: Signal<String>, mut end: Signal<String>) -> Element {
    rsx! {
        div { class: "dashboard-filter",
            div { class: "dashboard-filter__field",
                label { r#for: "filter-start", "Start date" }
                input {
                    id: "filter-start",
                    r#type: "date",
                    value: "{start}",
                    oninput: move |event| start.set(event.value()),
                }
            }
            div { class: "dashboard-filter__field",
                label { r#for: "filter-end", "End date" }
                input {
                    id: "filter-end",
                    r#type: "date",
                    value: "{end}",
                    oninput: move |event| end.set(event.value()),
                }
            }
        }
    }
}
