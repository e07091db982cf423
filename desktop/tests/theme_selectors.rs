#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the Rust components rely on (filter controls,
  summary cards, the chart card and its SVG labels) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

A lightweight substring presence check is sufficient as an early warning;
parsing CSS properly would add dependencies without catching more.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-header",
    // Loading branch
    ".dashboard-loading",
    // Filter controls
    ".dashboard-filter",
    ".dashboard-filter__field",
    // Summary cards
    ".dashboard-summary",
    ".dashboard-metric",
    ".dashboard-metric__value",
    // Chart card
    ".dashboard-card",
    ".dashboard-card__placeholder",
    ".dashboard-chart__svg",
    ".dashboard-chart__tick",
    ".dashboard-chart__legend",
    ".legend-swatch",
];

#[test]
fn theme_contains_all_required_selectors() {
    let mut missing = Vec::new();

    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }

    assert!(
        missing.is_empty(),
        "Shared theme is missing required selector(s):\n  {}",
        missing.join("\n  ")
    );
}
