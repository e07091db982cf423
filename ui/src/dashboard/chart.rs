//! Inline-SVG trend chart: three series over a shared date axis, clicks and
//! revenue against the left scale, conversion rate against the right one.
//!
//! The chart is a pure projection of the filtered window handed to it; all
//! geometry is recomputed from scratch on every render, which is cheap at a
//! few hundred points.

use dioxus::prelude::*;

use crate::{
    core::{dates, format},
    dataset::DailyMetric,
};

const VIEW_W: f64 = 720.0;
const VIEW_H: f64 = 360.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 56.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_LINES: usize = 5;
const MAX_X_TICKS: usize = 7;

const CLICKS_COLOR: &str = "#10b981";
const REVENUE_COLOR: &str = "#ec4899";
const CONVERSION_COLOR: &str = "#f59e0b";
const AXIS_COLOR: &str = "#64748b";
const GRID_COLOR: &str = "#e2e8f0";

#[component]
pub fn TrendChart(records: Vec<DailyMetric>) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Performance trends" }
                if !records.is_empty() {
                    span { class: "dashboard-card__meta", "{records.len()} days plotted" }
                }
            }

            if records.is_empty() {
                p { class: "dashboard-card__placeholder",
                    "No days fall inside the selected range. Widen the dates to see trends."
                }
            } else {
                {render_chart(&records)}

                div { class: "dashboard-chart__legend",
                    span { span { class: "legend-swatch", style: "background:{CLICKS_COLOR}" } "Clicks" }
                    span { span { class: "legend-swatch", style: "background:{REVENUE_COLOR}" } "Revenue ($)" }
                    span { span { class: "legend-swatch", style: "background:{CONVERSION_COLOR}" } "Conversion rate (%)" }
                }
            }
        }
    }
}

fn render_chart(records: &[DailyMetric]) -> Element {
    let clicks: Vec<f64> = records.iter().map(|r| r.clicks as f64).collect();
    let revenue: Vec<f64> = records.iter().map(|r| r.revenue).collect();
    let rates: Vec<f64> = records.iter().map(|r| r.conversion_rate).collect();

    // Clicks and revenue share the left scale so both stay comparable;
    // percentages get their own right-hand scale.
    let left_max = nice_ceiling(series_max(&clicks).max(series_max(&revenue)));
    let right_max = nice_ceiling(series_max(&rates));

    let clicks_points = polyline_points(&clicks, left_max);
    let revenue_points = polyline_points(&revenue, left_max);
    let rate_points = polyline_points(&rates, right_max);

    let grid: Vec<GridLine> = (0..=GRID_LINES)
        .map(|step| {
            let fraction = step as f64 / GRID_LINES as f64;
            let y = plot_y(fraction * left_max, left_max);
            GridLine {
                y,
                label_y: y + 4.0,
                left_label: format::format_number(fraction * left_max, 0),
                right_label: format::format_number(fraction * right_max, 1),
            }
        })
        .collect();

    let ticks: Vec<XTick> = x_tick_indices(records.len())
        .into_iter()
        .map(|index| XTick {
            x: plot_x(index, records.len()),
            label: dates::short_label(&records[index].date),
        })
        .collect();

    let markers: Vec<Marker> = records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            let x = plot_x(index, records.len());
            let day = dates::short_label(&record.date);
            [
                Marker {
                    x,
                    y: plot_y(record.clicks as f64, left_max),
                    color: CLICKS_COLOR,
                    tooltip: format!("{day} · Clicks {}", format::format_count(record.clicks)),
                },
                Marker {
                    x,
                    y: plot_y(record.revenue, left_max),
                    color: REVENUE_COLOR,
                    tooltip: format!("{day} · Revenue {}", format::format_currency(record.revenue)),
                },
                Marker {
                    x,
                    y: plot_y(record.conversion_rate, right_max),
                    color: CONVERSION_COLOR,
                    tooltip: format!(
                        "{day} · Conversion {}",
                        format::format_percent(record.conversion_rate)
                    ),
                },
            ]
        })
        .collect();

    let baseline = plot_y(0.0, 1.0);
    let right_edge = VIEW_W - MARGIN_RIGHT;
    let left_label_x = MARGIN_LEFT - 8.0;
    let right_label_x = right_edge + 8.0;
    let tick_label_y = baseline + 18.0;

    rsx! {
        svg {
            class: "dashboard-chart__svg",
            view_box: "0 0 {VIEW_W} {VIEW_H}",
            preserve_aspect_ratio: "xMidYMid meet",
            role: "img",

            for grid_line in grid.iter() {
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{grid_line.y}",
                    x2: "{right_edge}",
                    y2: "{grid_line.y}",
                    stroke: GRID_COLOR,
                    stroke_dasharray: "3 3",
                }
                text {
                    x: "{left_label_x}",
                    y: "{grid_line.label_y}",
                    class: "dashboard-chart__tick",
                    text_anchor: "end",
                    "{grid_line.left_label}"
                }
                text {
                    x: "{right_label_x}",
                    y: "{grid_line.label_y}",
                    class: "dashboard-chart__tick",
                    text_anchor: "start",
                    "{grid_line.right_label}"
                }
            }

            line {
                x1: "{MARGIN_LEFT}",
                y1: "{MARGIN_TOP}",
                x2: "{MARGIN_LEFT}",
                y2: "{baseline}",
                stroke: AXIS_COLOR,
            }
            line {
                x1: "{right_edge}",
                y1: "{MARGIN_TOP}",
                x2: "{right_edge}",
                y2: "{baseline}",
                stroke: AXIS_COLOR,
            }

            for tick in ticks.iter() {
                text {
                    x: "{tick.x}",
                    y: "{tick_label_y}",
                    class: "dashboard-chart__tick",
                    text_anchor: "middle",
                    "{tick.label}"
                }
            }

            polyline {
                points: "{clicks_points}",
                fill: "none",
                stroke: CLICKS_COLOR,
                stroke_width: "2",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }
            polyline {
                points: "{revenue_points}",
                fill: "none",
                stroke: REVENUE_COLOR,
                stroke_width: "2",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }
            polyline {
                points: "{rate_points}",
                fill: "none",
                stroke: CONVERSION_COLOR,
                stroke_width: "2",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }

            for marker in markers.iter() {
                circle {
                    cx: "{marker.x}",
                    cy: "{marker.y}",
                    r: "3",
                    fill: marker.color,
                    title { "{marker.tooltip}" }
                }
            }
        }
    }
}

struct GridLine {
    y: f64,
    label_y: f64,
    left_label: String,
    right_label: String,
}

struct XTick {
    x: f64,
    label: String,
}

struct Marker {
    x: f64,
    y: f64,
    color: &'static str,
    tooltip: String,
}

fn series_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Rounds up to the nearest 1, 2, or 5 times a power of ten, so axis ceilings
/// land on readable values. Non-positive input maps to 1.0 to keep every
/// division by an axis maximum defined.
fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let scaled = value / magnitude;

    let nice = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

fn plot_x(index: usize, count: usize) -> f64 {
    let plot_w = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
    if count <= 1 {
        // A single point sits centered rather than pinned to the axis.
        MARGIN_LEFT + plot_w / 2.0
    } else {
        MARGIN_LEFT + index as f64 / (count - 1) as f64 * plot_w
    }
}

fn plot_y(value: f64, axis_max: f64) -> f64 {
    let plot_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    MARGIN_TOP + plot_h * (1.0 - (value / axis_max).clamp(0.0, 1.0))
}

fn polyline_points(values: &[f64], axis_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            format!(
                "{:.1},{:.1}",
                plot_x(index, values.len()),
                plot_y(*value, axis_max)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly thinned tick positions: first and last are always present, at most
/// [`MAX_X_TICKS`] in total.
fn x_tick_indices(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    if count <= MAX_X_TICKS {
        return (0..count).collect();
    }

    let step = (count - 1).div_ceil(MAX_X_TICKS - 1);
    let mut indices: Vec<usize> = (0..count).step_by(step).collect();
    if indices.last() != Some(&(count - 1)) {
        indices.push(count - 1);
    }
    indices
}
