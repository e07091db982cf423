//! Dashboard building blocks: the date-range controls, the summary cards, and
//! the trend chart. Each component consumes already-derived data; all
//! filtering and aggregation happens in [`crate::analytics`].

mod cards;
mod chart;
mod controls;

pub use cards::SummaryCards;
pub use chart::TrendChart;
pub use controls::DateRangeControls;
