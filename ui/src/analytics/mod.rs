//! Pure derivations over the loaded dataset: range filtering and summary
//! aggregation. No state, no side effects; safe to recompute on every render.

mod filter;
mod summary;

pub use filter::filter_range;
pub use summary::Summary;
