//! The bundled daily-metrics dataset and its load boundary.
//!
//! The dataset ships inside the binary (compile-time embed of
//! `ui/data/daily_metrics.json`), so "loading" is parsing plus validation.
//! Entries that don't survive validation are quarantined: skipped, counted,
//! and reported on the diagnostic channel. They never reach arithmetic.

use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::dates;

const BUNDLED_JSON: &str = include_str!("../../data/daily_metrics.json");

/// One day of recorded marketing performance.
///
/// `date` stays a zero-padded ISO string; lexicographic comparison over these
/// is chronological comparison, which the range filter relies on. The source
/// file is pre-sorted ascending by date and nothing downstream re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    pub date: String,
    pub clicks: u64,
    pub revenue: f64,
    pub conversion_rate: f64,
}

impl DailyMetric {
    fn is_well_formed(&self) -> bool {
        dates::parse_iso(&self.date).is_some()
            && self.revenue.is_finite()
            && self.revenue >= 0.0
            && (0.0..=100.0).contains(&self.conversion_rate)
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not a JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the full ordered record list, awaited once when the dashboard mounts.
///
/// Failure here means the whole file was unreadable; the view catches that,
/// logs it, and carries on with an empty dataset.
pub async fn load_daily_metrics() -> Result<Vec<DailyMetric>, DatasetError> {
    parse_dataset(BUNDLED_JSON)
}

/// Collapses a load result into the records the dashboard renders: a failed
/// load is reported on the diagnostic channel and degrades to an empty
/// dataset, so the page always reaches its ready state with something to
/// show. Downstream arithmetic on the empty list is defined (zeros).
pub fn records_or_empty(result: Result<Vec<DailyMetric>, DatasetError>) -> Vec<DailyMetric> {
    match result {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("failed to load daily metrics: {err}");
            Vec::new()
        }
    }
}

fn parse_dataset(raw: &str) -> Result<Vec<DailyMetric>, DatasetError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = entries.len();

    let mut records = Vec::with_capacity(total);
    let mut quarantined = 0usize;

    for entry in entries {
        match serde_json::from_value::<DailyMetric>(entry) {
            Ok(record) if record.is_well_formed() => records.push(record),
            _ => quarantined += 1,
        }
    }

    if quarantined > 0 {
        tracing::warn!("quarantined {quarantined} of {total} dataset entries");
    }

    Ok(records)
}
