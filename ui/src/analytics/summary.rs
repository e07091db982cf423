use crate::dataset::DailyMetric;

/// Aggregates derived from the currently filtered records. Never stored;
/// recomputed whenever the date bounds change.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub total_clicks: u64,
    pub total_revenue: f64,
    /// Unweighted arithmetic mean of the per-day rates. Deliberately not
    /// click-weighted.
    pub avg_conversion_rate: f64,
}

impl Summary {
    /// Folds a record window into totals. Empty input yields exact zeros,
    /// never NaN; an empty window is a defined state, not an error.
    pub fn from_records(records: &[DailyMetric]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total_clicks = records.iter().map(|r| r.clicks).sum();
        let total_revenue = records.iter().map(|r| r.revenue).sum();
        let rate_sum: f64 = records.iter().map(|r| r.conversion_rate).sum();

        Self {
            total_clicks,
            total_revenue,
            avg_conversion_rate: rate_sum / records.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, clicks: u64, revenue: f64, conversion_rate: f64) -> DailyMetric {
        DailyMetric {
            date: date.into(),
            clicks,
            revenue,
            conversion_rate,
        }
    }

    #[test]
    fn totals_and_unweighted_mean() {
        let records = vec![
            record("2023-12-01", 100, 50.0, 2.0),
            record("2023-12-02", 200, 150.0, 4.0),
        ];

        let summary = Summary::from_records(&records);
        assert_eq!(summary.total_clicks, 300);
        assert_eq!(summary.total_revenue, 200.0);
        assert_eq!(summary.avg_conversion_rate, 3.0);
    }

    #[test]
    fn mean_is_not_click_weighted() {
        // A huge-traffic day with a low rate must not dominate the average.
        let records = vec![
            record("2023-12-01", 1_000_000, 10.0, 1.0),
            record("2023-12-02", 1, 10.0, 5.0),
        ];

        let summary = Summary::from_records(&records);
        assert_eq!(summary.avg_conversion_rate, 3.0);
    }

    #[test]
    fn empty_window_yields_exact_zeros() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary.total_clicks, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.avg_conversion_rate, 0.0);
        assert!(!summary.avg_conversion_rate.is_nan());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let records = vec![record("2023-12-01", 10, 5.5, 1.5)];

        assert_eq!(
            Summary::from_records(&records),
            Summary::from_records(&records)
        );
    }
}
