use crate::dataset::DailyMetric;

/// Ordered sub-sequence of `records` whose date lies in `[start, end]`,
/// bounds inclusive.
///
/// Plain string comparison is correct here: the dates are zero-padded ISO
/// strings, so lexicographic order is chronological order. When
/// `start > end` the window is empty and so is the result; that combination
/// is never treated as an error.
pub fn filter_range(records: &[DailyMetric], start: &str, end: &str) -> Vec<DailyMetric> {
    records
        .iter()
        .filter(|record| record.date.as_str() >= start && record.date.as_str() <= end)
        .cloned()
        .collect()
}
