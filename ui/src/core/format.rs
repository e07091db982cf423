//! Formatting helpers for presenting metrics.

/// Thousands-separated integer count, e.g. `12345` -> `"12,345"`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Currency display: `$` prefix, thousands separators, two decimals.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Percentage display with two decimals, e.g. `3.0` -> `"3.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_keeps_two_decimals_and_separators() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(200.0), "$200.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-42.126), "-$42.13");
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(format_percent(3.0), "3.00%");
        assert_eq!(format_percent(2.345), "2.35%");
    }

    #[test]
    fn number_respects_requested_decimals() {
        assert_eq!(format_number(2.0, 0), "2");
        assert_eq!(format_number(2.5, 1), "2.5");
    }
}
