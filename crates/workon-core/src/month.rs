//! Month-name normalization for financial report filters.

use chrono::{Datelike, Local};

/// Canonical month names as they appear in reports.
pub const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Sentinel for "the current period" when no month filter was given.
pub const CURRENT_PERIOD: &str = "Atual";

/// Normalizes a raw month filter into a canonical month name.
///
/// The resolution order is load-bearing and must not be reordered:
/// 1. absent or empty input resolves to [`CURRENT_PERIOD`];
/// 2. the digits of the input, if they form a number in 1..=12, select the
///    canonical name at that 1-based index ("09" resolves to "Setembro");
/// 3. otherwise the first canonical name that contains the input, or that
///    the input contains, case-insensitively, wins ("setembro", "Set");
/// 4. otherwise the input passes through unchanged. An unrecognized token is
///    a best-effort label, not an error.
pub fn normalize_month(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return CURRENT_PERIOD.to_string();
    };
    if raw.is_empty() {
        return CURRENT_PERIOD.to_string();
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Ok(number) = digits.parse::<usize>() {
        if (1..=12).contains(&number) {
            return MONTHS[number - 1].to_string();
        }
    }

    let needle = raw.to_lowercase();
    for name in MONTHS {
        let candidate = name.to_lowercase();
        if candidate.contains(&needle) || needle.contains(&candidate) {
            return name.to_string();
        }
    }

    raw.to_string()
}

/// Returns the canonical name of the current calendar month.
pub fn current_month() -> String {
    let index = Local::now().month0() as usize;
    MONTHS.get(index).copied().unwrap_or(CURRENT_PERIOD).to_string()
}
