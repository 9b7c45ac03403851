//! Display formatting for catalog values

use chrono::{DateTime, Utc};
use contracts::domain::common::NOT_SET;

/// Format a timestamp as DD.MM.YYYY HH:MM:SS, or the "not set" sentinel
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => NOT_SET.to_string(),
    }
}

/// Format money with 2 decimals and a space as thousands separator
///
/// # Examples
///
/// ```
/// # use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234567.891), "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, integer, decimal_part)
}
