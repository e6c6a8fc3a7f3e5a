use std::fmt::Write;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{TornadoError, TornadoResult};

/// Date pattern used for date categories without an explicit format string.
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> TornadoResult<f64> {
    value.to_f64().ok_or_else(|| {
        TornadoError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts a column of optional decimals, keeping nulls.
pub fn decimals_to_f64(
    values: &[Option<Decimal>],
    field_name: &str,
) -> TornadoResult<Vec<Option<f64>>> {
    values
        .iter()
        .map(|value| value.map(|v| decimal_to_f64(v, field_name)).transpose())
        .collect()
}

/// Formats a date category with a `chrono` strftime pattern.
///
/// Invalid patterns fall back to [`DEFAULT_DATE_PATTERN`].
#[must_use]
pub fn format_category_date(time: DateTime<Utc>, pattern: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(pattern) = pattern {
        if write!(text, "{}", time.format(pattern)).is_ok() {
            return text;
        }
        text.clear();
    }
    time.format(DEFAULT_DATE_PATTERN).to_string()
}
