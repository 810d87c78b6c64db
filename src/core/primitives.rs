use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{BoardError, BoardResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> BoardResult<f64> {
    value.to_f64().ok_or_else(|| {
        BoardError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a normalized report date.
///
/// Ingestion upstream emits ISO dates; a slash-separated variant is accepted
/// because some spreadsheet exports use it. Anything else is `None` and the
/// row is excluded from day bucketing while staying in per-creative totals.
#[must_use]
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .ok()
}

/// Division with a zero guard: a zero or non-finite denominator yields 0.
#[must_use]
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// Coalesces missing or corrupt numeric input to 0.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Clamps into `[min, max]` without poisoning on NaN.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}
