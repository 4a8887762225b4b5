//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, numeric parsing and dtype classification.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to text, keeping `Null` distinct from an empty string.
///
/// Floats are rendered without trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use sumstats_common::any_to_text;
///
/// assert_eq!(any_to_text(AnyValue::Null), None);
/// assert_eq!(any_to_text(AnyValue::Int32(22)).as_deref(), Some("22"));
/// assert_eq!(any_to_text(AnyValue::String("rs123")).as_deref(), Some("rs123"));
/// ```
///
/// Allele and chromosome columns rely on this: a missing allele is not the
/// same thing as an empty one.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        // Display wraps some values in quotes
        other => {
            let s = other.to_string();
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    };
    Some(text)
}

/// Formats a floating-point number as a string without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use sumstats_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(0.050), "0.05");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Booleans convert to `1.0`/`0.0`; strings are parsed with [`parse_f64`].
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Returns true for boolean, integer and floating-point dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Renders the first `n` rows of a frame for diagnostics.
pub fn preview_rows(df: &DataFrame, n: usize) -> String {
    df.head(Some(n)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_text_keeps_null_distinct() {
        assert_eq!(any_to_text(AnyValue::Null), None);
        assert_eq!(any_to_text(AnyValue::String("")), Some(String::new()));
        assert_eq!(any_to_text(AnyValue::String("A")), Some("A".to_string()));
    }

    #[test]
    fn test_any_to_text_floats() {
        assert_eq!(any_to_text(AnyValue::Float64(1.5)).as_deref(), Some("1.5"));
        assert_eq!(any_to_text(AnyValue::Float64(1.0)).as_deref(), Some("1"));
        assert_eq!(any_to_text(AnyValue::Float64(20.0)).as_deref(), Some("20"));
    }

    #[test]
    fn test_any_to_text_boolean() {
        assert_eq!(any_to_text(AnyValue::Boolean(true)).as_deref(), Some("true"));
        assert_eq!(any_to_text(AnyValue::Boolean(false)).as_deref(), Some("false"));
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::Float64(0.25)), Some(0.25));
        assert_eq!(any_to_f64(AnyValue::Boolean(true)), Some(1.0));
        assert_eq!(any_to_f64(AnyValue::String("2.5e-8")), Some(2.5e-8));
        assert_eq!(any_to_f64(AnyValue::String("NA")), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("  0.5  "), Some(0.5));
        assert_eq!(parse_f64("abc"), None);
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("  -100  "), Some(-100));
        assert_eq!(parse_i64("4.2"), None);
    }

    #[test]
    fn test_numeric_dtypes() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(is_numeric_dtype(&DataType::Boolean));
        assert!(!is_numeric_dtype(&DataType::Null));
    }

    #[test]
    fn test_preview_rows_limits_height() {
        let df = DataFrame::new(vec![
            Series::new("pval".into(), vec![0.1, 0.2, 0.3]).into(),
        ])
        .unwrap();
        let preview = preview_rows(&df, 2);
        assert!(preview.contains("0.1"));
        assert!(preview.contains("0.2"));
        assert!(!preview.contains("0.3"));
    }
}
