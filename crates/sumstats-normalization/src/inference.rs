//! Best-effort scalar inference.

use sumstats_common::{parse_f64, parse_i64};
use sumstats_model::InferredValue;

type ParseAttempt = fn(&str) -> Option<InferredValue>;

/// Tried in order; the first success wins.
const PARSE_ATTEMPTS: [ParseAttempt; 2] = [parse_integer, parse_float];

fn parse_integer(value: &str) -> Option<InferredValue> {
    parse_i64(value).map(InferredValue::Integer)
}

fn parse_float(value: &str) -> Option<InferredValue> {
    parse_f64(value).map(InferredValue::Float)
}

/// Narrow `value` to an integer, then a float, falling back to the text itself.
///
/// Never fails.
///
/// # Examples
///
/// ```
/// use sumstats_model::InferredValue;
/// use sumstats_normalization::infer;
///
/// assert_eq!(infer("5"), InferredValue::Integer(5));
/// assert_eq!(infer("5.5"), InferredValue::Float(5.5));
/// assert_eq!(infer("chr1"), InferredValue::Text("chr1".to_string()));
/// ```
pub fn infer(value: &str) -> InferredValue {
    PARSE_ATTEMPTS
        .iter()
        .find_map(|attempt| attempt(value))
        .unwrap_or_else(|| InferredValue::Text(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_before_float() {
        assert_eq!(infer("-12"), InferredValue::Integer(-12));
        assert_eq!(infer("1e3"), InferredValue::Float(1000.0));
    }

    #[test]
    fn test_text_is_returned_unchanged() {
        assert_eq!(infer(" rs123 "), InferredValue::Text(" rs123 ".to_string()));
        assert_eq!(infer(""), InferredValue::Text(String::new()));
    }

    proptest! {
        #[test]
        fn integers_round_trip(v in any::<i64>()) {
            prop_assert_eq!(infer(&v.to_string()), InferredValue::Integer(v));
        }

        #[test]
        fn identifiers_stay_text(s in "[a-z_][a-z0-9_]{0,12}") {
            prop_assume!(!matches!(s.as_str(), "inf" | "infinity" | "nan"));
            prop_assert_eq!(infer(&s), InferredValue::Text(s.clone()));
        }
    }
}
