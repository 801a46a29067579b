use serde_json::{Map, Value};

/// One package's status fields, in payload order.
///
/// Values are untyped: flat build flags are usually `0`/`1`, runtime-version
/// columns hold a nested platform map, and the two metadata fields carry
/// arbitrary scalars.
pub type PackageRecord = Map<String, Value>;

/// Present when the package is tracked on the public index
pub const FIELD_CPAN: &str = "cpan";

/// Present when the public index has a newer release than the one built
pub const FIELD_CPAN_VERSION: &str = "cpan_version";

/// Returns true for the metadata fields that never become schema columns.
pub fn is_metadata_field(key: &str) -> bool {
    key == FIELD_CPAN || key == FIELD_CPAN_VERSION
}

/// Loose truthiness used for status glyphs: `null`, `false`, `0`, `NaN` and
/// the empty string are falsy; containers are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The broken sentinel is the number zero. `"0"` and `false` are not broken,
/// they only render as missing.
pub fn is_broken_sentinel(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.as_f64() == Some(0.0))
}

/// Returns true when the field or any value nested one level inside it is
/// the broken sentinel.
pub fn field_is_broken(value: &Value) -> bool {
    match value {
        Value::Object(platforms) => platforms.values().any(is_broken_sentinel),
        Value::Array(items) => items.iter().any(is_broken_sentinel),
        other => is_broken_sentinel(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("2.1")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
    }

    #[test]
    fn test_broken_sentinel_is_numeric_zero_only() {
        assert!(is_broken_sentinel(&json!(0)));
        assert!(!is_broken_sentinel(&json!("0")));
        assert!(!is_broken_sentinel(&json!(false)));
        assert!(!is_broken_sentinel(&json!(null)));
        assert!(!is_broken_sentinel(&json!(1)));
    }

    #[test]
    fn test_field_is_broken_nested() {
        assert!(field_is_broken(&json!({"linux": 1, "darwin": 0})));
        assert!(!field_is_broken(&json!({"linux": 1})));
        assert!(!field_is_broken(&json!(null)));
        assert!(field_is_broken(&json!(0)));
    }

    #[test]
    fn test_metadata_fields() {
        assert!(is_metadata_field("cpan"));
        assert!(is_metadata_field("cpan_version"));
        assert!(!is_metadata_field("spec"));
    }
}
