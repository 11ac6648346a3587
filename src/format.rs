//! Display formatting for listing fields.

use serde_json::{Map, Value};

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats an amount as US dollars without decimals, e.g. `$1,250,000`
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits))
}

pub fn format_price_opt(amount: Option<f64>) -> String {
    amount.map(format_price).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Living area with unit suffix; absent or zero area yields the placeholder
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a != 0.0 && a.is_finite() => format!("{} sq ft", format_number(a)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Plain number: integral values without a fractional part
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Number cell of the detail panel; absent and zero values show the placeholder
pub fn number_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format_number(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn text_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Loose truthiness of a loader value: `false`, `0`, `""` and `null` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Turns a feature group into a comma separated list.
///
/// Accepts a JSON-encoded flag object, an already decoded flag object, an
/// array of names or free text. Flag keys are split at camel-case boundaries
/// and flags with falsy values are dropped. A string that fails to decode is
/// logged and returned unchanged.
pub fn format_features(features: &Value) -> String {
    match features {
        Value::String(raw) if raw.starts_with('{') => {
            match serde_json::from_str::<Map<String, Value>>(raw) {
                Ok(flags) => join_flags(&flags),
                Err(e) => {
                    log::warn!("Error parsing features {:?}: {}", raw, e);
                    raw.clone()
                }
            }
        }
        Value::String(raw) => raw.clone(),
        Value::Object(flags) => join_flags(flags),
        Value::Array(items) => items
            .iter()
            .filter(|item| is_truthy(item))
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn join_flags(flags: &Map<String, Value>) -> String {
    flags
        .iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, _)| expand_flag_key(key))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `hasPool` -> `Pool`, `centralAir` -> `central Air`
pub fn expand_flag_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let words: Vec<&str> = spaced.split_whitespace().collect();
    match words.as_slice() {
        [first, rest @ ..]
            if !rest.is_empty()
                && (first.eq_ignore_ascii_case("has") || first.eq_ignore_ascii_case("is")) =>
        {
            rest.join(" ")
        }
        _ => words.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1_250_000.0), "$1,250,000");
        assert_eq!(format_price(999.0), "$999");
        assert_eq!(format_price(1000.0), "$1,000");
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(1234.5), "$1,235");
        assert_eq!(format_price(-5200.0), "-$5,200");
        assert_eq!(format_price_opt(None), "N/A");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(Some(2400.0)), "2400 sq ft");
        assert_eq!(format_area(Some(1850.5)), "1850.5 sq ft");
        assert_eq!(format_area(Some(0.0)), "N/A");
        assert_eq!(format_area(None), "N/A");
    }

    #[test]
    fn test_placeholder_cells() {
        assert_eq!(number_or_na(Some(2.5)), "2.5");
        assert_eq!(number_or_na(Some(1998.0)), "1998");
        assert_eq!(number_or_na(Some(0.0)), "N/A");
        assert_eq!(text_or_na(Some("  ")), "N/A");
        assert_eq!(text_or_na(Some("Active")), "Active");
        assert_eq!(text_or_na(None), "N/A");
    }

    #[test]
    fn test_encoded_flags_drop_falsy_values() {
        let features = json!(r#"{"hasPool":true,"hasSpa":false}"#);
        assert_eq!(format_features(&features), "Pool");
    }

    #[test]
    fn test_decoded_flags_keep_key_order() {
        let features = json!({"centralAir": true, "ceilingFan": 1, "wetBar": 0, "fireplace": "yes"});
        assert_eq!(format_features(&features), "central Air, ceiling Fan, fireplace");
    }

    #[test]
    fn test_broken_json_returns_input() {
        let features = json!(r#"{"hasPool":tru"#);
        assert_eq!(format_features(&features), r#"{"hasPool":tru"#);
    }

    #[test]
    fn test_plain_text_and_arrays() {
        assert_eq!(format_features(&json!("Granite counters")), "Granite counters");
        assert_eq!(format_features(&json!(["Dishwasher", "", "Range"])), "Dishwasher, Range");
        assert_eq!(format_features(&json!(null)), "");
    }

    #[test]
    fn test_expand_flag_key() {
        assert_eq!(expand_flag_key("hasPool"), "Pool");
        assert_eq!(expand_flag_key("isGated"), "Gated");
        assert_eq!(expand_flag_key("has"), "has");
        assert_eq!(expand_flag_key("walkInCloset"), "walk In Closet");
        assert_eq!(expand_flag_key("Garage"), "Garage");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
    }
}
