//! Lenient readers for feed fields. Bad values become defaults, never errors.

use serde_json::Value;

/// Integer field that may arrive as a number or a numeric string. Anything else reads as 0.
pub(crate) fn lenient_int(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i32>().unwrap_or(0),
        _ => 0,
    }
}

/// Non-empty string field; anything else is treated as absent.
pub(crate) fn lenient_ref(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Free-text field, defaulting to empty.
pub(crate) fn lenient_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
