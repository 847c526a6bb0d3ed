use serde_json::Value;
use std::borrow::Cow;

/// Text projection of a loosely typed field.
///
/// Strings are borrowed, numbers and booleans are rendered, anything else
/// (absent, null, arrays, objects) reads as an empty string.
pub fn value_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
        _ => Cow::Borrowed(""),
    }
}
