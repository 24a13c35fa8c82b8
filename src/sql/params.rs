//! Convert request JSON values to text parameters; the statements cast them to column types.

use serde_json::Value;

/// Text form of a JSON value as bound to the store. `null` binds as SQL NULL.
pub fn bind_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(v.to_string()),
    }
}

pub fn bind_opt(v: &Option<Value>) -> Option<String> {
    v.as_ref().and_then(bind_text)
}
