//! Accumulating opaque JSON pages.

use serde_json::Value;

/// Whether a page carries no results: `null`, `false`, zero, `""`, `"0"`,
/// `[]` or `{}`.
pub fn is_empty_page(page: &Value) -> bool {
    match page {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Append a page to `acc`. Arrays contribute their elements, `null`
/// contributes nothing, and any other value is appended as one element.
/// Returns how many items were appended.
pub fn append_items(acc: &mut Vec<Value>, page: Value) -> usize {
    match page {
        Value::Null => 0,
        Value::Array(items) => {
            let n = items.len();
            acc.extend(items);
            n
        }
        other => {
            acc.push(other);
            1
        }
    }
}
