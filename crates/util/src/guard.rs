use serde_json::Value;

/// Check if a value is a JSON string.
///
/// # Examples
///
/// ```
/// use json_shape_util::guard::is_string;
/// use serde_json::json;
///
/// assert!(is_string(&json!("hello")));
/// assert!(!is_string(&json!(42)));
/// ```
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Check if a value is a JSON number.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Check if a value is a JSON boolean.
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Check if a value is a JSON array, regardless of element types.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Check if a value is a JSON object, regardless of member types.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Reject every value. Guard backing the always-failing decoder.
pub fn is_never(_value: &Value) -> bool {
    false
}

/// Check if a value strictly equals one of the allowed literals.
///
/// # Examples
///
/// ```
/// use json_shape_util::guard::is_literal_of;
/// use serde_json::json;
///
/// let allowed = [json!("a"), json!(1)];
/// assert!(is_literal_of(&json!("a"), &allowed));
/// assert!(is_literal_of(&json!(1), &allowed));
/// assert!(!is_literal_of(&json!("b"), &allowed));
/// ```
pub fn is_literal_of(value: &Value, allowed: &[Value]) -> bool {
    allowed.iter().any(|candidate| candidate == value)
}
