use serde_json::Value;

/// Render a possibly-absent JSON value for diagnostics.
///
/// An absent value (a missing object property or an out-of-range tuple
/// position) renders as `undefined`; a present value renders as compact
/// JSON.
///
/// # Examples
///
/// ```
/// use json_shape_util::stringify::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(None), "undefined");
/// assert_eq!(stringify(Some(&json!(42))), "42");
/// assert_eq!(stringify(Some(&json!("x"))), "\"x\"");
/// assert_eq!(stringify(Some(&json!([1, null]))), "[1,null]");
/// ```
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Serialize text as a JSON string value.
///
/// Wraps the text in double quotes and escapes special characters.
///
/// # Examples
///
/// ```
/// use json_shape_util::stringify::quote;
///
/// assert_eq!(quote("hello"), "\"hello\"");
/// assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn quote(text: &str) -> String {
    // String serialization cannot fail - serde_json always successfully serializes strings
    serde_json::to_string(text).expect("string serialization is infallible")
}
