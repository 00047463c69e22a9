//! Echo endpoint: returns whatever JSON the caller sent.
//!
//! The body is never rejected. An empty body, a body that is not JSON, or an
//! empty JSON value (`null`, `false`, zero, `""`, `[]`) all echo back as an
//! empty object. The request content type is not inspected.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub echo: Value,
    pub received_at: String,
}

pub async fn echo(State(state): State<AppState>, body: Bytes) -> Json<EchoResponse> {
    let received_at = state.clock.timestamp();
    Json(EchoResponse {
        echo: parse_payload(&body),
        received_at,
    })
}

/// Parse the request body, degrading to `{}` on anything unusable.
pub fn parse_payload(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return empty_object();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) if is_empty_value(&value) => empty_object(),
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, bytes = body.len(), "Echo body is not valid JSON");
            empty_object()
        }
    }
}

/// `null`, `false`, zero, `""` and `[]` carry nothing to echo.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload_object() {
        assert_eq!(parse_payload(br#"{"a":1}"#), json!({"a": 1}));
    }

    #[test]
    fn test_parse_payload_preserves_nested_values() {
        let body = br#"{"list":[1,"two",null,{"x":false}],"n":1.5}"#;
        assert_eq!(
            parse_payload(body),
            json!({"list": [1, "two", null, {"x": false}], "n": 1.5})
        );
    }

    #[test]
    fn test_parse_payload_non_empty_values_pass_through() {
        assert_eq!(parse_payload(b"[1,2,3]"), json!([1, 2, 3]));
        assert_eq!(parse_payload(b"\"hello\""), json!("hello"));
        assert_eq!(parse_payload(b"42"), json!(42));
        assert_eq!(parse_payload(b"-0.5"), json!(-0.5));
        assert_eq!(parse_payload(b"true"), json!(true));
        assert_eq!(parse_payload(b"[0]"), json!([0]));
        assert_eq!(parse_payload(b"\" \""), json!(" "));
    }

    #[test]
    fn test_parse_payload_empty_values_become_object() {
        for body in ["false", "0", "0.0", "-0.0", "\"\"", "[]", "{}"] {
            assert_eq!(parse_payload(body.as_bytes()), json!({}), "{body}");
        }
    }

    #[test]
    fn test_parse_payload_empty_body() {
        assert_eq!(parse_payload(b""), json!({}));
        assert_eq!(parse_payload(b"  \n\t"), json!({}));
    }

    #[test]
    fn test_parse_payload_invalid_json() {
        assert_eq!(parse_payload(b"not json"), json!({}));
        assert_eq!(parse_payload(b"{\"a\":"), json!({}));
        assert_eq!(parse_payload(&[0xff, 0xfe, 0x00]), json!({}));
    }

    #[test]
    fn test_parse_payload_null() {
        assert_eq!(parse_payload(b"null"), json!({}));
    }
}
