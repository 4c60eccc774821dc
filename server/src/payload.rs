//! Lenient write-payload parsing.
//!
//! A malformed or missing JSON body behaves exactly like an absent field, so
//! every write route answers with its own 400 body instead of a framework
//! rejection.

use axum::body::Bytes;
use serde_json::Value;

/// Extracts and trims a required text field from a request body.
///
/// Returns `None` when the body is not JSON, the field is absent or not a
/// string, or the value is empty after trimming.
pub fn text_field(body: &Bytes, field: &str) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let text = value.get(field)?.as_str()?.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(raw: &str) -> Bytes {
        Bytes::copy_from_slice(raw.as_bytes())
    }

    #[test]
    fn extracts_and_trims() {
        assert_eq!(
            text_field(&body(r#"{"quote": "  Stay curious.  "}"#), "quote"),
            Some("Stay curious.".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_rejected() {
        assert_eq!(text_field(&body(r#"{"quote": "   "}"#), "quote"), None);
    }

    #[test]
    fn missing_field_is_rejected() {
        assert_eq!(text_field(&body(r#"{"other": "x"}"#), "quote"), None);
    }

    #[test]
    fn non_string_field_is_rejected() {
        assert_eq!(text_field(&body(r#"{"quote": 42}"#), "quote"), None);
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert_eq!(text_field(&body("not json"), "quote"), None);
        assert_eq!(text_field(&body(""), "quote"), None);
    }
}
