use serde_json::{Map, Value};

use crate::error::{ApiError, ForwardedError};

/// Parse a request body as a loosely-typed JSON object.
///
/// An empty body is an empty object. Anything that is not a JSON object is
/// forwarded to the error responder as a 400.
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ForwardedError::bad_request("Request body must be a JSON object").into()),
        Err(e) => Err(ForwardedError::bad_request(format!("Invalid JSON payload: {}", e)).into()),
    }
}

/// Parse a path segment the lenient way: leading whitespace and an optional
/// sign are skipped, then the longest run of digits is read. `"12abc"` is 12.
/// `None` when there are no digits at all; such an id matches no user.
pub fn parse_path_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn path_ids_parse_leniently() {
        assert_eq!(parse_path_id("42"), Some(42));
        assert_eq!(parse_path_id("  7"), Some(7));
        assert_eq!(parse_path_id("-3"), Some(-3));
        assert_eq!(parse_path_id("+5"), Some(5));
        assert_eq!(parse_path_id("12abc"), Some(12));
        assert_eq!(parse_path_id("abc"), None);
        assert_eq!(parse_path_id(""), None);
        assert_eq!(parse_path_id("-"), None);
    }

    #[test]
    fn empty_body_is_empty_object() {
        assert!(parse_payload(b"").unwrap().is_empty());
        assert!(parse_payload(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn object_body_is_parsed() {
        let map = parse_payload(br#"{"name":"Cami"}"#).unwrap();
        assert_eq!(map.get("name"), Some(&json!("Cami")));
    }

    #[test]
    fn malformed_or_non_object_body_is_a_bad_request() {
        for body in [&b"{\"name\":"[..], &b"[1,2]"[..], &b"\"text\""[..]] {
            let err = parse_payload(body).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert!(matches!(err, ApiError::Forwarded(_)));
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>1</b>"), "&lt;b&gt;1&lt;/b&gt;");
        assert_eq!(escape_html("42"), "42");
    }
}
