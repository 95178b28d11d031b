//! Response decoding.
//!
//! A response is checked in classification order: status first, then the
//! body is read and decoded as JSON.

use reqwest::Response;
use serde_json::Value;

use crate::error_handling::{classify_request_error, ApiError, ResponseBody};

/// Decodes a services response into a JSON value.
///
/// # Errors
///
/// - `ApiError::Status` for a non-2xx status, with the body parsed as JSON
///   when possible and kept as raw text otherwise
/// - `ApiError::Unclassified` (or `Transport`) if the body cannot be read
/// - `ApiError::Decode` if a 2xx body is not valid JSON
pub(crate) async fn decode_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();

    if !status.is_success() {
        // The body only feeds the diagnostic; a failed read leaves it empty
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            body: ResponseBody::from_text(text),
        });
    }

    let bytes = response.bytes().await.map_err(classify_request_error)?;
    decode_body(&bytes)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes a raw 2xx body.
///
/// A leading UTF-8 byte order mark is skipped. The decode error keeps the
/// body exactly as received.
pub(crate) fn decode_body(bytes: &[u8]) -> Result<Value, ApiError> {
    let json = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(json).map_err(|source| ApiError::from_decode(source, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_body_object() {
        let value = decode_body(br#"{"services":[{"id":1,"name":"EC2"}]}"#).expect("valid json");
        assert_eq!(value, json!({"services": [{"id": 1, "name": "EC2"}]}));
    }

    #[test]
    fn test_decode_body_any_valid_json() {
        let bodies: [&[u8]; 7] = [b"{}", b"[]", b"null", b"true", b"42", b"\"text\"", b"  {}\n"];
        for body in bodies {
            assert!(
                decode_body(body).is_ok(),
                "{:?} should decode",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_decode_body_skips_byte_order_mark() {
        let value = decode_body(b"\xEF\xBB\xBF{\"bom\":1}").expect("BOM-prefixed json");
        assert_eq!(value, json!({"bom": 1}));
    }

    #[test]
    fn test_decode_body_bom_only_is_malformed() {
        let err = decode_body(UTF8_BOM).expect_err("no value after the BOM");
        match err {
            ApiError::Decode { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 0);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_keeps_large_integers() {
        let value = decode_body(br#"{"id":123456789012345678901234567890}"#).expect("valid json");
        assert_eq!(value["id"].to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_decode_body_malformed() {
        let err = decode_body(b"{\"services\": [").expect_err("truncated json");
        match err {
            ApiError::Decode { line, message, .. } => {
                assert_eq!(line, 1);
                assert!(message.contains("EOF"));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_reports_later_line() {
        let err = decode_body(b"{\n  \"a\": 1,\n  oops\n}").expect_err("bare word");
        match err {
            ApiError::Decode { line, column, .. } => {
                assert_eq!(line, 3);
                assert!(column >= 1);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
