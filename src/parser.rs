//! JSON parser for captured Trip Planner responses.

use anyhow::Result;
use serde_json::Value;

/// Decodes a JSON document from raw bytes, keeping object key order.
///
/// # Errors
///
/// Returns an error if the bytes are not a single valid JSON value.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_bytes_fails() {
        // Unlike protobuf, empty input is not a valid JSON document
        assert!(parse_document(&[]).is_err());
    }

    #[test]
    fn test_parse_invalid_bytes() {
        let invalid_bytes = b"{\"version\": ";
        assert!(parse_document(invalid_bytes).is_err());
    }

    #[test]
    fn test_parse_minimal_response() {
        let doc = parse_document(br#"{"version": "10.2.1.42", "locations": []}"#).unwrap();
        assert_eq!(doc["version"], "10.2.1.42");
        assert!(doc["locations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let doc = parse_document(br#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
