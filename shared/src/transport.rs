//! Result payload carried inside the results URL.
//!
//! The whole result travels in the query string, so it is bounded by URL length
//! limits and ends up in browser history. The one-shot store in [`crate::channel`]
//! is the default hand-off; this encoding backs permalinks and older links.

use crate::{AnalysisResult, DecodeFailure};

pub const RESULTS_PATH: &str = "/results";
pub const DATA_PARAM: &str = "data";
pub const ID_PARAM: &str = "id";

pub fn encode_payload(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(result)?;
    Ok(urlencoding::encode(&json).into_owned())
}

pub fn decode_payload(encoded: &str) -> Result<AnalysisResult, DecodeFailure> {
    let json = urlencoding::decode(encoded)
        .map_err(|e| DecodeFailure::InvalidEncoding(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| DecodeFailure::InvalidJson(e.to_string()))
}

pub fn results_url_with_payload(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    Ok(format!(
        "{}?{}={}",
        RESULTS_PATH,
        DATA_PARAM,
        encode_payload(result)?
    ))
}

pub fn results_url_with_handle(id: &uuid::Uuid) -> String {
    format!("{}?{}={}", RESULTS_PATH, ID_PARAM, id)
}

/// Raw (still percent-encoded) value of `name` in a query string, with or without
/// the leading `?`. The first occurrence wins.
pub fn query_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip_keeps_status_and_confidence() {
        let mut original = AnalysisResult::new("PARKINSON", 91.0);
        original.details = "anything & everything = 100%".into();
        let encoded = encode_payload(&original).unwrap();
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('"'));

        let decoded = decode_payload(&encoded).unwrap();
        assert_eq!(decoded.classification(), original.classification());
        assert_eq!(decoded.confidence, original.confidence);
    }

    #[test]
    fn test_payload_survives_query_extraction() {
        let original = AnalysisResult::new("HEALTHY", 42.5);
        let url = results_url_with_payload(&original).unwrap();
        let (path, search) = url.split_once('?').unwrap();
        assert_eq!(path, RESULTS_PATH);

        let raw = query_param(search, DATA_PARAM).unwrap();
        let decoded = decode_payload(raw).unwrap();
        assert_eq!(decoded.classification(), Some("HEALTHY"));
        assert_eq!(decoded.confidence, 42.5);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_payload("not%20json"),
            Err(DecodeFailure::InvalidJson(_))
        ));
        assert!(matches!(
            decode_payload("%7B%22status%22%3A%22HEALTHY%22%7D"),
            Err(DecodeFailure::InvalidJson(_))
        ));
        assert!(matches!(
            decode_payload("%FF%FE"),
            Err(DecodeFailure::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_encode_reports_serde_errors() {
        let _: fn(&AnalysisResult) -> Result<String, serde_json::Error> = encode_payload;
        let _: fn(&AnalysisResult) -> Result<String, serde_json::Error> = results_url_with_payload;

        // NaN serialises as `null`, so only the decoding side rejects it.
        let mut result = AnalysisResult::new("HEALTHY", 50.0);
        result.confidence = f64::NAN;
        let encoded = encode_payload(&result).unwrap();
        assert!(matches!(
            decode_payload(&encoded),
            Err(DecodeFailure::InvalidJson(_))
        ));
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?id=abc&data=x", "id"), Some("abc"));
        assert_eq!(query_param("id=abc&data=x", "data"), Some("x"));
        assert_eq!(query_param("?a=hello%20world", "a"), Some("hello%20world"));
        assert_eq!(query_param("?flag", "flag"), Some(""));
        assert_eq!(query_param("?id=1&id=2", "id"), Some("1"));
        assert_eq!(query_param("", "id"), None);
        assert_eq!(query_param("?identity=1", "id"), None);
    }
}
