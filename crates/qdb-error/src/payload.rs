use std::fmt;

use crate::repr;

/// Raw input that could not be understood, kept exactly as it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum RawData {
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl RawData {
    /// Quoted form, used where the data is echoed inside a sentence or a diagnostic.
    pub fn repr(&self) -> String {
        match self {
            RawData::Text(text) => repr::quote(text),
            RawData::Bytes(bytes) => repr::quote_bytes(bytes),
            RawData::Json(value) => value.to_string(),
        }
    }

    /// Like [`RawData::repr`] but tags JSON, so a JSON string never reads as quoted text.
    pub(crate) fn diagnostic_repr(&self) -> String {
        match self {
            RawData::Json(value) => format!("json({value})"),
            _ => self.repr(),
        }
    }
}

impl fmt::Display for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawData::Text(text) => f.write_str(text),
            RawData::Bytes(bytes) => f.write_str(&repr::quote_bytes(bytes)),
            RawData::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for RawData {
    fn from(text: String) -> Self {
        RawData::Text(text)
    }
}

impl From<&str> for RawData {
    fn from(text: &str) -> Self {
        RawData::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawData {
    fn from(bytes: Vec<u8>) -> Self {
        RawData::Bytes(bytes)
    }
}

impl From<&[u8]> for RawData {
    fn from(bytes: &[u8]) -> Self {
        RawData::Bytes(bytes.to_vec())
    }
}

impl From<serde_json::Value> for RawData {
    fn from(value: serde_json::Value) -> Self {
        RawData::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::text(RawData::from("not json"), "not json", "'not json'")]
    #[case::bytes(RawData::from(&b"\x00ab"[..]), "b'\\x00ab'", "b'\\x00ab'")]
    #[case::json(RawData::from(json!({"e": 1})), r#"{"e":1}"#, r#"{"e":1}"#)]
    fn test_renderings(#[case] data: RawData, #[case] display: &str, #[case] repr: &str) {
        assert_eq!(data.to_string(), display);
        assert_eq!(data.repr(), repr);
    }

    #[rstest]
    #[case::text(RawData::from("it's"), "\"it's\"")]
    #[case::json_string(RawData::from(json!("it's")), "json(\"it's\")")]
    #[case::json_object(RawData::from(json!({"e": 1})), r#"json({"e":1})"#)]
    #[case::bytes(RawData::from(b"it's".to_vec()), "b\"it's\"")]
    fn test_diagnostic_repr(#[case] data: RawData, #[case] expected: &str) {
        assert_eq!(data.diagnostic_repr(), expected);
    }
}
