//! `application/x-www-form-urlencoded` bodies.
//!
//! The sales endpoints read repeated keys (`data[]`, `det[]`), so the body
//! is an ordered list of pairs rather than a map.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid form encoding: {0}")]
    InvalidEncoding(String),

    #[error("missing form field `{0}`")]
    MissingField(String),

    #[error("invalid value for form field `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, FormError> {
        self.get(key)
            .ok_or_else(|| FormError::MissingField(key.to_string()))
    }

    /// Every value for a repeated key, in body order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn encode(&self) -> Result<String, FormError> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| FormError::InvalidEncoding(e.to_string()))
    }

    pub fn decode(body: &str) -> Result<Self, FormError> {
        serde_urlencoded::from_str::<Vec<(String, String)>>(body)
            .map(Self::from)
            .map_err(|e| FormError::InvalidEncoding(e.to_string()))
    }
}

impl From<Vec<(String, String)>> for FormBody {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_their_order() {
        let body = FormBody::new()
            .with("det[]", "3")
            .with("det[]", "1")
            .with("page", "2");

        let decoded = FormBody::decode(&body.encode().unwrap()).unwrap();
        assert_eq!(decoded.get_all("det[]"), vec!["3", "1"]);
        assert_eq!(decoded.get("page"), Some("2"));
    }

    #[test]
    fn brackets_and_json_values_are_escaped() {
        let body = FormBody::new().with("data[]", r#"{"service":"1","duration":"12"}"#);
        let encoded = body.encode().unwrap();

        assert!(encoded.starts_with("data%5B%5D="));
        assert!(!encoded.contains('{'));
    }

    #[test]
    fn plus_decodes_to_space_and_bare_keys_are_empty() {
        let decoded = FormBody::decode("data=T+001&flag").unwrap();
        assert_eq!(decoded.get("data"), Some("T 001"));
        assert_eq!(decoded.get("flag"), Some(""));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let decoded = FormBody::decode("a=1").unwrap();
        assert_eq!(
            decoded.require("account_id"),
            Err(FormError::MissingField("account_id".to_string()))
        );
    }

    #[test]
    fn spaces_encode_as_plus() {
        let encoded = FormBody::new().with("data", "T 001").encode().unwrap();
        assert_eq!(encoded, "data=T+001");
    }

    #[test]
    fn extracted_pairs_wrap_without_copying_order() {
        let form = FormBody::from(vec![
            ("det[]".to_string(), "2".to_string()),
            ("det[]".to_string(), "1".to_string()),
        ]);
        assert_eq!(form.get_all("det[]"), vec!["2", "1"]);
    }
}
