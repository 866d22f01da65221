use serde::{Deserialize, Serialize};

/// Backend key of a service (a streaming platform or similar offering)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Selectable entry read from the host page: a service or a duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
}

impl ServiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        let label = label.into();
        // Options without a label show their value
        let label = if label.trim().is_empty() {
            value.clone()
        } else {
            label
        };
        Self { value, label }
    }
}

/// Subscription length chosen by the operator.
///
/// The duration select renders the literal `None` for "not chosen".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(pub String);

impl Duration {
    pub const UNSET: &'static str = "None";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn unset() -> Self {
        Self(Self::UNSET.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        let value = self.0.trim();
        !value.is_empty() && value != Self::UNSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_blank_durations_are_invalid() {
        assert!(!Duration::unset().is_valid());
        assert!(!Duration::new("").is_valid());
        assert!(!Duration::new("  ").is_valid());
        assert!(Duration::new("12").is_valid());
    }

    #[test]
    fn option_label_falls_back_to_value() {
        assert_eq!(ServiceOption::new("3", "").label, "3");
        assert_eq!(ServiceOption::new("3", "Netflix").label, "Netflix");
    }
}
