use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a record received from the sales backend.
///
/// Ids travel as form values and checkbox values, so every id must
/// round-trip through its string form.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i64_ids_parse_trimmed_values() {
        assert_eq!(<i64 as AggregateId>::from_string(" 42 "), Ok(42));
        assert!(<i64 as AggregateId>::from_string("abc").is_err());
        assert_eq!(7i64.as_string(), "7");
    }
}
