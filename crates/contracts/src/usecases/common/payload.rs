use serde::{Deserialize, Serialize};

/// Body of a backend answer: either records, or a literal message the UI
/// shows in place of the table ("No hay cuentas disponibles", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Items(Vec<T>),
    Message(String),
}

impl<T> Payload<T> {
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Payload::Items(items) => Some(items),
            Payload::Message(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Payload::Items(_) => None,
            Payload::Message(m) => Some(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_and_string_bodies_are_told_apart() {
        let items: Payload<i32> = serde_json::from_str("[1, 2]").unwrap();
        let message: Payload<i32> = serde_json::from_str(r#""No accounts""#).unwrap();

        assert_eq!(items.items(), Some(&[1, 2][..]));
        assert_eq!(message.message(), Some("No accounts"));
        assert_eq!(message.items(), None);
    }
}
