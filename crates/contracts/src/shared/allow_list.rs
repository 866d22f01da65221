use std::collections::HashSet;

/// Outcome of checking a free-text field against its allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// Nothing entered yet; not validated
    Empty,
    Known,
    Unknown,
}

/// Set of accepted values for a free-text field (bank accounts, payment
/// methods). Built once from the options the server rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    values: HashSet<String>,
}

impl AllowList {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact match, as the option values are compared verbatim
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn check(&self, value: &str) -> FieldCheck {
        if value.is_empty() {
            FieldCheck::Empty
        } else if self.contains(value) {
            FieldCheck::Known
        } else {
            FieldCheck::Unknown
        }
    }
}
