use crate::domain::common::lenient::{default_true, text_or_number};
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Primary key of a sellable account on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for AccountId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        <i64 as AggregateId>::from_string(s).map(AccountId)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Search row
// ============================================================================

/// Service credential as returned by the account search.
///
/// Read-only on the client; only `status` changes, and only through the
/// toggle-status command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Media path of the service logo, relative to `/media/`
    #[serde(default)]
    pub logo: String,
    /// Service description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc_name: Option<String>,
    #[serde(default)]
    pub expiration_acc: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub profile: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub customer_end_date: Option<String>,
}

impl Account {
    /// Case-insensitive substring match on the email.
    ///
    /// An empty needle matches every account.
    pub fn email_contains(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.is_empty() || self.email.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Credentials in the `email:password` form operators paste to customers
    pub fn credentials(&self) -> String {
        format!("{}:{}", self.email, self.password)
    }
}

// ============================================================================
// Detail row
// ============================================================================

/// Placeholder shown for an account that has no customer
pub const AVAILABLE_LABEL: &str = "Disponible";

/// One record of the detail lookup: every account row sharing the
/// credentials of a selected account, with its current holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetail {
    pub id: AccountId,
    #[serde(default)]
    pub logo: String,
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub profile: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub customer_end_date: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
}

impl AccountDetail {
    pub fn customer_label(&self) -> &str {
        self.customer.as_deref().unwrap_or(AVAILABLE_LABEL)
    }

    pub fn end_date_label(&self) -> &str {
        self.customer_end_date.as_deref().unwrap_or(AVAILABLE_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_accepts_numeric_profile_and_missing_optionals() {
        let account: Account = serde_json::from_str(
            r#"{"id": 1, "email": "a@x.com", "password": "p", "profile": 3}"#,
        )
        .unwrap();

        assert_eq!(account.id, AccountId(1));
        assert_eq!(account.profile.as_deref(), Some("3"));
        assert!(account.status);
        assert_eq!(account.customer, None);
        assert_eq!(account.expiration_acc, None);
    }

    #[test]
    fn email_match_ignores_case() {
        let account: Account =
            serde_json::from_str(r#"{"id": 1, "email": "Admin@Mail.com"}"#).unwrap();

        assert!(account.email_contains("ADM"));
        assert!(account.email_contains("adm"));
        assert!(account.email_contains(""));
        assert!(!account.email_contains("zzz"));
    }

    #[test]
    fn detail_without_customer_is_available() {
        let detail: AccountDetail = serde_json::from_str(
            r#"{"id": 5, "email": "a@x.com", "customer": null, "customer_end_date": "Disponible", "status": false}"#,
        )
        .unwrap();

        assert_eq!(detail.customer_label(), "Disponible");
        assert_eq!(detail.end_date_label(), "Disponible");
        assert!(!detail.status);
    }

    #[test]
    fn account_id_round_trips_through_checkbox_value() {
        let id = AccountId::from_string("17").unwrap();
        assert_eq!(id.as_string(), "17");
        assert_eq!(id.to_string(), "17");
    }
}
