use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixture data served by the stub in place of the production database
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i64,
    /// Id of the owning service
    pub service: String,
    pub email: String,
    pub password: String,
    pub expiration_date: NaiveDate,
    pub profile: i32,
    pub status: bool,
    /// Current holder; `None` means the profile is for sale
    #[serde(default)]
    pub customer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub account: i64,
    pub customer: String,
    /// Payment ticket
    pub invoice: String,
    pub created_at: NaiveDate,
    pub expiration_date: NaiveDate,
}

const EMBEDDED_FIXTURES: &str = include_str!("../../../fixtures/sales.json");

impl Fixtures {
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid fixtures: {}", e))
    }

    pub fn service(&self, id: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn account(&self, id: i64) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_parse() {
        let fixtures = Fixtures::embedded().unwrap();
        assert!(!fixtures.services.is_empty());
        assert!(fixtures.accounts.iter().all(|a| fixtures.service(&a.service).is_some()));
        assert!(fixtures.sales.iter().all(|s| fixtures.account(s.account).is_some()));
    }
}
