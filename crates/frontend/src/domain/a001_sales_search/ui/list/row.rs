use crate::shared::config::SalesConfig;
use crate::shared::date_utils::format_optional_date;
use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::common::AggregateId;

/// Display form of one search result
#[derive(Clone, Debug, PartialEq)]
pub struct AccountRow {
    pub id: AccountId,
    /// Value of the row checkbox
    pub checkbox_value: String,
    pub logo_url: String,
    pub service: String,
    pub email: String,
    pub password: String,
    pub expiration: String,
    pub profile: String,
    pub credentials: String,
    /// The first row is outlined as the suggested pick
    pub highlighted: bool,
}

impl AccountRow {
    pub fn new(account: &Account, config: &SalesConfig, highlighted: bool) -> Self {
        Self {
            id: account.id,
            checkbox_value: account.id.as_string(),
            logo_url: config.logo_url(&account.logo),
            service: account.acc_name.clone().unwrap_or_default(),
            email: account.email.clone(),
            password: account.password.clone(),
            expiration: format_optional_date(account.expiration_acc.as_deref()),
            profile: account.profile.clone().unwrap_or_default(),
            credentials: account.credentials(),
            highlighted,
        }
    }
}

pub fn build_rows(accounts: &[&Account], config: &SalesConfig) -> Vec<AccountRow> {
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| AccountRow::new(account, config, index == 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_dates_and_media_paths() {
        let account: Account = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "a@x.com",
            "password": "secret",
            "logo": "logos/netflix.png",
            "expiration_acc": "2024-05-01",
            "profile": 2
        }))
        .unwrap();

        let rows = build_rows(&[&account], &SalesConfig::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].checkbox_value, "1");
        assert_eq!(rows[0].logo_url, "/media/logos/netflix.png");
        assert_eq!(rows[0].expiration, "01/05/2024");
        assert_eq!(rows[0].profile, "2");
        assert_eq!(rows[0].credentials, "a@x.com:secret");
        assert!(rows[0].highlighted);
    }

    #[test]
    fn only_first_row_is_highlighted() {
        let a: Account = serde_json::from_value(serde_json::json!({"id": 1, "email": "a@x.com"})).unwrap();
        let b: Account = serde_json::from_value(serde_json::json!({"id": 2, "email": "b@x.com"})).unwrap();

        let rows = build_rows(&[&a, &b], &SalesConfig::default());
        assert_eq!(
            rows.iter().map(|r| r.highlighted).collect::<Vec<_>>(),
            vec![true, false]
        );
    }
}
