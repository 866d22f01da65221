use crate::domain::a001_account::Account;
use crate::usecases::common::Payload;
use serde::{Deserialize, Serialize};

pub const NO_ACCOUNTS_AVAILABLE: &str = "No hay cuentas disponibles";
pub const NO_SERVICES_SELECTED: &str = "No hay cuentas seleccionadas";

/// `{data: Account[] | string, total?, page?, page_size?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Payload<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: Payload::Message(message.into()),
            total: None,
            page: None,
            page_size: None,
        }
    }

    /// Number of pages; servers that omit paging metadata sent everything
    /// in one page.
    pub fn total_pages(&self) -> u32 {
        match (self.total, self.page_size) {
            (Some(total), Some(size)) if size > 0 => {
                let pages = total.div_ceil(u64::from(size));
                u32::try_from(pages).unwrap_or(u32::MAX).max(1)
            }
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_page_with_metadata() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"data":[{"id":1,"email":"a@x.com","password":"p","logo":"logos/n.png","expiration_acc":"2024-05-01","profile":1}],"total":51,"page":1,"page_size":25}"#,
        )
        .unwrap();

        assert_eq!(response.data.items().map(|a| a.len()), Some(1));
        assert_eq!(response.total_pages(), 3);
    }

    #[test]
    fn message_body_has_a_single_page() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"data":"No accounts"}"#).unwrap();

        assert_eq!(response.data.message(), Some("No accounts"));
        assert_eq!(response.total_pages(), 1);
    }
}
