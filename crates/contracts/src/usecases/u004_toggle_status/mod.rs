use crate::domain::a001_account::AccountId;
use crate::usecases::common::UseCaseMetadata;
use serde::{Deserialize, Serialize};

pub struct ToggleAccountStatus;

impl UseCaseMetadata for ToggleAccountStatus {
    fn usecase_index() -> &'static str {
        "u004"
    }

    fn usecase_name() -> &'static str {
        "toggle_status"
    }

    fn display_name() -> &'static str {
        "Activar / suspender cuenta"
    }

    fn endpoint() -> &'static str {
        "/adm/account/toggle-status"
    }
}

/// Sent as a JSON body; the CSRF field rides alongside and is ignored here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleStatusRequest {
    pub account_id: AccountId,
}

impl ToggleStatusRequest {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleStatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_a_json_object() {
        let body = serde_json::to_value(ToggleStatusRequest::new(AccountId(12))).unwrap();
        assert_eq!(body, serde_json::json!({"account_id": 12}));
    }

    #[test]
    fn account_id_is_required() {
        let missing = serde_json::from_str::<ToggleStatusRequest>(r#"{"csrfmiddlewaretoken":"abc"}"#);
        assert!(missing.is_err());

        let request: ToggleStatusRequest =
            serde_json::from_str(r#"{"account_id":12,"csrfmiddlewaretoken":"abc"}"#).unwrap();
        assert_eq!(request.account_id, AccountId(12));
    }

    #[test]
    fn refused_toggle_keeps_message() {
        let response: ToggleStatusResponse =
            serde_json::from_str(r#"{"success":false,"message":"Cuenta no encontrada"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "Cuenta no encontrada");
    }
}
