use crate::domain::a001_account::{AccountDetail, AccountId};
use crate::domain::common::AggregateId;
use crate::shared::form_body::{FormBody, FormError};
use crate::usecases::common::{Payload, UseCaseMetadata};
use serde::{Deserialize, Serialize};

pub struct AccountDetailLookup;

impl UseCaseMetadata for AccountDetailLookup {
    fn usecase_index() -> &'static str {
        "u002"
    }

    fn usecase_name() -> &'static str {
        "account_detail"
    }

    fn display_name() -> &'static str {
        "Detalle de cuentas"
    }

    fn endpoint() -> &'static str {
        "/adm/sales/search/detail"
    }
}

/// Ids of the accounts checked in the result table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailRequest {
    pub ids: Vec<AccountId>,
}

impl DetailRequest {
    pub fn new(ids: Vec<AccountId>) -> Self {
        Self { ids }
    }

    pub fn to_form(&self) -> FormBody {
        let mut form = FormBody::new();
        for id in &self.ids {
            form.push("det[]", id.as_string());
        }
        form
    }

    pub fn from_form(form: &FormBody) -> Result<Self, FormError> {
        let ids = form
            .get_all("det[]")
            .into_iter()
            .map(|raw| {
                AccountId::from_string(raw).map_err(|reason| FormError::InvalidValue {
                    field: "det[]".to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ids })
    }
}

/// `{det: AccountDetail[] | string}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub det: Payload<AccountDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sent_as_repeated_det_fields() {
        let request = DetailRequest::new(vec![AccountId(3), AccountId(9)]);
        let form = request.to_form();

        assert_eq!(form.get_all("det[]"), vec!["3", "9"]);
        assert_eq!(DetailRequest::from_form(&form).unwrap(), request);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let form = FormBody::new().with("det[]", "x");
        assert!(DetailRequest::from_form(&form).is_err());
    }

    #[test]
    fn message_payload_parses() {
        let response: DetailResponse =
            serde_json::from_str(r#"{"det":"No hay cuentas seleccionadas"}"#).unwrap();
        assert_eq!(response.det.message(), Some("No hay cuentas seleccionadas"));
    }
}
