use crate::domain::a003_ticket::TicketUse;
use crate::domain::common::lenient::list_or_none;
use crate::shared::form_body::{FormBody, FormError};
use crate::usecases::common::UseCaseMetadata;
use serde::{Deserialize, Serialize};

pub struct TicketCheck;

impl UseCaseMetadata for TicketCheck {
    fn usecase_index() -> &'static str {
        "u003"
    }

    fn usecase_name() -> &'static str {
        "ticket_check"
    }

    fn display_name() -> &'static str {
        "Verificación de comprobante"
    }

    fn endpoint() -> &'static str {
        "/adm/sales/check/ticket"
    }
}

/// The ticket is passed through as typed, without format checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCheckRequest {
    pub ticket: String,
}

impl TicketCheckRequest {
    pub fn new(ticket: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
        }
    }

    pub fn to_form(&self) -> FormBody {
        FormBody::new().with("data", self.ticket.clone())
    }

    pub fn from_form(form: &FormBody) -> Result<Self, FormError> {
        form.require("data").map(Self::new)
    }
}

/// `{data: PriorUse[] | null}`; anything but an array means "never used"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TicketCheckResponse {
    #[serde(default, deserialize_with = "list_or_none")]
    pub data: Option<Vec<TicketUse>>,
}

impl TicketCheckResponse {
    pub fn unused() -> Self {
        Self { data: None }
    }

    pub fn used(uses: Vec<TicketUse>) -> Self {
        Self {
            data: Some(uses),
        }
    }

    pub fn prior_uses(&self) -> &[TicketUse] {
        self.data.as_deref().unwrap_or(&[])
    }
}
