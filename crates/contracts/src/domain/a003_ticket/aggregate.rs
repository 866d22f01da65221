use crate::domain::common::lenient::text_or_number;
use serde::{Deserialize, Serialize};

/// A previous sale that was paid with the same ticket (payment receipt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketUse {
    pub ticket: String,
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub customer: Option<String>,
    #[serde(default)]
    pub date: String,
}
