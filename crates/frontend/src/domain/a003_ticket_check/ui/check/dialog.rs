use crate::shared::date_utils::format_display_date;
use contracts::usecases::u003_ticket_check::TicketCheckResponse;

/// Warning shown when a ticket was already used to pay for a sale
#[derive(Clone, Debug, PartialEq)]
pub struct TicketDialog {
    pub title: String,
    pub uses: Vec<TicketUseLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TicketUseLine {
    pub email: String,
    pub customer: String,
    pub date: String,
}

/// The two ways out of the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketAction {
    /// Close and keep the ticket
    UseAnyway,
    /// Clear the ticket input and close
    ChangeTicket,
}

impl TicketAction {
    pub const ALL: [TicketAction; 2] = [TicketAction::UseAnyway, TicketAction::ChangeTicket];

    pub fn label(self) -> &'static str {
        match self {
            TicketAction::UseAnyway => "Utilizar de todas formas",
            TicketAction::ChangeTicket => "Cambiar Comprobante",
        }
    }

    pub fn variant(self) -> &'static str {
        match self {
            TicketAction::UseAnyway => "secondary",
            TicketAction::ChangeTicket => "primary",
        }
    }

    /// Ticket input value once the action ran
    pub fn apply(self, ticket: &str) -> String {
        match self {
            TicketAction::UseAnyway => ticket.to_string(),
            TicketAction::ChangeTicket => String::new(),
        }
    }
}

impl TicketDialog {
    /// `None` when the ticket was never used
    pub fn from_response(entered: &str, response: &TicketCheckResponse) -> Option<Self> {
        let uses = response.prior_uses();
        let first = uses.first()?;
        let ticket = if first.ticket.is_empty() {
            entered
        } else {
            first.ticket.as_str()
        };

        Some(Self {
            title: format!("El comprobante {} ya fue utilizado", ticket),
            uses: uses
                .iter()
                .map(|u| TicketUseLine {
                    email: u.email.clone(),
                    customer: u.customer.clone().unwrap_or_default(),
                    date: format_display_date(&u.date),
                })
                .collect(),
        })
    }

    pub fn actions(&self) -> [TicketAction; 2] {
        TicketAction::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> TicketCheckResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn single_prior_use_opens_dialog_with_both_actions() {
        let dialog = TicketDialog::from_response(
            "T-1",
            &response(serde_json::json!({"data": [
                {"ticket": "T-1", "email": "a@x.com", "customer": "Ana", "date": "2024-03-02"}
            ]})),
        )
        .unwrap();

        assert_eq!(dialog.title, "El comprobante T-1 ya fue utilizado");
        assert_eq!(dialog.uses.len(), 1);
        assert_eq!(dialog.uses[0].date, "02/03/2024");

        let labels: Vec<_> = dialog.actions().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Utilizar de todas formas", "Cambiar Comprobante"]);
    }

    #[test]
    fn null_or_message_means_unused() {
        assert!(TicketDialog::from_response("T-1", &response(serde_json::json!({"data": null}))).is_none());
        assert!(TicketDialog::from_response("T-1", &response(serde_json::json!({}))).is_none());
        assert!(TicketDialog::from_response("T-1", &response(serde_json::json!({"data": "ok"}))).is_none());
        assert!(TicketDialog::from_response("T-1", &response(serde_json::json!({"data": []}))).is_none());
    }

    #[test]
    fn actions_keep_or_clear_the_ticket() {
        assert_eq!(TicketAction::UseAnyway.apply("T-1"), "T-1");
        assert_eq!(TicketAction::ChangeTicket.apply("T-1"), "");
    }
}
