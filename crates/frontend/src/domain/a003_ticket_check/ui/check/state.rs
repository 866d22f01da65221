use super::dialog::TicketDialog;
use contracts::shared::request_sequence::{RequestSequence, RequestToken};
use contracts::usecases::u003_ticket_check::{TicketCheckRequest, TicketCheckResponse};

/// Lookups of the ticket field; only the answer for the latest value counts
#[derive(Clone, Debug, Default)]
pub struct TicketCheckState {
    pub dialog: Option<TicketDialog>,
    seq: RequestSequence,
}

impl TicketCheckState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank values are not looked up and disown any lookup in flight
    pub fn begin(&mut self, value: &str) -> Option<(RequestToken, TicketCheckRequest)> {
        if value.trim().is_empty() {
            self.seq.invalidate();
            return None;
        }
        Some((self.seq.issue(), TicketCheckRequest::new(value)))
    }

    /// Returns false for a stale answer
    pub fn apply(&mut self, token: RequestToken, entered: &str, response: &TicketCheckResponse) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        if let Some(found) = TicketDialog::from_response(entered, response) {
            self.dialog = Some(found);
        }
        true
    }

    pub fn close(&mut self) {
        self.dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_ticket::TicketUse;

    fn used_once() -> TicketCheckResponse {
        let use_: TicketUse = serde_json::from_value(serde_json::json!({
            "ticket": "T-1", "email": "a@x.com", "customer": "Ana", "date": "2024-03-05"
        }))
        .unwrap();
        TicketCheckResponse::used(vec![use_])
    }

    #[test]
    fn blank_value_sends_nothing() {
        let mut state = TicketCheckState::new();
        assert!(state.begin("   ").is_none());
    }

    #[test]
    fn answer_for_an_older_value_is_discarded() {
        let mut state = TicketCheckState::new();
        let (old, _) = state.begin("T-1").unwrap();
        let (new, request) = state.begin("T-2").unwrap();
        assert_eq!(request.ticket, "T-2");

        assert!(!state.apply(old, "T-1", &used_once()));
        assert!(state.dialog.is_none());

        assert!(state.apply(new, "T-2", &TicketCheckResponse::unused()));
        assert!(state.dialog.is_none());
    }

    #[test]
    fn clearing_the_field_disowns_lookup_in_flight() {
        let mut state = TicketCheckState::new();
        let (token, _) = state.begin("T-1").unwrap();
        state.begin("");

        assert!(!state.apply(token, "T-1", &used_once()));
        assert!(state.dialog.is_none());
    }

    #[test]
    fn current_answer_with_a_prior_use_opens_dialog() {
        let mut state = TicketCheckState::new();
        let (token, _) = state.begin("T-1").unwrap();

        assert!(state.apply(token, "T-1", &used_once()));
        let dialog = state.dialog.clone().unwrap();
        assert_eq!(dialog.title, "El comprobante T-1 ya fue utilizado");

        state.close();
        assert!(state.dialog.is_none());
    }
}
