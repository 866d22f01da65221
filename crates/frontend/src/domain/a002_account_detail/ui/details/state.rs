use contracts::domain::a001_account::{AccountDetail, AccountId};
use contracts::shared::request_sequence::{RequestSequence, RequestToken};
use contracts::usecases::common::Payload;
use contracts::usecases::u002_account_detail::{DetailRequest, DetailResponse};
use contracts::usecases::u004_toggle_status::ToggleStatusResponse;

const TOGGLE_FAILED: &str = "Hubo un error al cambiar el estado de la cuenta";

/// Detail panel of the checked accounts
#[derive(Clone, Debug, Default)]
pub struct DetailPanelState {
    /// Ids the panel currently shows (or is loading)
    pub selection: Vec<AccountId>,
    pub details: Vec<AccountDetail>,
    pub message: Option<String>,
    pub visible: bool,
    pub loading: bool,
    /// Whether the sale form may be submitted with this selection
    pub submit_enabled: bool,
    seq: RequestSequence,
}

impl DetailPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the detail of `selection`; an empty selection hides the panel
    /// and disowns any lookup in flight.
    pub fn begin(&mut self, selection: Vec<AccountId>) -> Option<(RequestToken, DetailRequest)> {
        self.selection = selection;
        if self.selection.is_empty() {
            self.seq.invalidate();
            self.details.clear();
            self.message = None;
            self.visible = false;
            self.loading = false;
            self.submit_enabled = false;
            return None;
        }

        self.visible = true;
        self.loading = true;
        self.submit_enabled = true;
        Some((self.seq.issue(), DetailRequest::new(self.selection.clone())))
    }

    /// Fetch the current selection again, after a status change
    pub fn refresh(&mut self) -> Option<(RequestToken, DetailRequest)> {
        let selection = self.selection.clone();
        self.begin(selection)
    }

    pub fn apply(&mut self, token: RequestToken, response: DetailResponse) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.loading = false;
        match response.det {
            Payload::Items(details) => {
                self.details = details;
                self.message = None;
            }
            Payload::Message(message) => {
                self.details.clear();
                self.message = Some(message);
                self.visible = false;
                self.submit_enabled = false;
            }
        }
        true
    }

    pub fn fail(&mut self, token: RequestToken) {
        if self.seq.is_current(token) {
            self.loading = false;
        }
    }
}

/// Label and style of the status button of a detail row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusAction {
    pub label: &'static str,
    /// Button variant
    pub variant: &'static str,
}

impl StatusAction {
    pub fn for_detail(detail: &AccountDetail) -> Self {
        if detail.status {
            Self {
                label: "Suspender",
                variant: "danger",
            }
        } else {
            Self {
                label: "Reactivar",
                variant: "primary",
            }
        }
    }
}

/// What the panel does once a status toggle answered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Show the message and fetch the detail again
    Changed(String),
    /// Backend refused; alert `Error: <message>`
    Refused(String),
    /// Request failed; alert a generic message
    Failed,
}

impl From<Result<ToggleStatusResponse, String>> for ToggleOutcome {
    fn from(result: Result<ToggleStatusResponse, String>) -> Self {
        match result {
            Ok(response) if response.success => ToggleOutcome::Changed(response.message),
            Ok(response) => ToggleOutcome::Refused(response.message),
            Err(_) => ToggleOutcome::Failed,
        }
    }
}

impl ToggleOutcome {
    pub fn refreshes(&self) -> bool {
        matches!(self, ToggleOutcome::Changed(_))
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            ToggleOutcome::Changed(message) => Some(message),
            _ => None,
        }
    }

    pub fn alert(&self) -> Option<String> {
        match self {
            ToggleOutcome::Changed(_) => None,
            ToggleOutcome::Refused(message) => Some(format!("Error: {}", message)),
            ToggleOutcome::Failed => Some(TOGGLE_FAILED.to_string()),
        }
    }
}

pub fn confirm_prompt(email: &str) -> String {
    format!("¿Deseas cambiar el estado de la cuenta {}?", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_response(json: serde_json::Value) -> DetailResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn empty_selection_hides_panel_without_request() {
        let mut state = DetailPanelState::new();
        assert!(state.begin(vec![]).is_none());
        assert!(!state.visible);
    }

    #[test]
    fn detail_rows_replace_previous_ones() {
        let mut state = DetailPanelState::new();
        let (token, request) = state.begin(vec![AccountId(1), AccountId(2)]).unwrap();
        assert_eq!(request.ids, vec![AccountId(1), AccountId(2)]);

        assert!(state.apply(
            token,
            detail_response(serde_json::json!({"det": [
                {"id": 1, "email": "a@x.com", "customer": null, "status": true}
            ]}))
        ));

        assert!(state.visible);
        assert_eq!(state.details.len(), 1);
        assert_eq!(state.details[0].customer_label(), "Disponible");
    }

    #[test]
    fn message_hides_panel() {
        let mut state = DetailPanelState::new();
        let (token, _) = state.begin(vec![AccountId(1)]).unwrap();
        state.apply(token, detail_response(serde_json::json!({"det": "Sin datos"})));

        assert!(!state.visible);
        assert_eq!(state.message.as_deref(), Some("Sin datos"));
    }

    #[test]
    fn refresh_reuses_selection_and_drops_older_answer() {
        let mut state = DetailPanelState::new();
        let (first, _) = state.begin(vec![AccountId(7)]).unwrap();
        let (second, request) = state.refresh().unwrap();
        assert_eq!(request.ids, vec![AccountId(7)]);

        assert!(!state.apply(first, detail_response(serde_json::json!({"det": []}))));
        assert!(state.apply(
            second,
            detail_response(serde_json::json!({"det": [{"id": 7, "email": "b@x.com", "status": false}]}))
        ));
        assert_eq!(state.details[0].id, AccountId(7));
    }

    #[test]
    fn unchecking_everything_disowns_lookup_in_flight() {
        let mut state = DetailPanelState::new();
        let (token, _) = state.begin(vec![AccountId(1)]).unwrap();
        state.begin(vec![]);

        assert!(!state.apply(token, detail_response(serde_json::json!({"det": []}))));
        assert!(!state.visible);
    }

    #[test]
    fn lookup_enables_submit_until_a_message_comes_back() {
        let mut state = DetailPanelState::new();
        assert!(!state.submit_enabled);

        let (token, _) = state.begin(vec![AccountId(1)]).unwrap();
        assert!(state.submit_enabled);
        state.apply(token, detail_response(serde_json::json!({"det": [{"id": 1, "email": "a@x.com"}]})));
        assert!(state.submit_enabled);

        let (token, _) = state.refresh().unwrap();
        state.apply(token, detail_response(serde_json::json!({"det": "No hay cuentas disponibles"})));
        assert!(!state.submit_enabled);
    }

    #[test]
    fn empty_selection_disables_submit() {
        let mut state = DetailPanelState::new();
        state.begin(vec![AccountId(4)]);
        state.begin(vec![]);
        assert!(!state.submit_enabled);
    }

    #[test]
    fn status_button_depends_on_status() {
        let mut detail: AccountDetail =
            serde_json::from_value(serde_json::json!({"id": 1, "email": "a@x.com", "status": true}))
                .unwrap();
        assert_eq!(StatusAction::for_detail(&detail).label, "Suspender");

        detail.status = false;
        let action = StatusAction::for_detail(&detail);
        assert_eq!(action.label, "Reactivar");
        assert_eq!(action.variant, "primary");
    }

    #[test]
    fn successful_toggle_refetches_the_same_selection() {
        let outcome = ToggleOutcome::from(Ok(ToggleStatusResponse {
            success: true,
            message: "Cuenta suspendida".to_string(),
        }));
        assert!(outcome.refreshes());
        assert_eq!(outcome.notice(), Some("Cuenta suspendida"));
        assert_eq!(outcome.alert(), None);

        let mut state = DetailPanelState::new();
        state.begin(vec![AccountId(2), AccountId(6)]);
        let (_, request) = state.refresh().unwrap();
        assert_eq!(request.ids, vec![AccountId(2), AccountId(6)]);
    }

    #[test]
    fn refused_toggle_alerts_backend_message() {
        let outcome = ToggleOutcome::from(Ok(ToggleStatusResponse {
            success: false,
            message: "Cuenta no encontrada".to_string(),
        }));
        assert!(!outcome.refreshes());
        assert_eq!(outcome.alert().as_deref(), Some("Error: Cuenta no encontrada"));
    }

    #[test]
    fn failed_toggle_alerts_generic_message() {
        let outcome = ToggleOutcome::from(Err("POST failed: 500".to_string()));
        assert!(!outcome.refreshes());
        assert_eq!(outcome.notice(), None);
        assert_eq!(
            outcome.alert().as_deref(),
            Some("Hubo un error al cambiar el estado de la cuenta")
        );
    }
}
