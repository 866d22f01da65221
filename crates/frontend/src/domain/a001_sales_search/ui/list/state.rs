use super::row::{build_rows, AccountRow};
use crate::shared::config::SalesConfig;
use crate::shared::list_utils::filter_list;
use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::a002_service::{Duration, ServiceId};
use contracts::shared::request_sequence::{RequestSequence, RequestToken};
use contracts::usecases::common::Payload;
use contracts::usecases::u001_sales_search::{
    end_date_enabled, SearchCriteria, SearchRequest, SearchResponse,
};
use leptos::prelude::*;
use std::collections::HashSet;

/// Page state of the sales search screen.
///
/// Owned by the screen controller; the render and filter helpers read it,
/// only the search handlers replace the cached page.
#[derive(Clone, Debug)]
pub struct SalesSearchState {
    pub selected_services: Vec<ServiceId>,
    pub duration: Duration,
    /// Cached rows of the loaded page
    pub accounts: Vec<Account>,
    /// Literal backend message shown instead of the table
    pub message: Option<String>,
    pub results_visible: bool,
    pub loading: bool,
    /// Email filter, applied to the loaded page only
    pub filter: String,
    pub selected_ids: HashSet<AccountId>,
    // Pagination fields
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    requested_page: u32,
    search_seq: RequestSequence,
}

impl SalesSearchState {
    pub fn new(page_size: u32) -> Self {
        Self {
            selected_services: Vec::new(),
            duration: Duration::unset(),
            accounts: Vec::new(),
            message: None,
            results_visible: false,
            loading: false,
            filter: String::new(),
            selected_ids: HashSet::new(),
            page: 1,
            page_size,
            total_count: 0,
            total_pages: 0,
            requested_page: 1,
            search_seq: RequestSequence::new(),
        }
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new(self.selected_services.clone(), self.duration.clone())
    }

    pub fn end_date_enabled(&self) -> bool {
        end_date_enabled(self.selected_services.len(), &self.duration)
    }

    pub fn set_service(&mut self, service: ServiceId, checked: bool) {
        let present = self.selected_services.contains(&service);
        if checked && !present {
            self.selected_services.push(service);
        } else if !checked && present {
            self.selected_services.retain(|s| s != &service);
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Redeem page criteria: exactly the preset service and duration
    pub fn apply_preset(&mut self, service: ServiceId, duration: Duration) {
        self.selected_services = vec![service];
        self.duration = duration;
    }

    /// Start fetching `page` for the current criteria.
    ///
    /// With incomplete criteria the results area is hidden, the cache is
    /// dropped and any in-flight search is disowned.
    pub fn begin_search(&mut self, page: u32) -> Option<(RequestToken, SearchRequest)> {
        let criteria = self.criteria();
        if !criteria.is_searchable() {
            self.search_seq.invalidate();
            self.clear_results();
            self.message = None;
            self.loading = false;
            return None;
        }

        let request = SearchRequest::new(criteria, page, self.page_size);
        self.requested_page = request.page;
        self.loading = true;
        Some((self.search_seq.issue(), request))
    }

    /// Apply a search answer; returns false for a stale token.
    pub fn apply_search(&mut self, token: RequestToken, response: SearchResponse) -> bool {
        if !self.search_seq.is_current(token) {
            return false;
        }
        self.loading = false;
        self.selected_ids.clear();

        let total_pages = response.total_pages();
        match response.data {
            Payload::Items(accounts) => {
                self.total_count = response.total.unwrap_or(accounts.len() as u64);
                self.page = response.page.unwrap_or(self.requested_page);
                if let Some(size) = response.page_size {
                    self.page_size = size;
                }
                self.total_pages = total_pages;
                self.accounts = accounts;
                self.message = None;
                self.results_visible = true;
            }
            Payload::Message(message) => {
                self.clear_results();
                self.message = Some(message);
            }
        }
        true
    }

    /// A failed search leaves the previous page on screen
    pub fn fail_search(&mut self, token: RequestToken) {
        if self.search_seq.is_current(token) {
            self.loading = false;
        }
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        // Rows hidden by the filter lose their check, as they leave the table
        let visible: HashSet<AccountId> =
            self.visible_accounts().iter().map(|a| a.id).collect();
        self.selected_ids.retain(|id| visible.contains(id));
    }

    pub fn visible_accounts(&self) -> Vec<&Account> {
        filter_list(&self.accounts, &self.filter)
    }

    pub fn rows(&self, config: &SalesConfig) -> Vec<AccountRow> {
        build_rows(&self.visible_accounts(), config)
    }

    /// Check or uncheck a rendered row; ids not on screen are ignored
    pub fn set_selected(&mut self, id: AccountId, checked: bool) {
        if !checked {
            self.selected_ids.remove(&id);
        } else if self.visible_accounts().iter().any(|a| a.id == id) {
            self.selected_ids.insert(id);
        }
    }

    pub fn is_selected(&self, id: AccountId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Checked ids among the rendered rows, in table order
    pub fn selection(&self) -> Vec<AccountId> {
        self.visible_accounts()
            .into_iter()
            .map(|a| a.id)
            .filter(|id| self.selected_ids.contains(id))
            .collect()
    }

    /// True when the filter cannot see the whole result set
    pub fn filter_is_page_local(&self) -> bool {
        self.total_pages > 1
    }

    pub fn summary(&self) -> String {
        format!("Se encontraron {} cuentas disponibles", self.total_count)
    }

    fn clear_results(&mut self) {
        self.accounts.clear();
        self.selected_ids.clear();
        self.results_visible = false;
        self.total_count = 0;
        self.total_pages = 0;
        self.page = 1;
    }
}

// Create state within component scope so it is disposed with the screen
pub fn create_state(page_size: u32) -> RwSignal<SalesSearchState> {
    RwSignal::new(SalesSearchState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> SearchResponse {
        serde_json::from_value(json).unwrap()
    }

    fn searchable_state() -> SalesSearchState {
        let mut state = SalesSearchState::new(25);
        state.set_service(ServiceId::new("svc1"), true);
        state.set_duration(Duration::new("12"));
        state
    }

    #[test]
    fn end_date_follows_services_and_duration() {
        let mut state = SalesSearchState::new(25);
        state.set_duration(Duration::new("12"));
        assert!(!state.end_date_enabled());

        state.set_service(ServiceId::new("svc1"), true);
        state.set_duration(Duration::unset());
        assert!(!state.end_date_enabled());

        state.set_duration(Duration::new("12"));
        assert!(state.end_date_enabled());
    }

    #[test]
    fn incomplete_criteria_hide_results_without_request() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(token, response(serde_json::json!({"data": [{"id": 1, "email": "a@x.com"}]})));
        assert!(state.results_visible);

        state.set_service(ServiceId::new("svc1"), false);
        assert!(state.begin_search(1).is_none());
        assert!(!state.results_visible);
        assert!(state.accounts.is_empty());
    }

    #[test]
    fn single_account_renders_one_row() {
        let mut state = searchable_state();
        let (token, request) = state.begin_search(1).unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 25);

        assert!(state.apply_search(
            token,
            response(serde_json::json!({"data": [{"id": 1, "email": "a@x.com"}]}))
        ));

        let rows = state.rows(&SalesConfig::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].checkbox_value, "1");
        assert!(state.results_visible);
        assert_eq!(state.summary(), "Se encontraron 1 cuentas disponibles");
    }

    #[test]
    fn rendering_twice_yields_same_rows() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(
            token,
            response(serde_json::json!({"data": [
                {"id": 1, "email": "a@x.com"},
                {"id": 2, "email": "b@x.com"}
            ]})),
        );

        let config = SalesConfig::default();
        assert_eq!(state.rows(&config), state.rows(&config));
    }

    #[test]
    fn message_payload_hides_panel() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(token, response(serde_json::json!({"data": "No accounts"})));

        assert_eq!(state.message.as_deref(), Some("No accounts"));
        assert!(!state.results_visible);
        assert!(state.accounts.is_empty());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = searchable_state();
        let (old, _) = state.begin_search(1).unwrap();
        state.set_duration(Duration::new("6"));
        let (new, _) = state.begin_search(1).unwrap();

        assert!(state.apply_search(new, response(serde_json::json!({"data": [{"id": 2, "email": "new@x.com"}]}))));
        assert!(!state.apply_search(old, response(serde_json::json!({"data": [{"id": 1, "email": "old@x.com"}]}))));

        assert_eq!(state.accounts.len(), 1);
        assert_eq!(state.accounts[0].id, AccountId(2));
    }

    #[test]
    fn failure_keeps_previous_page() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(token, response(serde_json::json!({"data": [{"id": 1, "email": "a@x.com"}]})));

        let (token, _) = state.begin_search(2).unwrap();
        state.fail_search(token);

        assert!(!state.loading);
        assert_eq!(state.accounts.len(), 1);
    }

    #[test]
    fn paging_metadata_is_taken_from_the_response() {
        let mut state = searchable_state();
        let (token, request) = state.begin_search(2).unwrap();
        assert_eq!(request.page, 2);

        state.apply_search(
            token,
            response(serde_json::json!({
                "data": [{"id": 26, "email": "z@x.com"}],
                "total": 60, "page": 2, "page_size": 25
            })),
        );

        assert_eq!(state.page, 2);
        assert_eq!(state.total_pages, 3);
        assert!(state.filter_is_page_local());
    }

    #[test]
    fn selection_is_subset_of_rendered_rows() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(
            token,
            response(serde_json::json!({"data": [
                {"id": 1, "email": "admin@x.com"},
                {"id": 2, "email": "user@x.com"}
            ]})),
        );

        state.set_selected(AccountId(1), true);
        state.set_selected(AccountId(2), true);
        state.set_selected(AccountId(99), true);
        assert_eq!(state.selection(), vec![AccountId(1), AccountId(2)]);

        state.set_filter("ADM".to_string());
        assert_eq!(state.selection(), vec![AccountId(1)]);

        state.set_filter(String::new());
        assert_eq!(state.selection(), vec![AccountId(1)]);

        // A new page clears every check
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(token, response(serde_json::json!({"data": [{"id": 1, "email": "admin@x.com"}]})));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn filter_matches_regardless_of_case() {
        let mut state = searchable_state();
        let (token, _) = state.begin_search(1).unwrap();
        state.apply_search(
            token,
            response(serde_json::json!({"data": [
                {"id": 1, "email": "Admin@x.com"},
                {"id": 2, "email": "user@x.com"}
            ]})),
        );

        state.set_filter("ADM".to_string());
        let upper: Vec<_> = state.visible_accounts().iter().map(|a| a.id).collect();
        state.set_filter("adm".to_string());
        let lower: Vec<_> = state.visible_accounts().iter().map(|a| a.id).collect();

        assert_eq!(upper, lower);
        assert_eq!(lower, vec![AccountId(1)]);
    }

    #[test]
    fn redeem_preset_is_searchable_right_away() {
        let mut state = SalesSearchState::new(25);
        state.set_service(ServiceId::new("9"), true);
        state.apply_preset(ServiceId::new("2"), Duration::new("1"));

        let (_, request) = state.begin_search(1).unwrap();
        assert_eq!(request.criteria.services, vec![ServiceId::new("2")]);
        assert_eq!(request.criteria.duration, Duration::new("1"));
        assert!(state.end_date_enabled());
    }
}
