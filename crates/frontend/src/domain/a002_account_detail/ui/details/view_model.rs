use super::model;
use super::state::{confirm_prompt, DetailPanelState, ToggleOutcome};
use crate::shared::api_utils::ApiContext;
use crate::shared::notice::NoticeService;
use contracts::domain::a001_account::AccountId;
use contracts::shared::request_sequence::RequestToken;
use contracts::usecases::u002_account_detail::DetailRequest;
use leptos::prelude::*;

/// ViewModel for the account detail panel
#[derive(Clone, Copy)]
pub struct AccountDetailViewModel {
    pub state: RwSignal<DetailPanelState>,
    api: StoredValue<ApiContext>,
    notice: NoticeService,
}

impl AccountDetailViewModel {
    pub fn new(api: ApiContext, notice: NoticeService) -> Self {
        Self {
            state: RwSignal::new(DetailPanelState::new()),
            api: StoredValue::new(api),
            notice,
        }
    }

    /// Load the detail rows of `selection`
    pub fn load(&self, selection: Vec<AccountId>) {
        let request = self.state.try_update(|s| s.begin(selection)).flatten();
        self.run(request);
    }

    /// Load the current selection again
    pub fn refresh(&self) {
        let request = self.state.try_update(|s| s.refresh()).flatten();
        self.run(request);
    }

    fn run(&self, request: Option<(RequestToken, DetailRequest)>) {
        let Some((token, request)) = request else {
            return;
        };
        let state = self.state;
        let ctx = self.api.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_details(&ctx, &request).await {
                Ok(response) => {
                    let applied = state.try_update(|s| s.apply(token, response)).unwrap_or(false);
                    if !applied {
                        log::debug!("discarding stale detail response");
                    }
                }
                Err(e) => {
                    log::error!("account detail lookup failed: {}", e);
                    state.update(|s| s.fail(token));
                }
            }
        });
    }

    /// Ask for confirmation, toggle the status, then reload the panel.
    ///
    /// The row is never updated before the backend confirms.
    pub fn toggle_status_command(&self, account_id: AccountId, email: String) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.confirm_with_message(&confirm_prompt(&email)) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                log::error!("confirm dialog failed: {:?}", e);
                return;
            }
        }

        let vm = *self;
        let ctx = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::toggle_status(&ctx, account_id).await;
            match &result {
                Ok(response) if response.success => {
                    log::info!("account {} status changed", account_id)
                }
                Ok(response) => {
                    log::warn!("toggle of account {} refused: {}", account_id, response.message)
                }
                Err(e) => log::error!("toggle of account {} failed: {}", account_id, e),
            }

            let outcome = ToggleOutcome::from(result);
            if let Some(message) = outcome.notice() {
                vm.notice.show(message.to_string());
            }
            if let Some(message) = outcome.alert() {
                alert(&message);
            }
            if outcome.refreshes() {
                vm.refresh();
            }
        });
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}
