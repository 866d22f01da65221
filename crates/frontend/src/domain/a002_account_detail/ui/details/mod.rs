pub mod model;
pub mod state;
pub mod view_model;

use self::state::StatusAction;
use self::view_model::AccountDetailViewModel;
use crate::shared::api_utils::ApiContext;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::config::SalesConfig;
use crate::shared::date_utils::format_display_date;
use crate::shared::notice::NoticeService;
use contracts::domain::a001_account::AccountId;
use leptos::prelude::*;
use thaw::Spinner;

fn set_host_submit_enabled(id: &str, enabled: bool) {
    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    if let Err(e) = button.toggle_attribute_with_force("disabled", !enabled) {
        log::error!("could not update #{}: {:?}", id, e);
    }
}

/// Detail rows of the checked accounts, with the status toggle.
///
/// Reloads whenever `selection` changes.
#[component]
pub fn AccountDetailPanel(#[prop(into)] selection: Signal<Vec<AccountId>>) -> impl IntoView {
    let api = use_context::<ApiContext>().expect("ApiContext not provided in context");
    let notice = use_context::<NoticeService>().expect("NoticeService not provided in context");
    let config = StoredValue::new(
        use_context::<SalesConfig>().expect("SalesConfig not provided in context"),
    );

    let vm = AccountDetailViewModel::new(api, notice);
    let state = vm.state;

    Effect::new(move |_| {
        let ids = selection.get();
        vm.load(ids);
    });

    // The sale form's submit button lives in the host page
    Effect::new(move |_| {
        let enabled = state.with(|s| s.submit_enabled);
        let submit_id = config.with_value(|c| c.submit_id.clone());
        set_host_submit_enabled(&submit_id, enabled);
    });

    view! {
        {move || state.with(|s| s.message.clone()).map(|message| view! {
            <p class="account-detail__message"><b>{message}</b></p>
        })}

        <Show when=move || state.with(|s| s.visible)>
            <div class="account-detail" id="main-accdetail">
                <table class="table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"E-Mail"</th>
                            <th>"Cliente"</th>
                            <th>"Vence"</th>
                            <th>"Perfil"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody id="accdetail">
                        <For
                            each=move || state.with(|s| s.details.clone())
                            key=|d| (d.id, d.status)
                            children=move |detail| {
                                let action = StatusAction::for_detail(&detail);
                                let id = detail.id;
                                let email = detail.email.clone();
                                let active = detail.status;
                                let end_date = detail
                                    .customer_end_date
                                    .as_deref()
                                    .map(format_display_date)
                                    .unwrap_or_else(|| detail.end_date_label().to_string());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <img src=config.with_value(|c| c.logo_url(&detail.logo)) width="20" alt="" />
                                        </td>
                                        <td class="table__cell">{detail.email.clone()}</td>
                                        <td class="table__cell">{detail.customer_label().to_string()}</td>
                                        <td class="table__cell">{end_date}</td>
                                        <td class="table__cell">{detail.profile.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">
                                            <StatusBadge active=active />
                                        </td>
                                        <td class="table__cell">
                                            <Button
                                                variant=action.variant
                                                size="sm"
                                                on_click=Callback::new(move |_| vm.toggle_status_command(id, email.clone()))
                                            >
                                                {action.label}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.loading)>
                    <Spinner />
                </Show>
            </div>
        </Show>
    }
}
