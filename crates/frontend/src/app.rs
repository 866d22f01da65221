use crate::domain::a001_sales_search::ui::SalesSearchPage;
use crate::domain::a002_account_detail::ui::AccountDetailPanel;
use crate::domain::a003_ticket_check::ui::TicketCheckField;
use crate::domain::a004_sale_form_fields::rules::{BANK_ACCOUNT_RULE, PAYMENT_METHOD_RULE};
use crate::domain::a004_sale_form_fields::ui::AllowListField;
use crate::shared::api_utils::ApiContext;
use crate::shared::config::SalesConfig;
use crate::shared::notice::{NoticeHost, NoticeService};
use crate::shared::page_bootstrap::PageBootstrap;
use contracts::domain::a001_account::AccountId;
use leptos::prelude::*;

#[component]
pub fn App(config: SalesConfig) -> impl IntoView {
    let bootstrap = PageBootstrap::read(&config);

    provide_context(ApiContext::new(
        config.api_base.clone(),
        config.csrf_field.clone(),
        bootstrap.csrf_token.clone(),
    ));
    provide_context(NoticeService::new());
    provide_context(config.clone());

    // Checked rows of the result table, feeding the detail panel
    let selection = RwSignal::new(Vec::<AccountId>::new());
    let on_selection_change = Callback::new(move |ids: Vec<AccountId>| {
        if selection.with_untracked(|current| current != &ids) {
            selection.set(ids);
        }
    });

    view! {
        <div class="sales-app">
            <SalesSearchPage
                services=bootstrap.services
                durations=bootstrap.durations
                on_selection_change=on_selection_change
            />
            <AccountDetailPanel selection=selection />
            <div class="sales-app__fields">
                <TicketCheckField />
                <AllowListField
                    label="Número de cuenta"
                    name="bank"
                    list_id=config.bank_list_id.clone()
                    allowed=bootstrap.banks
                    rule=BANK_ACCOUNT_RULE
                />
                <AllowListField
                    label="Método de pago"
                    name="method"
                    list_id=config.payment_list_id.clone()
                    allowed=bootstrap.payment_methods
                    rule=PAYMENT_METHOD_RULE
                />
            </div>
            <NoticeHost />
        </div>
    }
}
