//! One-time read of what the server-rendered page provides: the CSRF
//! token, the service and duration choices, and the allow-lists for the
//! bank-account and payment-method fields.

use super::config::SalesConfig;
use contracts::domain::a002_service::ServiceOption;
use contracts::shared::allow_list::AllowList;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlOptionElement};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageBootstrap {
    pub csrf_token: Option<String>,
    pub services: Vec<ServiceOption>,
    pub durations: Vec<ServiceOption>,
    pub banks: AllowList,
    pub payment_methods: AllowList,
}

impl PageBootstrap {
    /// Missing elements yield empty lists; the screen still renders.
    pub fn read(config: &SalesConfig) -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document available, starting with an empty page bootstrap");
            return Self::default();
        };

        let csrf_token = read_csrf_token(&document, &config.csrf_field);
        if csrf_token.is_none() {
            log::warn!(
                "hidden input `{}` not found, requests will be sent without a CSRF token",
                config.csrf_field
            );
        }

        let services = read_options(&document, &config.service_list_id);
        let durations = read_options(&document, &config.duration_list_id);
        let banks = AllowList::from_values(
            read_options(&document, &config.bank_list_id)
                .into_iter()
                .map(|o| o.value),
        );
        let payment_methods = AllowList::from_values(
            read_options(&document, &config.payment_list_id)
                .into_iter()
                .map(|o| o.value),
        );

        log::debug!(
            "page bootstrap: {} services, {} durations, {} banks, {} payment methods",
            services.len(),
            durations.len(),
            banks.len(),
            payment_methods.len()
        );

        Self {
            csrf_token,
            services,
            durations,
            banks,
            payment_methods,
        }
    }
}

fn read_csrf_token(document: &Document, field: &str) -> Option<String> {
    document
        .query_selector(&format!("input[name=\"{}\"]", field))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|value| !value.is_empty())
}

fn read_options(document: &Document, list_id: &str) -> Vec<ServiceOption> {
    let Ok(nodes) = document.query_selector_all(&format!("#{} option", list_id)) else {
        log::warn!("invalid option list id {:?}", list_id);
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| ServiceOption::new(option.value(), option.label()))
        .collect()
}
