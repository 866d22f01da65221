use super::fixtures::{AccountRecord, Fixtures};
use contracts::domain::a001_account::{Account, AccountDetail, AccountId};
use contracts::domain::a003_ticket::TicketUse;
use contracts::usecases::common::Payload;
use contracts::usecases::u001_sales_search::{
    SearchRequest, SearchResponse, NO_ACCOUNTS_AVAILABLE, NO_SERVICES_SELECTED,
};
use contracts::usecases::u002_account_detail::{DetailRequest, DetailResponse};
use contracts::usecases::u003_ticket_check::{TicketCheckRequest, TicketCheckResponse};
use contracts::usecases::u004_toggle_status::{ToggleStatusRequest, ToggleStatusResponse};

pub const ACCOUNT_ACTIVATED: &str = "Cuenta activada";
pub const ACCOUNT_SUSPENDED: &str = "Cuenta suspendida";
pub const ACCOUNT_NOT_FOUND: &str = "Cuenta no encontrada";

/// Available accounts of the selected services, newest expiration first
pub fn search(fixtures: &Fixtures, request: &SearchRequest) -> SearchResponse {
    let services = &request.criteria.services;
    if services.is_empty() {
        return SearchResponse::message(NO_SERVICES_SELECTED);
    }

    let mut available: Vec<&AccountRecord> = fixtures
        .accounts
        .iter()
        .filter(|a| a.customer.is_none() && a.status)
        .filter(|a| services.iter().any(|s| s.as_str() == a.service))
        .collect();
    if available.is_empty() {
        return SearchResponse::message(NO_ACCOUNTS_AVAILABLE);
    }
    available.sort_by(|a, b| {
        b.expiration_date
            .cmp(&a.expiration_date)
            .then(a.id.cmp(&b.id))
    });

    let total = available.len() as u64;
    let page_size = request.page_size.max(1) as usize;
    let last_page = available.len().div_ceil(page_size).max(1) as u32;
    let page = request.page.clamp(1, last_page);
    let start = (page as usize - 1) * page_size;

    let data = available
        .into_iter()
        .skip(start)
        .take(page_size)
        .map(|record| to_account(fixtures, record))
        .collect();

    SearchResponse {
        data: Payload::Items(data),
        total: Some(total),
        page: Some(page),
        page_size: Some(request.page_size),
    }
}

/// Every profile sharing credentials with a requested account
pub fn detail(fixtures: &Fixtures, request: &DetailRequest) -> DetailResponse {
    if request.ids.is_empty() {
        return DetailResponse {
            det: Payload::Message(NO_SERVICES_SELECTED.to_string()),
        };
    }

    let mut details: Vec<AccountDetail> = Vec::new();
    for id in &request.ids {
        let Some(selected) = fixtures.account(id.value()) else {
            tracing::warn!("detail requested for unknown account {}", id);
            continue;
        };

        let siblings = fixtures.accounts.iter().filter(|a| {
            a.service == selected.service
                && a.email == selected.email
                && a.password == selected.password
        });
        for record in siblings {
            if details.iter().any(|d| d.id.value() == record.id) {
                continue;
            }
            details.push(to_detail(fixtures, record));
        }
    }

    if details.is_empty() {
        return DetailResponse {
            det: Payload::Message(NO_ACCOUNTS_AVAILABLE.to_string()),
        };
    }
    DetailResponse {
        det: Payload::Items(details),
    }
}

/// Prior sales paid with the ticket; `data: null` when there are none
pub fn check_ticket(fixtures: &Fixtures, request: &TicketCheckRequest) -> TicketCheckResponse {
    let uses: Vec<TicketUse> = fixtures
        .sales
        .iter()
        .filter(|s| s.invoice == request.ticket)
        .map(|sale| TicketUse {
            ticket: sale.invoice.clone(),
            email: fixtures
                .account(sale.account)
                .map(|a| a.email.clone())
                .unwrap_or_default(),
            customer: Some(sale.customer.clone()),
            date: sale.created_at.to_string(),
        })
        .collect();

    if uses.is_empty() {
        TicketCheckResponse::unused()
    } else {
        TicketCheckResponse::used(uses)
    }
}

pub fn toggle_status(fixtures: &mut Fixtures, request: &ToggleStatusRequest) -> ToggleStatusResponse {
    let Some(account) = fixtures
        .accounts
        .iter_mut()
        .find(|a| a.id == request.account_id.value())
    else {
        return ToggleStatusResponse {
            success: false,
            message: ACCOUNT_NOT_FOUND.to_string(),
        };
    };

    account.status = !account.status;
    let message = if account.status {
        ACCOUNT_ACTIVATED
    } else {
        ACCOUNT_SUSPENDED
    };
    tracing::info!("account {} status set to {}", account.id, account.status);

    ToggleStatusResponse {
        success: true,
        message: message.to_string(),
    }
}

fn to_account(fixtures: &Fixtures, record: &AccountRecord) -> Account {
    let service = fixtures.service(&record.service);
    Account {
        id: AccountId::new(record.id),
        email: record.email.clone(),
        password: record.password.clone(),
        logo: service.map(|s| s.logo.clone()).unwrap_or_default(),
        acc_name: service.map(|s| s.description.clone()),
        expiration_acc: Some(record.expiration_date.to_string()),
        profile: Some(record.profile.to_string()),
        status: record.status,
        customer: record.customer.clone(),
        customer_end_date: None,
    }
}

fn to_detail(fixtures: &Fixtures, record: &AccountRecord) -> AccountDetail {
    // End date of the sale that gave the profile to its current holder
    let customer_end_date = record.customer.as_ref().and_then(|customer| {
        fixtures
            .sales
            .iter()
            .filter(|s| s.account == record.id && &s.customer == customer)
            .map(|s| s.expiration_date)
            .max()
            .map(|date| date.to_string())
    });

    AccountDetail {
        id: AccountId::new(record.id),
        logo: fixtures
            .service(&record.service)
            .map(|s| s.logo.clone())
            .unwrap_or_default(),
        email: record.email.clone(),
        profile: Some(record.profile.to_string()),
        customer: record.customer.clone(),
        customer_end_date,
        status: record.status,
    }
}
