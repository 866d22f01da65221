use axum::http::HeaderMap;
use axum::{Form, Json};
use contracts::shared::form_body::FormBody;
use contracts::usecases::u001_sales_search::{SearchRequest, SearchResponse};
use contracts::usecases::u002_account_detail::{DetailRequest, DetailResponse};
use contracts::usecases::u003_ticket_check::{TicketCheckRequest, TicketCheckResponse};
use contracts::usecases::u004_toggle_status::{ToggleStatusRequest, ToggleStatusResponse};

use crate::domain::a001_sales::service;
use crate::shared::data::store::get_store;
use crate::shared::error::ApiError;

/// The screen marks its calls with `X-Requested-With: XMLHttpRequest`
fn require_ajax(headers: &HeaderMap) -> Result<(), ApiError> {
    let is_ajax = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "XMLHttpRequest");
    if is_ajax {
        Ok(())
    } else {
        Err(ApiError::NotAjax)
    }
}

fn parse_form(headers: &HeaderMap, pairs: Vec<(String, String)>) -> Result<FormBody, ApiError> {
    require_ajax(headers)?;
    Ok(FormBody::from(pairs))
}

/// POST /adm/sales/search
pub async fn search(
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = SearchRequest::from_form(&parse_form(&headers, pairs)?)?;
    tracing::debug!(
        "search {:?} page {} size {}",
        request.criteria.services,
        request.page,
        request.page_size
    );
    let response = get_store()?.read(|fx| service::search(fx, &request))?;
    Ok(Json(response))
}

/// POST /adm/sales/search/detail
pub async fn detail(
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<DetailResponse>, ApiError> {
    let request = DetailRequest::from_form(&parse_form(&headers, pairs)?)?;
    let response = get_store()?.read(|fx| service::detail(fx, &request))?;
    Ok(Json(response))
}

/// POST /adm/sales/check/ticket
pub async fn check_ticket(
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<TicketCheckResponse>, ApiError> {
    let request = TicketCheckRequest::from_form(&parse_form(&headers, pairs)?)?;
    let response = get_store()?.read(|fx| service::check_ticket(fx, &request))?;
    Ok(Json(response))
}

/// POST /adm/account/toggle-status, the one JSON-bodied endpoint
pub async fn toggle_status(
    headers: HeaderMap,
    Json(request): Json<ToggleStatusRequest>,
) -> Result<Json<ToggleStatusResponse>, ApiError> {
    require_ajax(&headers)?;
    let response = get_store()?.write(|fx| service::toggle_status(fx, &request))?;
    Ok(Json(response))
}
