use crate::shared::api_utils::{post_form, ApiContext};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_sales_search::{SalesSearch, SearchRequest, SearchResponse};

/// Fetch one page of available accounts
pub async fn search_accounts(
    ctx: &ApiContext,
    request: &SearchRequest,
) -> Result<SearchResponse, String> {
    log::debug!(
        "searching {} service(s), page {} (size {})",
        request.criteria.services.len(),
        request.page,
        request.page_size
    );
    post_form(ctx, SalesSearch::endpoint(), request.to_form()).await
}
