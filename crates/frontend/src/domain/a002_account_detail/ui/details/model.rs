use crate::shared::api_utils::{post_form, post_json, ApiContext};
use contracts::domain::a001_account::AccountId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u002_account_detail::{
    AccountDetailLookup, DetailRequest, DetailResponse,
};
use contracts::usecases::u004_toggle_status::{
    ToggleAccountStatus, ToggleStatusRequest, ToggleStatusResponse,
};

/// Fetch the detail rows of the selected accounts
pub async fn fetch_details(
    ctx: &ApiContext,
    request: &DetailRequest,
) -> Result<DetailResponse, String> {
    post_form(ctx, AccountDetailLookup::endpoint(), request.to_form()).await
}

/// Flip the active/suspended status of one account
pub async fn toggle_status(
    ctx: &ApiContext,
    account_id: AccountId,
) -> Result<ToggleStatusResponse, String> {
    let request = ToggleStatusRequest::new(account_id);
    post_json(ctx, ToggleAccountStatus::endpoint(), &request).await
}
