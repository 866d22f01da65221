use crate::shared::api_utils::{post_form, ApiContext};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u003_ticket_check::{
    TicketCheck, TicketCheckRequest, TicketCheckResponse,
};

/// Ask whether the ticket already paid for an earlier sale
pub async fn check_ticket(
    ctx: &ApiContext,
    request: &TicketCheckRequest,
) -> Result<TicketCheckResponse, String> {
    post_form(ctx, TicketCheck::endpoint(), request.to_form()).await
}
