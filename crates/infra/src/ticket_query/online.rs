use tracing::instrument;

use ticketing_catalog::{AvailabilityRequest, OnlineEligibility, TicketView};
use ticketing_core::{TicketError, TicketResult};

use super::{TicketQueryService, lookup};
use crate::context::RequestContext;
use crate::store::{QueryKind, TicketStore};

impl<S: TicketStore> TicketQueryService<S> {
    /// The online ticket of a country+event, once offline sale is over.
    ///
    /// Refused with `Conflict` while the country still has offline stock. A
    /// country with no offline ticket types at all goes straight to the online
    /// lookup.
    #[instrument(
        skip(self, ctx, request),
        fields(
            request_id = %ctx.request_id(),
            country_code = %request.country_code,
            event_id = %request.event_id,
        )
    )]
    pub async fn decide_online(
        &self,
        ctx: &RequestContext,
        request: &AvailabilityRequest,
    ) -> TicketResult<TicketView> {
        let offline = lookup(
            ctx,
            QueryKind::OfflineByCountryEvent.as_str(),
            "offline ticket not found",
            self.store
                .find_offline_tickets_by_country_event(&request.country_code, &request.event_id),
        )
        .await?;

        let assessment = self.policy.assess(&offline);
        if assessment.online_eligibility() == OnlineEligibility::OfflineAvailable {
            tracing::info!(
                total = assessment.total(),
                sold_out = assessment.sold_out(),
                "online sale refused"
            );
            return Err(TicketError::conflict("Offline ticket still available"));
        }

        let online = lookup(
            ctx,
            QueryKind::OnlineByCountryEvent.as_str(),
            "ticket not found",
            self.store
                .find_online_ticket_by_country_event(&request.country_code, &request.event_id),
        )
        .await?;

        Ok(TicketView::from_record(&online))
    }
}
