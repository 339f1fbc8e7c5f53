use tracing::instrument;

use ticketing_catalog::{AvailabilityRequest, SwitchNotification, TicketListing, TicketView};
use ticketing_core::TicketResult;

use super::{TicketQueryService, lookup};
use crate::context::RequestContext;
use crate::store::{QueryKind, TicketStore};

impl<S: TicketStore> TicketQueryService<S> {
    /// List a country's offline tickets for an event.
    ///
    /// When the country is exhausted, the listing also carries discounted
    /// suggestions for the last ticket type's tag and a switch-to-online
    /// notification is dispatched for the requested country.
    #[instrument(
        skip(self, ctx, request),
        fields(
            request_id = %ctx.request_id(),
            country_code = %request.country_code,
            event_id = %request.event_id,
        )
    )]
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        request: &AvailabilityRequest,
    ) -> TicketResult<TicketListing> {
        let offline = lookup(
            ctx,
            QueryKind::OfflineByCountryEvent.as_str(),
            "ticket not found",
            self.store
                .find_offline_tickets_by_country_event(&request.country_code, &request.event_id),
        )
        .await?;

        let assessment = self.policy.assess(&offline);
        let mut listing = TicketListing {
            tickets: offline.iter().map(TicketView::from_record).collect(),
            suggestions: Vec::new(),
        };

        if let (true, Some(tag)) = (assessment.is_exhausted(), assessment.last_tag()) {
            tracing::info!(sold_out = assessment.sold_out(), %tag, "offline stock exhausted");
            listing.suggestions = self.suggest(ctx, tag).await?;
            self.notifier.notify(SwitchNotification::new(
                tag.clone(),
                request.country_code.clone(),
            ));
        }

        Ok(listing)
    }
}
