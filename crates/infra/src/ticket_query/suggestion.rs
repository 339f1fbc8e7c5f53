use tracing::instrument;

use ticketing_catalog::SuggestionView;
use ticketing_core::{Tag, TicketResult};

use super::{TicketQueryService, lookup};
use crate::context::RequestContext;
use crate::store::{QueryKind, TicketStore};

impl<S: TicketStore> TicketQueryService<S> {
    /// Discounted alternatives for a sold-out `tag`.
    ///
    /// Picks the country holding the cheapest available ticket of the tag and
    /// lists that country's offline tickets of the same tag, ascending by
    /// price. No available ticket anywhere yields an empty list.
    #[instrument(skip(self, ctx, tag), fields(request_id = %ctx.request_id(), tag = %tag))]
    pub async fn suggest(&self, ctx: &RequestContext, tag: &Tag) -> TicketResult<Vec<SuggestionView>> {
        let cheapest = lookup(
            ctx,
            QueryKind::CheapestAvailableByTag.as_str(),
            "ticket not found",
            self.store.find_cheapest_available_by_tag(tag),
        )
        .await?;

        let Some(winner) = cheapest.first() else {
            tracing::debug!("no available alternative");
            return Ok(Vec::new());
        };

        let alternatives = lookup(
            ctx,
            QueryKind::OfflineByCountryTag.as_str(),
            "ticket not found",
            self.store
                .find_offline_tickets_by_country_tag(&winner.country.code, tag),
        )
        .await?;

        Ok(alternatives
            .iter()
            .map(|record| SuggestionView::from_record(record, &self.policy))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::scripted::{ScriptedStore, service};
    use super::*;
    use crate::fixtures::{tag, ticket};
    use crate::store::StoreError;
    use ticketing_core::TicketError;

    #[tokio::test]
    async fn suggestions_come_from_the_cheapest_country() {
        let store = ScriptedStore::new()
            .many(
                QueryKind::CheapestAvailableByTag,
                Ok(Some(vec![ticket("SG", "e-9", 100, 4, "tag")])),
            )
            .many(
                QueryKind::OfflineByCountryTag,
                Ok(Some(vec![
                    ticket("SG", "e-9", 100, 4, "tag"),
                    ticket("SG", "e-9", 155, 0, "tag"),
                ])),
            );
        let (svc, store, _) = service(store);

        let out = svc.suggest(&RequestContext::new(), &tag("tag")).await.unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].normal_ticket_price, "$100");
        assert_eq!(out[0].discount_ticket_price, "$80");
        assert_eq!(out[1].discount_ticket_price, "$124");
        assert!(out.iter().all(|s| s.discount == "20%"));
        assert!(out[1].is_sold);

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1].filter().country_code.as_ref().map(|c| c.as_str()),
            Some("SG")
        );
        assert_eq!(calls[1].filter().tag, Some(tag("tag")));
    }

    #[tokio::test]
    async fn no_available_alternative_is_an_empty_list() {
        let store = ScriptedStore::new().many(QueryKind::CheapestAvailableByTag, Ok(Some(vec![])));
        let (svc, store, _) = service(store);

        let out = svc.suggest(&RequestContext::new(), &tag("tag")).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(store.kinds(), vec![QueryKind::CheapestAvailableByTag]);
    }

    #[tokio::test]
    async fn absent_top_one_result_is_not_found() {
        let store = ScriptedStore::new().many(QueryKind::CheapestAvailableByTag, Ok(None));
        let (svc, _, _) = service(store);

        let err = svc.suggest(&RequestContext::new(), &tag("tag")).await.unwrap_err();
        assert_eq!(err, TicketError::not_found("ticket not found"));
    }

    #[tokio::test]
    async fn malformed_alternatives_are_internal() {
        let store = ScriptedStore::new()
            .many(
                QueryKind::CheapestAvailableByTag,
                Ok(Some(vec![ticket("SG", "e-9", 100, 4, "tag")])),
            )
            .many(
                QueryKind::OfflineByCountryTag,
                Err(StoreError::decode("find_offline_tickets_by_country_tag", "bad shape")),
            );
        let (svc, _, _) = service(store);

        let err = svc.suggest(&RequestContext::new(), &tag("tag")).await.unwrap_err();
        assert_eq!(err, TicketError::internal("cannot parse ticket data"));
    }
}
