use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use ticketing_catalog::TicketRecord;
use ticketing_core::{CountryCode, EventId, Tag, TicketError};

use super::query::TicketQuery;

pub type StoreResult<T> = Result<T, StoreError>;

/// Ticket store operation error.
///
/// These are **infrastructure errors**; the query layer classifies them into
/// [`TicketError`] (decode failures are internal, everything else upstream).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed to execute the query.
    #[error("{operation}: query failed: {message}")]
    Query {
        operation: &'static str,
        message: String,
    },

    /// A matching document does not have the ticket record shape.
    #[error("{operation}: cannot decode ticket document: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// The request deadline passed before the query completed.
    #[error("{operation}: deadline exceeded")]
    Timeout { operation: &'static str },
}

impl StoreError {
    pub fn query(operation: &'static str, err: impl core::fmt::Display) -> Self {
        Self::Query {
            operation,
            message: err.to_string(),
        }
    }

    pub fn decode(operation: &'static str, err: impl core::fmt::Display) -> Self {
        Self::Decode {
            operation,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for TicketError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Decode { .. } => TicketError::internal("cannot parse ticket data"),
            other => TicketError::upstream(other.to_string()),
        }
    }
}

/// Read-only gateway over ticket documents.
///
/// Result contract for every lookup:
/// - `Ok(None)`: the store has nothing for this query (the caller's "not found")
/// - `Ok(Some(vec![]))`: the query ran and matched nothing (not an error)
/// - `Err(StoreError::Decode)`: a matching document has the wrong shape
/// - any other `Err`: upstream failure, passed through
///
/// Each call resolves exactly once; dropping the future cancels the query.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Run a multi-document lookup.
    async fn find_many(&self, query: &TicketQuery) -> StoreResult<Option<Vec<TicketRecord>>>;

    /// Run a single-document lookup.
    async fn find_one(&self, query: &TicketQuery) -> StoreResult<Option<TicketRecord>>;

    /// Offline ticket types of a country+event, ascending by price.
    async fn find_offline_tickets_by_country_event(
        &self,
        country_code: &CountryCode,
        event_id: &EventId,
    ) -> StoreResult<Option<Vec<TicketRecord>>> {
        self.find_many(&TicketQuery::offline_by_country_event(country_code, event_id))
            .await
    }

    /// Offline ticket types of a country sharing `tag`, ascending by price.
    async fn find_offline_tickets_by_country_tag(
        &self,
        country_code: &CountryCode,
        tag: &Tag,
    ) -> StoreResult<Option<Vec<TicketRecord>>> {
        self.find_many(&TicketQuery::offline_by_country_tag(country_code, tag))
            .await
    }

    /// At most one record: the cheapest offline ticket with stock for `tag`.
    async fn find_cheapest_available_by_tag(
        &self,
        tag: &Tag,
    ) -> StoreResult<Option<Vec<TicketRecord>>> {
        self.find_many(&TicketQuery::cheapest_available_by_tag(tag)).await
    }

    /// The online ticket of a country+event.
    async fn find_online_ticket_by_country_event(
        &self,
        country_code: &CountryCode,
        event_id: &EventId,
    ) -> StoreResult<Option<TicketRecord>> {
        self.find_one(&TicketQuery::online_by_country_event(country_code, event_id))
            .await
    }
}

#[async_trait]
impl<S> TicketStore for Arc<S>
where
    S: TicketStore + ?Sized,
{
    async fn find_many(&self, query: &TicketQuery) -> StoreResult<Option<Vec<TicketRecord>>> {
        (**self).find_many(query).await
    }

    async fn find_one(&self, query: &TicketQuery) -> StoreResult<Option<TicketRecord>> {
        (**self).find_one(query).await
    }
}
