//! Postgres-backed ticket store.
//!
//! Ticket documents live in a single `ticket_detail` table as `jsonb`
//! (see `migrations/0001_ticket_detail.sql`), keeping the document model of
//! the ticket catalog. Every [`TicketQuery`] is translated into one `SELECT`
//! over JSON fields.
//!
//! ## Error Mapping
//!
//! | Failure | StoreError |
//! |---------|------------|
//! | SQLx error (connection, pool closed, SQL error) | `Query` |
//! | `document` column not readable as JSON | `Decode` |
//! | document does not deserialize into `TicketRecord` | `Decode` |

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use tracing::instrument;

use ticketing_catalog::{ONLINE_TICKET_TYPE, TicketRecord};

use super::query::{Channel, TicketQuery};
use super::r#trait::{StoreError, StoreResult, TicketStore};

#[derive(Debug, Clone)]
pub struct PostgresTicketStore {
    pool: Arc<PgPool>,
}

impl PostgresTicketStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect a pool and wrap it.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Create the `ticket_detail` table and its indexes if missing.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(include_str!("../../migrations/0001_ticket_detail.sql"))
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn fetch(&self, query: &TicketQuery, limit_one: bool) -> StoreResult<Vec<PgRow>> {
        let mut builder = build_select(query, limit_one);
        builder
            .build()
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| StoreError::query(query.operation(), e))
    }
}

/// Translate a query into SQL. Values are always bound, never interpolated.
fn build_select(query: &TicketQuery, limit_one: bool) -> QueryBuilder<'static, Postgres> {
    let filter = query.filter();
    let mut qb = QueryBuilder::new("SELECT document FROM ticket_detail WHERE ");

    match filter.channel {
        Channel::Offline => {
            qb.push("COALESCE(document->>'ticketType', '') <> ");
        }
        Channel::Online => {
            qb.push("document->>'ticketType' = ");
        }
    }
    qb.push_bind(ONLINE_TICKET_TYPE);

    if let Some(code) = &filter.country_code {
        qb.push(" AND document->'country'->>'code' = ");
        qb.push_bind(code.as_str().to_owned());
    }
    if let Some(event_id) = &filter.event_id {
        qb.push(" AND document->>'eventId' = ");
        qb.push_bind(event_id.as_str().to_owned());
    }
    if let Some(tag) = &filter.tag {
        qb.push(" AND document->>'tag' = ");
        qb.push_bind(tag.as_str().to_owned());
    }
    if filter.available_only {
        qb.push(" AND (document->>'totalRemaining')::bigint > 0");
    }

    if query.sort_by_price() {
        qb.push(" ORDER BY (document->>'ticketPrice')::bigint ASC, id ASC");
    }

    match (query.page(), limit_one) {
        (Some(page), _) => {
            qb.push(" LIMIT ");
            qb.push_bind(i64::from(page.size));
            qb.push(" OFFSET ");
            qb.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        }
        (None, true) => {
            qb.push(" LIMIT 1");
        }
        (None, false) => {}
    }

    qb
}

fn decode_row(operation: &'static str, row: &PgRow) -> StoreResult<TicketRecord> {
    let document: JsonValue = row
        .try_get("document")
        .map_err(|e| StoreError::decode(operation, e))?;
    serde_json::from_value(document).map_err(|e| StoreError::decode(operation, e))
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    #[instrument(
        skip(self, query),
        fields(operation = query.operation(), row_count = tracing::field::Empty),
        err
    )]
    async fn find_many(&self, query: &TicketQuery) -> StoreResult<Option<Vec<TicketRecord>>> {
        let rows = self.fetch(query, false).await?;
        let records = rows
            .iter()
            .map(|row| decode_row(query.operation(), row))
            .collect::<StoreResult<Vec<_>>>()?;
        tracing::Span::current().record("row_count", records.len());
        Ok(Some(records))
    }

    #[instrument(skip(self, query), fields(operation = query.operation()), err)]
    async fn find_one(&self, query: &TicketQuery) -> StoreResult<Option<TicketRecord>> {
        let rows = self.fetch(query, true).await?;
        rows.first()
            .map(|row| decode_row(query.operation(), row))
            .transpose()
    }
}
