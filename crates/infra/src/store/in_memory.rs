//! In-memory ticket store for tests/dev.
//!
//! Holds raw JSON documents, the way the document store does, so a document
//! with the wrong shape surfaces as a decode error at query time rather than
//! at insert time.

use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use ticketing_catalog::TicketRecord;

use super::query::TicketQuery;
use super::r#trait::{StoreError, StoreResult, TicketStore};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file must be a JSON array of ticket documents: {0}")]
    Format(String),
}

#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    documents: RwLock<Vec<JsonValue>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<JsonValue>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Load a JSON array of ticket documents (dev seeding).
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = tokio::fs::read(path.as_ref()).await?;
        let value: JsonValue =
            serde_json::from_slice(&raw).map_err(|e| SeedError::Format(e.to_string()))?;
        match value {
            JsonValue::Array(documents) => {
                tracing::info!(count = documents.len(), "seeded in-memory ticket store");
                Ok(Self::from_documents(documents))
            }
            _ => Err(SeedError::Format("top-level value is not an array".to_string())),
        }
    }

    pub fn insert_document(&self, document: JsonValue) {
        if let Ok(mut docs) = self.documents.write() {
            docs.push(document);
        }
    }

    pub fn insert(&self, record: &TicketRecord) {
        if let Ok(document) = serde_json::to_value(record) {
            self.insert_document(document);
        }
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn select(&self, query: &TicketQuery) -> StoreResult<Vec<JsonValue>> {
        let docs = self
            .documents
            .read()
            .map_err(|_| StoreError::query(query.operation(), "store lock poisoned"))?;

        let mut matched: Vec<JsonValue> = docs
            .iter()
            .filter(|d| query.filter().matches(d))
            .cloned()
            .collect();

        if query.sort_by_price() {
            // Stable sort keeps insertion order among equal prices.
            matched.sort_by_key(|d| d.get("ticketPrice").and_then(JsonValue::as_i64).unwrap_or(i64::MAX));
        }

        if let Some(page) = query.page() {
            let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
            matched = matched.into_iter().skip(offset).take(page.size as usize).collect();
        }

        Ok(matched)
    }
}

fn decode(operation: &'static str, document: JsonValue) -> StoreResult<TicketRecord> {
    serde_json::from_value(document).map_err(|e| StoreError::decode(operation, e))
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn find_many(&self, query: &TicketQuery) -> StoreResult<Option<Vec<TicketRecord>>> {
        let records = self
            .select(query)?
            .into_iter()
            .map(|d| decode(query.operation(), d))
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(Some(records))
    }

    async fn find_one(&self, query: &TicketQuery) -> StoreResult<Option<TicketRecord>> {
        self.select(query)?
            .into_iter()
            .next()
            .map(|d| decode(query.operation(), d))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{code, event, tag, ticket};
    use serde_json::json;

    #[tokio::test]
    async fn offline_lookup_sorts_ascending_by_price() {
        let store = InMemoryTicketStore::new();
        store.insert(&ticket("ID", "e-1", 300, 1, "vip"));
        store.insert(&ticket("ID", "e-1", 100, 1, "cat-1"));
        store.insert(&ticket("ID", "e-1", 200, 0, "cat-2"));
        store.insert(&ticket("SG", "e-1", 50, 1, "cat-1"));

        let found = store
            .find_offline_tickets_by_country_event(&code("ID"), &event("e-1"))
            .await
            .unwrap()
            .unwrap();

        let prices: Vec<_> = found.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![100, 200, 300]);
    }

    #[tokio::test]
    async fn no_match_is_an_empty_list_not_absent() {
        let store = InMemoryTicketStore::new();
        let found = store
            .find_offline_tickets_by_country_event(&code("ID"), &event("e-1"))
            .await
            .unwrap();
        assert_eq!(found, Some(vec![]));
    }

    #[tokio::test]
    async fn cheapest_available_returns_single_cheapest_with_stock() {
        let store = InMemoryTicketStore::new();
        store.insert(&ticket("ID", "e-1", 10, 0, "cat-1"));
        store.insert(&ticket("SG", "e-1", 80, 2, "cat-1"));
        store.insert(&ticket("MY", "e-1", 60, 5, "cat-1"));
        store.insert(&ticket("TH", "e-1", 20, 5, "cat-2"));

        let found = store
            .find_cheapest_available_by_tag(&tag("cat-1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].country.code.as_str(), "MY");
    }

    #[tokio::test]
    async fn online_lookup_returns_none_when_missing() {
        let store = InMemoryTicketStore::new();
        store.insert(&ticket("ID", "e-1", 10, 1, "cat-1"));

        let found = store
            .find_online_ticket_by_country_event(&code("ID"), &event("e-1"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn malformed_matching_document_is_a_decode_error() {
        let store = InMemoryTicketStore::new();
        store.insert_document(json!({
            "ticketType": "CAT 1",
            "eventId": "e-1",
            "country": { "code": "ID" },
            "ticketPrice": "not a number",
        }));

        let err = store
            .find_offline_tickets_by_country_event(&code("ID"), &event("e-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode { operation: "find_offline_tickets_by_country_event", .. }));
    }

    #[tokio::test]
    async fn blank_tag_in_document_is_a_decode_error() {
        let store = InMemoryTicketStore::new();
        let mut document = serde_json::to_value(ticket("ID", "e-1", 100, 1, "cat-1")).unwrap();
        document["tag"] = json!("   ");
        store.insert_document(document);

        let err = store
            .find_offline_tickets_by_country_event(&code("ID"), &event("e-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn seed_file_must_be_an_array() {
        let dir = std::env::temp_dir().join(format!("ticket-seed-{}", uuid::Uuid::now_v7()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let good = dir.join("good.json");
        let docs = json!([serde_json::to_value(ticket("ID", "e-1", 10, 1, "cat-1")).unwrap()]);
        tokio::fs::write(&good, docs.to_string()).await.unwrap();
        let store = InMemoryTicketStore::from_seed_file(&good).await.unwrap();
        assert_eq!(store.len(), 1);

        let bad = dir.join("bad.json");
        tokio::fs::write(&bad, "{}").await.unwrap();
        assert!(matches!(
            InMemoryTicketStore::from_seed_file(&bad).await,
            Err(SeedError::Format(_))
        ));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
