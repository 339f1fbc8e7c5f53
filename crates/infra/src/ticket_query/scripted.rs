//! Store double that answers each query kind with a scripted outcome.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use ticketing_catalog::TicketRecord;

use crate::store::{QueryKind, StoreResult, TicketQuery, TicketStore};

/// Unscripted multi lookups answer `Ok(Some(vec![]))`, unscripted single
/// lookups `Ok(None)`. Every query is recorded.
#[derive(Default)]
pub struct ScriptedStore {
    many: HashMap<QueryKind, StoreResult<Option<Vec<TicketRecord>>>>,
    one: HashMap<QueryKind, StoreResult<Option<TicketRecord>>>,
    calls: Mutex<Vec<TicketQuery>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn many(mut self, kind: QueryKind, outcome: StoreResult<Option<Vec<TicketRecord>>>) -> Self {
        self.many.insert(kind, outcome);
        self
    }

    pub fn one(mut self, kind: QueryKind, outcome: StoreResult<Option<TicketRecord>>) -> Self {
        self.one.insert(kind, outcome);
        self
    }

    pub fn calls(&self) -> Vec<TicketQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<QueryKind> {
        self.calls().iter().map(TicketQuery::kind).collect()
    }
}

#[async_trait]
impl TicketStore for ScriptedStore {
    async fn find_many(&self, query: &TicketQuery) -> StoreResult<Option<Vec<TicketRecord>>> {
        self.calls.lock().unwrap().push(query.clone());
        self.many.get(&query.kind()).cloned().unwrap_or(Ok(Some(Vec::new())))
    }

    async fn find_one(&self, query: &TicketQuery) -> StoreResult<Option<TicketRecord>> {
        self.calls.lock().unwrap().push(query.clone());
        self.one.get(&query.kind()).cloned().unwrap_or(Ok(None))
    }
}

/// Service over a scripted store with an observable in-memory publisher.
pub fn service(
    store: ScriptedStore,
) -> (
    super::TicketQueryService<std::sync::Arc<ScriptedStore>>,
    std::sync::Arc<ScriptedStore>,
    std::sync::Arc<ticketing_events::InMemoryPublisher>,
) {
    let store = std::sync::Arc::new(store);
    let publisher = std::sync::Arc::new(ticketing_events::InMemoryPublisher::new());
    let service = super::TicketQueryService::new(
        store.clone(),
        crate::notifier::SwitchNotifier::standard(publisher.clone()),
        ticketing_catalog::AvailabilityPolicy::standard(),
    );
    (service, store, publisher)
}
