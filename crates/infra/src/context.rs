//! Per-request execution context for ticket queries.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::store::{StoreError, StoreResult};

/// Request identity plus an optional deadline applied to every store call.
///
/// Created once per inbound request and dropped with it; nothing in here is
/// shared between requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::now_v7(),
            deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Await a store call, abandoning it once the deadline passes.
    ///
    /// Abandoning drops the query future, which releases its connection.
    pub async fn run<T, F>(&self, operation: &'static str, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, call)
                .await
                .map_err(|_| StoreError::Timeout { operation })?,
            None => call.await,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn without_deadline_call_runs_to_completion() {
        let ctx = RequestContext::new();
        let out = ctx.run("op", async { Ok::<_, StoreError>(7) }).await;
        assert_eq!(out, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_deadline_abandons_slow_call() {
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(50));
        let out = ctx
            .run("find_online_ticket_by_country_event", async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, StoreError>(())
            })
            .await;
        assert_eq!(
            out,
            Err(StoreError::Timeout {
                operation: "find_online_ticket_by_country_event"
            })
        );
    }
}
