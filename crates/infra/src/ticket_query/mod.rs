//! Ticket query use-cases: the availability resolver, the suggestion
//! selector and the online-eligibility decider.
//!
//! Store calls within one request are chained by data dependency, so they run
//! one after another under the request's [`RequestContext`]. The only
//! side effect is the switch-to-online notification, which is detached.

mod listing;
mod online;
mod suggestion;

#[cfg(test)]
pub(crate) mod scripted;

use std::future::Future;

use ticketing_catalog::AvailabilityPolicy;
use ticketing_core::{TicketError, TicketResult};

use crate::context::RequestContext;
use crate::notifier::SwitchNotifier;
use crate::store::StoreResult;

/// Read-side ticket service over a [`TicketStore`](crate::store::TicketStore).
#[derive(Debug, Clone)]
pub struct TicketQueryService<S> {
    store: S,
    notifier: SwitchNotifier,
    policy: AvailabilityPolicy,
}

impl<S> TicketQueryService<S> {
    pub fn new(store: S, notifier: SwitchNotifier, policy: AvailabilityPolicy) -> Self {
        Self {
            store,
            notifier,
            policy,
        }
    }
}

/// Run one store lookup under the request deadline and classify its outcome.
///
/// Absent data becomes `NotFound(not_found)`; store failures are logged with
/// the operation and converted (decode → internal, anything else upstream).
async fn lookup<T, F>(
    ctx: &RequestContext,
    operation: &'static str,
    not_found: &'static str,
    call: F,
) -> TicketResult<T>
where
    F: Future<Output = StoreResult<Option<T>>>,
{
    match ctx.run(operation, call).await {
        Ok(Some(data)) => Ok(data),
        Ok(None) => {
            tracing::warn!(operation, "{not_found}");
            Err(TicketError::not_found(not_found))
        }
        Err(err) => {
            tracing::error!(operation, error = %err, "ticket store lookup failed");
            Err(err.into())
        }
    }
}
