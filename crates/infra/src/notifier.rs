//! Fire-and-forget "switch to online" notifications.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use ticketing_catalog::{SWITCH_TO_ONLINE_TOPIC, SwitchNotification};
use ticketing_events::{MessagePublisher, OutboundMessage};

/// Publishes [`SwitchNotification`]s on a detached task.
///
/// The caller never awaits the publish and never sees its outcome; failures
/// are logged here and go no further.
#[derive(Clone)]
pub struct SwitchNotifier {
    publisher: Arc<dyn MessagePublisher>,
    topic: String,
}

impl SwitchNotifier {
    pub fn new(publisher: Arc<dyn MessagePublisher>, topic: impl Into<String>) -> Self {
        Self {
            publisher,
            topic: topic.into(),
        }
    }

    /// Notifier on the standard switch-to-online topic.
    pub fn standard(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self::new(publisher, SWITCH_TO_ONLINE_TOPIC)
    }

    /// Dispatch the notification and return immediately.
    ///
    /// The handle is only useful to tests; production callers drop it.
    /// Returns `None` when the notification could not be dispatched at all
    /// (encoding failure, no async runtime), which is logged.
    pub fn notify(&self, notification: SwitchNotification) -> Option<JoinHandle<()>> {
        let payload = match notification.to_payload() {
            Ok(p) => p,
            Err(err) => {
                tracing::error!(error = %err, ?notification, "cannot encode switch notification");
                return None;
            }
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!(?notification, "no async runtime; switch notification dropped");
                return None;
            }
        };

        let publisher = self.publisher.clone();
        let message = OutboundMessage::new(self.topic.clone(), payload);
        let span = tracing::info_span!(
            "switch_notification",
            topic = %self.topic,
            tag = %notification.tag,
            country_code = %notification.country_code,
        );

        Some(runtime.spawn(
            async move {
                match publisher.publish(message).await {
                    Ok(()) => tracing::info!("sent switch-to-online notification"),
                    Err(err) => tracing::error!(error = %err, "switch-to-online notification failed"),
                }
            }
            .instrument(span),
        ))
    }
}

impl core::fmt::Debug for SwitchNotifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwitchNotifier")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}
