/// A message ready to hand to a broker.
///
/// - `topic` is the logical destination (a Redis channel, a broker topic).
/// - `payload` is opaque bytes (JSON for every message this service emits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    topic: String,
    payload: Vec<u8>,
}

impl OutboundMessage {
    pub fn new(topic: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
