//! Error taxonomy shared by the query layer and the transport.

use thiserror::Error;

/// Result type used across the ticketing layers.
pub type TicketResult<T> = Result<T, TicketError>;

/// Classified failure of a ticket query.
///
/// Each variant maps to one response status at the transport. The message is
/// what the caller sees; request context travels in the logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// A request field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No matching ticket, country or online record.
    #[error("{0}")]
    NotFound(String),

    /// A fetched payload did not match the ticket record shape.
    #[error("internal error: {0}")]
    Internal(String),

    /// The ticket store reported a failure; passed through with the operation name.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// The request is valid but the current state forbids it.
    #[error("{0}")]
    Conflict(String),
}

impl TicketError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Stable machine-readable code, used in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            TicketError::Validation(_) => "validation_error",
            TicketError::NotFound(_) => "not_found",
            TicketError::Internal(_) => "internal_error",
            TicketError::Upstream(_) => "upstream_error",
            TicketError::Conflict(_) => "conflict",
        }
    }

    /// The message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            TicketError::Validation(m)
            | TicketError::NotFound(m)
            | TicketError::Internal(m)
            | TicketError::Upstream(m)
            | TicketError::Conflict(m) => m,
        }
    }
}
