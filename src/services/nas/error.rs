use std::time::Duration;

use super::{action::Action, messages::ServiceError};

/// Failures delivering a request or its reply.
///
/// Timeouts and cancellations travel the same path as channel failures;
/// only the message tells them apart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No reply arrived before the action's timeout.
    #[error("{action} timed out after {}s", timeout.as_secs())]
    Timeout {
        /// Action that timed out
        action: Action,
        /// Timeout that expired
        timeout: Duration,
    },

    /// The operation was cancelled before a reply arrived.
    #[error("{action} was cancelled")]
    Cancelled {
        /// Action that was cancelled
        action: Action,
    },

    /// The control channel went away.
    #[error("Channel closed: {0}")]
    ChannelClosed(String),

    /// The request could not be submitted.
    #[error("Request submission failed: {0}")]
    Submission(String),

    /// The transport completed without a response record.
    #[error("No response received")]
    NoResponse,

    /// A NAS client could not be allocated on the device.
    #[error("Client allocation failed: {0}")]
    ClientAllocation(String),
}

/// Errors produced while running a NAS operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NasError {
    /// The request or its reply was lost.
    #[error("operation failed: {0}")]
    Transport(#[from] TransportError),

    /// The modem answered with a failed result status.
    #[error("{context}: {source}")]
    Service {
        /// What was being attempted
        context: &'static str,
        /// Error reported by the modem
        source: ServiceError,
    },

    /// The context was already released.
    #[error("operation failed: context already released")]
    ContextReleased,
}

impl NasError {
    /// Wraps a failed result status for an action.
    pub fn service(action: Action, source: ServiceError) -> Self {
        NasError::Service {
            context: action.failure_context(),
            source,
        }
    }
}
