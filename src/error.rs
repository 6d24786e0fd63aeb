//! Error types for queue operations

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Queue error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("failed to allocate {len} bytes for a queued value")]
    ValueAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to grow node storage")]
    NodeAlloc(#[source] TryReserveError),

    #[error("queue is empty")]
    Empty,
}

/// Result type for queue operations
pub type Result<T> = core::result::Result<T, QueueError>;
