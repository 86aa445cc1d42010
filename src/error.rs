//! Error taxonomy for the portal core.
//!
//! Every error is a local, recoverable-by-caller condition. The core never
//! logs, retries, or suppresses; it returns deterministically and lets the
//! caller decide how to surface the condition.

use thiserror::Error;

use crate::model::run::RunId;
use crate::model::ValidationError;

/// Result type for portal operations.
pub type PortalResult<T> = Result<T, PortalError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortalError {
    /// A domain tag outside the fixed enumeration.
    #[error("unknown domain: '{0}' (expected sales, procurement, or finance)")]
    UnknownDomain(String),

    /// Malformed filter input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Archive lookup by a run id that was never assigned.
    #[error("run not found: {0}")]
    RunNotFound(RunId),
}
