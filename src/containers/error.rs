//! Container Error Types

use crate::core::error_handling::ContextualError;

#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("Push cancelled before a permit became available")]
    Cancelled,

    #[error("Push deadline exceeded after waiting {waited_ms}ms for a permit")]
    DeadlineExceeded { waited_ms: u64 },

    #[error("Permit pool closed")]
    PermitPoolClosed,

    #[error("Lock poisoned: {message}")]
    Poisoned { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ContainerError {
    /// True for the two outcomes of a push context firing
    pub fn is_context_failure(&self) -> bool {
        matches!(
            self,
            ContainerError::Cancelled | ContainerError::DeadlineExceeded { .. }
        )
    }
}

impl ContextualError for ContainerError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, ContainerError::Configuration { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ContainerError::Configuration { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type for fallible container operations
pub type ContainerResult<T> = Result<T, ContainerError>;
