//! Error reporting at the binary boundary
//!
//! Errors that carry an actionable message for the operator (bad config,
//! invalid flags) are reported verbatim. Everything else is reported with
//! the operation context, and the full error goes to debug level.

/// Errors that know whether their message is meant for the operator
///
/// When `is_user_actionable()` returns `true`, `user_message()` returns
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    fn is_user_actionable(&self) -> bool;

    fn user_message(&self) -> Option<&str>;
}

/// Log a fatal error with the detail level its kind calls for
///
/// # Examples
/// ```rust,no_run
/// # use containerkit::core::error_handling::log_error_with_context;
/// # use containerkit::containers::api::ContainerError;
/// let err = ContainerError::Configuration { message: "threads must be at least 1".into() };
/// log_error_with_context(&err, "Loading configuration");
/// // Logs: "FATAL: threads must be at least 1"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
