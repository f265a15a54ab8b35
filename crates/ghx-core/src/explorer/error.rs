use thiserror::Error;

/// Recoverable submit failures. Both render as one message line and leave
/// the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Submitted with an empty identifier; no lookup was made.
    #[error("identifier required")]
    Validation,
    /// Lookup rejected: not found, transport failure, or unreadable response.
    #[error("repository not found")]
    LookupFailed,
}
