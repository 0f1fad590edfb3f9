use ashfall_core::error::CoreError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while constructing or resetting a session.
///
/// Ticks and actions never fail with an error; their outcomes are
/// reported in-band as log messages.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A core data-model operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
