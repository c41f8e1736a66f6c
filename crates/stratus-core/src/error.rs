//! Error types for stratus-core.

use thiserror::Error;

/// Result type alias for stratus-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while answering capability questions.
///
/// None of these come from the lifecycle decision itself. They come from
/// resolving collaborators or from malformed input at the boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backend capability flags could not be resolved
    #[error("backend capability resolution failed: {0}")]
    Backend(String),

    /// Network subsystem could not be queried
    #[error("network capability resolution failed: {0}")]
    Network(String),

    /// Identity subsystem could not be queried
    #[error("identity capability resolution failed: {0}")]
    Identity(String),

    /// Operation or state outside the closed lifecycle model
    #[error("lifecycle input error: {0}")]
    Lifecycle(#[from] stratus_vm::LifecycleError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
