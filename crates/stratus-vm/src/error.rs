//! Error types for stratus-vm.

use thiserror::Error;

/// Result type alias for stratus-vm operations.
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Input-contract violations at the boundary of the lifecycle model.
///
/// Deciding a transition never fails. These errors only come from turning
/// external input into the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Operation name is not one of the lifecycle operations
    #[error("unknown lifecycle operation: {0:?}")]
    UnknownOperation(String),
}
