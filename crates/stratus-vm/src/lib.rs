//! # stratus-vm
//!
//! Lifecycle model for virtual machines behind a cloud-agnostic compute API.
//! Answers whether an operation is legal from a given lifecycle state,
//! folding in the backend's static capability flags.
//!
//! ## Quick Start
//!
//! ```
//! use stratus_vm::{BackendCapabilityFlags, LifecycleCapabilityOracle, Operation, VmState};
//!
//! let flags = BackendCapabilityFlags::new(false, true, true);
//! let oracle = LifecycleCapabilityOracle::new(flags);
//!
//! assert!(oracle.can_start(&VmState::Stopped));
//! assert!(!oracle.can_stop(&VmState::Stopped));
//! assert!(!oracle.can_perform(Operation::Pause, &VmState::Running));
//! ```
//!
//! ## Features
//!
//! - **Closed state set**: every operation matches every [`VmState`] exhaustively
//! - **Fail closed**: transitional or unknown provider states permit nothing
//! - **Pure decisions**: verdicts depend only on `(operation, state, flags)`
//! - **Transition matrix**: full verdict table for a set of flags

mod error;
mod flags;
mod matrix;
mod operation;
mod oracle;
mod state;

pub use error::{LifecycleError, Result};
pub use flags::BackendCapabilityFlags;
pub use matrix::{TransitionMatrix, TransitionRow};
pub use operation::Operation;
pub use oracle::{can_perform, LifecycleCapabilityOracle};
pub use state::{TransitionalLabel, VmState};
