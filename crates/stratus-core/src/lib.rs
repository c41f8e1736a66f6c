//! # stratus-core
//!
//! Compute capability surface for Stratus.
//!
//! This crate connects the pure lifecycle model in `stratus-vm` to the
//! collaborators that know what a backend can do: a capability-flag
//! provider, and optionally network and identity subsystems.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      stratus-core                        │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  ┌─────────────────────┐    ┌────────────────────────┐   │
//! │  │ ServerCapabilities  │───▶│ BackendCapability-     │   │
//! │  │  - can_start()      │    │ Provider (flags)       │   │
//! │  │  - vlan_requirement │    └────────────────────────┘   │
//! │  │  - profile()        │    ┌────────────────────────┐   │
//! │  └─────────────────────┘───▶│ Network / Identity     │   │
//! │           │                 │ providers (optional)   │   │
//! │           ▼                 └────────────────────────┘   │
//! │  ┌─────────────────────┐                                 │
//! │  │ LifecycleCapability-│                                 │
//! │  │ Oracle (stratus-vm) │                                 │
//! │  └─────────────────────┘                                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use stratus_core::{CachedCapabilityProvider, CapabilityConfig, ServerCapabilities};
//! use stratus_vm::VmState;
//!
//! # async fn example() -> stratus_core::Result<()> {
//! let backend = CachedCapabilityProvider::new(CapabilityConfig::from_env());
//! let caps = ServerCapabilities::new(Arc::new(backend));
//!
//! if caps.can_stop(&VmState::Running).await? {
//!     // issue the stop call against the provider
//! }
//! # Ok(())
//! # }
//! ```

mod capabilities;
mod config;
mod error;
mod profile;
mod provider;

pub use capabilities::ServerCapabilities;
pub use config::CapabilityConfig;
pub use error::{CoreError, Result};
pub use profile::{
    Architecture, ComputeProfile, ImageClass, Requirement, VerticalScaling, VisibleScope,
};
pub use provider::{
    BackendCapabilityProvider, CachedCapabilityProvider, IdentityCapabilityProvider,
    NetworkCapabilityProvider, VlanSupport,
};
