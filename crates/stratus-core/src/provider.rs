//! Collaborator interfaces for capability resolution.
//!
//! The lifecycle model only accepts resolved values. These traits are the
//! seams where a provider-specific client answers the questions the model
//! needs: which lifecycle capabilities the backend has, whether a VLAN
//! subscription is active, and whether shell keys are supported.

use crate::error::Result;
use async_trait::async_trait;
use stratus_vm::BackendCapabilityFlags;
use tokio::sync::OnceCell;

/// Reports the backend-wide lifecycle capability flags.
#[async_trait]
pub trait BackendCapabilityProvider: Send + Sync {
    /// Resolve the flags for the active account/session.
    ///
    /// Failures must be returned, never replaced with a default.
    async fn capability_flags(&self) -> Result<BackendCapabilityFlags>;
}

/// VLAN support offered by a network subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlanSupport {
    /// Whether the account holds an active VLAN subscription.
    pub subscribed: bool,
}

/// Network subsystem of the backend.
#[async_trait]
pub trait NetworkCapabilityProvider: Send + Sync {
    /// VLAN support, or `None` when the backend offers no VLANs at all.
    async fn vlan_support(&self) -> Result<Option<VlanSupport>>;
}

/// Identity subsystem of the backend.
#[async_trait]
pub trait IdentityCapabilityProvider: Send + Sync {
    /// Whether the backend can manage shell (SSH) keys.
    async fn shell_key_support(&self) -> Result<bool>;
}

/// Resolves backend flags at most once and reuses them for the session.
///
/// A failed resolution is not remembered; the next call asks the inner
/// provider again.
pub struct CachedCapabilityProvider<P> {
    inner: P,
    flags: OnceCell<BackendCapabilityFlags>,
}

impl<P: BackendCapabilityProvider> CachedCapabilityProvider<P> {
    /// Wrap a provider.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            flags: OnceCell::new(),
        }
    }

    /// Flags resolved so far, if any.
    pub fn cached(&self) -> Option<BackendCapabilityFlags> {
        self.flags.get().copied()
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: BackendCapabilityProvider> BackendCapabilityProvider for CachedCapabilityProvider<P> {
    async fn capability_flags(&self) -> Result<BackendCapabilityFlags> {
        if let Some(flags) = self.flags.get() {
            tracing::trace!(?flags, "Using cached capability flags");
            return Ok(*flags);
        }

        let flags = self
            .flags
            .get_or_try_init(|| async {
                let flags = self.inner.capability_flags().await?;
                tracing::debug!(?flags, "Resolved backend capability flags");
                Ok::<_, crate::CoreError>(flags)
            })
            .await?;
        Ok(*flags)
    }
}
