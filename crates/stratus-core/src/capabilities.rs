//! ServerCapabilities - what the compute backend can do with its servers.

use crate::error::Result;
use crate::profile::{ComputeProfile, ImageClass, Requirement};
use crate::provider::{
    BackendCapabilityProvider, IdentityCapabilityProvider, NetworkCapabilityProvider,
};
use std::sync::Arc;
use stratus_vm::{BackendCapabilityFlags, LifecycleCapabilityOracle, Operation, VmState};

/// Capability surface for virtual machines on one backend.
///
/// Every `can_*` call resolves the backend flags first and then asks the
/// lifecycle oracle. A failed resolution is returned to the caller as an
/// error; it never turns into a verdict.
#[derive(Clone)]
pub struct ServerCapabilities {
    backend: Arc<dyn BackendCapabilityProvider>,
    network: Option<Arc<dyn NetworkCapabilityProvider>>,
    identity: Option<Arc<dyn IdentityCapabilityProvider>>,
    profile: ComputeProfile,
}

impl ServerCapabilities {
    /// Create capabilities backed by `backend`, with no network or identity subsystem.
    pub fn new(backend: Arc<dyn BackendCapabilityProvider>) -> Self {
        Self {
            backend,
            network: None,
            identity: None,
            profile: ComputeProfile::default(),
        }
    }

    /// Attach a network subsystem.
    pub fn with_network(mut self, network: Arc<dyn NetworkCapabilityProvider>) -> Self {
        self.network = Some(network);
        self
    }

    /// Attach an identity subsystem.
    pub fn with_identity(mut self, identity: Arc<dyn IdentityCapabilityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Fixed facts about the compute service.
    pub fn profile(&self) -> &ComputeProfile {
        &self.profile
    }

    /// Resolve the backend flags and bind an oracle to them.
    pub async fn oracle(&self) -> Result<LifecycleCapabilityOracle> {
        Ok(LifecycleCapabilityOracle::new(self.flags().await?))
    }

    async fn flags(&self) -> Result<BackendCapabilityFlags> {
        self.backend.capability_flags().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to resolve backend capability flags");
            e
        })
    }

    /// Whether `op` is permitted from `from`.
    pub async fn can_perform(&self, op: Operation, from: &VmState) -> Result<bool> {
        let permitted = self.oracle().await?.can_perform(op, from);
        tracing::debug!(operation = %op, state = %from, permitted, "Evaluated lifecycle transition");
        Ok(permitted)
    }

    pub async fn can_alter(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Alter, from).await
    }

    pub async fn can_clone(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Clone, from).await
    }

    pub async fn can_pause(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Pause, from).await
    }

    pub async fn can_reboot(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Reboot, from).await
    }

    pub async fn can_resume(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Resume, from).await
    }

    pub async fn can_start(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Start, from).await
    }

    pub async fn can_stop(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Stop, from).await
    }

    pub async fn can_suspend(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Suspend, from).await
    }

    pub async fn can_terminate(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Terminate, from).await
    }

    pub async fn can_unpause(&self, from: &VmState) -> Result<bool> {
        self.can_perform(Operation::Unpause, from).await
    }

    /// Instances can be altered in place.
    pub fn supports_alter_vm(&self) -> bool {
        true
    }

    pub fn supports_clone(&self) -> bool {
        false
    }

    pub fn supports_reboot(&self) -> bool {
        true
    }

    pub fn supports_terminate(&self) -> bool {
        true
    }

    pub async fn supports_pause(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_pause_unpause)
    }

    pub async fn supports_unpause(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_pause_unpause)
    }

    pub async fn supports_start(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_start_stop)
    }

    pub async fn supports_stop(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_start_stop)
    }

    pub async fn supports_suspend(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_suspend_resume)
    }

    pub async fn supports_resume(&self) -> Result<bool> {
        Ok(self.flags().await?.supports_suspend_resume)
    }

    pub fn data_center_launch_requirement(&self) -> Requirement {
        Requirement::None
    }

    /// Machine images are needed to launch; kernel and ramdisk images are extras.
    pub fn image_requirement(&self, class: ImageClass) -> Requirement {
        match class {
            ImageClass::Machine => Requirement::Required,
            ImageClass::Kernel | ImageClass::Ramdisk => Requirement::Optional,
        }
    }

    pub fn password_requirement(&self) -> Requirement {
        Requirement::Optional
    }

    pub fn root_volume_requirement(&self) -> Requirement {
        Requirement::None
    }

    pub fn static_ip_requirement(&self) -> Requirement {
        Requirement::None
    }

    pub fn subnet_requirement(&self) -> Requirement {
        Requirement::Required
    }

    /// Shell keys are optional when the identity subsystem supports them.
    pub async fn shell_key_requirement(&self) -> Result<Requirement> {
        let Some(identity) = &self.identity else {
            return Ok(Requirement::None);
        };
        let supported = identity.shell_key_support().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to query shell key support");
            e
        })?;
        Ok(if supported {
            Requirement::Optional
        } else {
            Requirement::None
        })
    }

    /// A VLAN is required at launch only while a VLAN subscription is active.
    pub async fn vlan_requirement(&self) -> Result<Requirement> {
        let Some(network) = &self.network else {
            return Ok(Requirement::None);
        };
        let support = network.vlan_support().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to query VLAN support");
            e
        })?;
        Ok(match support {
            Some(vlan) if vlan.subscribed => Requirement::Required,
            _ => Requirement::None,
        })
    }
}
