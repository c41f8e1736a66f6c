//! Launch requirements and fixed facts about the compute service.

use serde::{Deserialize, Serialize};
use stratus_vm::VmState;

/// How strongly a launch parameter is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Not used at launch.
    None,
    /// May be supplied.
    Optional,
    /// Must be supplied.
    Required,
}

/// Class of a machine image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageClass {
    Machine,
    Kernel,
    Ramdisk,
}

/// CPU architectures an instance can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    I32,
    I64,
}

/// Who can see a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibleScope {
    AccountGlobal,
    AccountRegion,
    AccountDatacenter,
}

/// How an instance can change size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalScaling {
    /// A product change replaces the instance with a new one.
    pub new_vm_on_change: bool,
    /// The product of an existing instance can change.
    pub product_changes: bool,
    /// The product can change without stopping the instance.
    pub product_changes_while_running: bool,
}

/// Fixed facts about the compute service that do not depend on the backend flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeProfile {
    /// Maximum number of instances, `None` when unknown.
    pub max_vm_count: Option<u32>,
    pub provider_term: String,
    pub vertical_scaling: VerticalScaling,
    pub vm_visible_scope: VisibleScope,
    pub product_visible_scope: VisibleScope,
    pub reserved_user_names: Vec<String>,
    pub api_termination_preventable: bool,
    pub basic_analytics: bool,
    pub extended_analytics: bool,
    /// User data can be set at launch. It cannot be read back.
    pub user_data: bool,
    pub user_defined_private_ip: bool,
    pub root_password_ssh_key_encrypted: bool,
    pub architectures: Vec<Architecture>,
    pub spot_vms: bool,
    pub client_request_token: bool,
    pub cloud_stored_shell_key: bool,
    pub vm_product_dc_constrained: bool,
}

impl Default for ComputeProfile {
    fn default() -> Self {
        Self {
            max_vm_count: None,
            provider_term: "server".to_string(),
            vertical_scaling: VerticalScaling {
                new_vm_on_change: false,
                product_changes: true,
                product_changes_while_running: false,
            },
            vm_visible_scope: VisibleScope::AccountDatacenter,
            product_visible_scope: VisibleScope::AccountDatacenter,
            reserved_user_names: Vec::new(),
            api_termination_preventable: false,
            basic_analytics: true,
            extended_analytics: false,
            user_data: true,
            user_defined_private_ip: false,
            root_password_ssh_key_encrypted: false,
            architectures: vec![Architecture::I32, Architecture::I64],
            spot_vms: false,
            client_request_token: false,
            cloud_stored_shell_key: true,
            vm_product_dc_constrained: false,
        }
    }
}

impl ComputeProfile {
    /// Relative cost of an instance in `state`, as a percentage of running cost.
    pub fn cost_factor(&self, _state: &VmState) -> u32 {
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ComputeProfile::default();
        assert_eq!(profile.max_vm_count, None);
        assert_eq!(profile.provider_term, "server");
        assert!(profile.vertical_scaling.product_changes);
        assert!(!profile.vertical_scaling.product_changes_while_running);
        assert_eq!(profile.vm_visible_scope, VisibleScope::AccountDatacenter);
        assert!(profile.reserved_user_names.is_empty());
        assert_eq!(
            profile.architectures,
            vec![Architecture::I32, Architecture::I64]
        );
        assert!(profile.cloud_stored_shell_key);
    }

    #[test]
    fn test_cost_factor_flat() {
        let profile = ComputeProfile::default();
        for state in VmState::DECLARED {
            assert_eq!(profile.cost_factor(&state), 100);
        }
        assert_eq!(profile.cost_factor(&VmState::from_label("pending")), 100);
    }

    #[test]
    fn test_requirement_serialization() {
        assert_eq!(
            serde_json::to_string(&Requirement::Optional).unwrap(),
            "\"optional\""
        );
        assert_eq!(
            serde_json::to_string(&VisibleScope::AccountDatacenter).unwrap(),
            "\"account_datacenter\""
        );
    }
}
