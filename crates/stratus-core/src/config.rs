//! Static capability configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! A [`CapabilityConfig`] doubles as an in-process backend: it implements
//! every collaborator trait by answering from its own fields.

use crate::error::{CoreError, Result};
use crate::provider::{
    BackendCapabilityProvider, IdentityCapabilityProvider, NetworkCapabilityProvider, VlanSupport,
};
use async_trait::async_trait;
use stratus_vm::BackendCapabilityFlags;

const ENV_PAUSE_UNPAUSE: &str = "STRATUS_PAUSE_UNPAUSE";
const ENV_START_STOP: &str = "STRATUS_START_STOP";
const ENV_SUSPEND_RESUME: &str = "STRATUS_SUSPEND_RESUME";
const ENV_VLAN_SUBSCRIBED: &str = "STRATUS_VLAN_SUBSCRIBED";
const ENV_SHELL_KEYS: &str = "STRATUS_SHELL_KEYS";

/// Capability settings for a statically described backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityConfig {
    /// Lifecycle capability flags (default: all enabled).
    pub flags: BackendCapabilityFlags,
    /// Whether a VLAN subscription is active (default: false).
    pub vlan_subscribed: bool,
    /// Whether shell keys are supported (default: true).
    pub shell_keys: bool,
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            flags: BackendCapabilityFlags::all(),
            vlan_subscribed: false,
            shell_keys: true,
        }
    }
}

impl CapabilityConfig {
    /// Load configuration from environment variables, rejecting malformed values.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `STRATUS_PAUSE_UNPAUSE` | `true` |
    /// | `STRATUS_START_STOP` | `true` |
    /// | `STRATUS_SUSPEND_RESUME` | `true` |
    /// | `STRATUS_VLAN_SUBSCRIBED` | `false` |
    /// | `STRATUS_SHELL_KEYS` | `true` |
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from environment variables.
    ///
    /// A malformed value is logged and the whole configuration fails closed
    /// (see [`CapabilityConfig::fail_closed`]), so a typo can never switch a
    /// capability back on.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration with every capability disabled.
    pub const fn fail_closed() -> Self {
        Self {
            flags: BackendCapabilityFlags::none(),
            vlan_subscribed: false,
            shell_keys: false,
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::try_from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid capability configuration, disabling all capabilities");
            Self::fail_closed()
        })
    }

    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default = Self::default();
        let read = |key: &str, fallback: bool| -> Result<bool> {
            match lookup(key) {
                Some(value) => parse_bool(key, &value),
                None => Ok(fallback),
            }
        };

        Ok(Self {
            flags: BackendCapabilityFlags::new(
                read(ENV_PAUSE_UNPAUSE, default.flags.supports_pause_unpause)?,
                read(ENV_START_STOP, default.flags.supports_start_stop)?,
                read(ENV_SUSPEND_RESUME, default.flags.supports_suspend_resume)?,
            ),
            vlan_subscribed: read(ENV_VLAN_SUBSCRIBED, default.vlan_subscribed)?,
            shell_keys: read(ENV_SHELL_KEYS, default.shell_keys)?,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CoreError::Config(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}

#[async_trait]
impl BackendCapabilityProvider for CapabilityConfig {
    async fn capability_flags(&self) -> Result<BackendCapabilityFlags> {
        Ok(self.flags)
    }
}

#[async_trait]
impl NetworkCapabilityProvider for CapabilityConfig {
    async fn vlan_support(&self) -> Result<Option<VlanSupport>> {
        Ok(Some(VlanSupport {
            subscribed: self.vlan_subscribed,
        }))
    }
}

#[async_trait]
impl IdentityCapabilityProvider for CapabilityConfig {
    async fn shell_key_support(&self) -> Result<bool> {
        Ok(self.shell_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CapabilityConfig::default();
        assert_eq!(config.flags, BackendCapabilityFlags::all());
        assert!(!config.vlan_subscribed);
        assert!(config.shell_keys);
    }

    #[test]
    fn test_empty_lookup_uses_defaults() {
        let config = CapabilityConfig::try_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CapabilityConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = CapabilityConfig::try_from_lookup(lookup(&[
            ("STRATUS_PAUSE_UNPAUSE", "no"),
            ("STRATUS_START_STOP", "TRUE"),
            ("STRATUS_SUSPEND_RESUME", "0"),
            ("STRATUS_VLAN_SUBSCRIBED", "1"),
            ("STRATUS_SHELL_KEYS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.flags, BackendCapabilityFlags::new(false, true, false));
        assert!(config.vlan_subscribed);
        assert!(!config.shell_keys);
    }

    #[test]
    fn test_malformed_value_rejected() {
        let err = CapabilityConfig::try_from_lookup(lookup(&[("STRATUS_START_STOP", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("STRATUS_START_STOP"));
    }

    #[test]
    fn test_lenient_load_keeps_valid_values() {
        let config = CapabilityConfig::from_lookup(lookup(&[("STRATUS_START_STOP", "false")]));
        assert_eq!(config.flags, BackendCapabilityFlags::new(true, false, true));
    }

    #[test]
    fn test_lenient_load_fails_closed_on_malformed_value() {
        let config = CapabilityConfig::from_lookup(lookup(&[
            ("STRATUS_START_STOP", "false"),
            ("STRATUS_PAUSE_UNPAUSE", "maybe"),
        ]));

        assert_eq!(config, CapabilityConfig::fail_closed());
        assert!(!config.flags.supports_start_stop);
        assert!(!config.flags.supports_pause_unpause);
        assert!(!config.flags.supports_suspend_resume);
    }

    #[tokio::test]
    async fn test_config_as_providers() {
        let config = CapabilityConfig {
            vlan_subscribed: true,
            ..Default::default()
        };
        assert_eq!(
            config.capability_flags().await.unwrap(),
            BackendCapabilityFlags::all()
        );
        assert_eq!(
            config.vlan_support().await.unwrap(),
            Some(VlanSupport { subscribed: true })
        );
        assert!(config.shell_key_support().await.unwrap());
    }
}
