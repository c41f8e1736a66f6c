//! Lifecycle states of a virtual machine.

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Current lifecycle state of a virtual machine instance.
///
/// The oracle never owns this value; whoever tracks the instance passes it
/// in per decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VmState {
    /// VM is running
    Running,
    /// VM is stopped and can be started again
    Stopped,
    /// VM is paused in memory
    Paused,
    /// VM is suspended to storage
    Suspended,
    /// VM is gone
    Terminated,
    /// VM is in an error state reported by the backend
    Error,
    /// Any other state the provider reports (pending, stopping, rebooting,
    /// or a label we do not know). No operation is permitted from here.
    Transitional(TransitionalLabel),
}

/// Provider label of a transitional or unknown state.
///
/// Only [`VmState::from_label`] builds one, so it never holds a declared
/// state's label and survives a serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionalLabel(Cow<'static, str>);

impl TransitionalLabel {
    /// The label as reported by the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl VmState {
    /// The settled states with a defined row in the transition table.
    pub const DECLARED: [VmState; 6] = [
        VmState::Running,
        VmState::Stopped,
        VmState::Paused,
        VmState::Suspended,
        VmState::Terminated,
        VmState::Error,
    ];

    /// Build a state from a provider label.
    ///
    /// Never fails: labels outside the declared set become
    /// [`VmState::Transitional`].
    pub fn from_label(label: impl Into<Cow<'static, str>>) -> Self {
        let label = label.into();
        let key = label.trim().to_ascii_lowercase();
        match key.as_str() {
            "running" => VmState::Running,
            "stopped" => VmState::Stopped,
            "paused" => VmState::Paused,
            "suspended" => VmState::Suspended,
            "terminated" => VmState::Terminated,
            "error" => VmState::Error,
            _ => VmState::Transitional(TransitionalLabel(label)),
        }
    }

    /// Whether this state falls outside the declared set.
    pub fn is_transitional(&self) -> bool {
        matches!(self, VmState::Transitional(_))
    }

    /// Label of the state.
    pub fn as_str(&self) -> &str {
        match self {
            VmState::Running => "running",
            VmState::Stopped => "stopped",
            VmState::Paused => "paused",
            VmState::Suspended => "suspended",
            VmState::Terminated => "terminated",
            VmState::Error => "error",
            VmState::Transitional(label) => label.as_str(),
        }
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VmState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VmState::from_label(s.to_owned()))
    }
}

impl Serialize for VmState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VmState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(VmStateVisitor)
    }
}

struct VmStateVisitor;

impl Visitor<'_> for VmStateVisitor {
    type Value = VmState;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string naming a virtual machine state")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(VmState::from_label(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declared_labels_round_trip() {
        for state in VmState::DECLARED {
            assert_eq!(VmState::from_label(state.to_string()), state);
            assert!(!state.is_transitional());
        }
    }

    #[test]
    fn test_unknown_label_is_transitional() {
        let state = VmState::from_label("pending");
        assert!(matches!(&state, VmState::Transitional(label) if label.as_str() == "pending"));
        assert!(state.is_transitional());
        assert_eq!(state.to_string(), "pending");
    }

    #[test]
    fn test_label_is_case_insensitive() {
        assert_eq!(VmState::from_label("RUNNING"), VmState::Running);
        let state: VmState = " Suspended".parse().unwrap();
        assert_eq!(state, VmState::Suspended);
    }

    #[test]
    fn test_deserialize_state() -> Result<(), serde_json::Error> {
        let state: VmState = serde_json::from_value(json!("paused"))?;
        assert_eq!(state, VmState::Paused);

        let state: VmState = serde_json::from_value(json!("rebooting"))?;
        assert!(state.is_transitional());
        Ok(())
    }

    #[test]
    fn test_serialize_state() {
        assert_eq!(serde_json::to_value(VmState::Error).unwrap(), json!("error"));
        assert_eq!(
            serde_json::to_value(VmState::from_label("stopping")).unwrap(),
            json!("stopping")
        );
    }

    #[test]
    fn test_transitional_round_trip_stays_transitional() -> Result<(), serde_json::Error> {
        for label in ["pending", "Stopping", "rebooting", "", "RUNNING-ish"] {
            let state = VmState::from_label(label);
            assert!(state.is_transitional(), "{label:?}");

            let back: VmState = serde_json::from_str(&serde_json::to_string(&state)?)?;
            assert_eq!(back, state);
            assert!(back.is_transitional());
        }
        Ok(())
    }

    #[test]
    fn test_declared_label_never_transitional() {
        for label in ["running", " Stopped ", "PAUSED", "suspended", "Terminated", "error"] {
            assert!(!VmState::from_label(label).is_transitional(), "{label:?}");
        }
    }

    #[test]
    fn test_deserialize_non_string_fails() {
        let result: Result<VmState, _> = serde_json::from_value(json!(3));
        assert!(result.is_err());
    }
}
