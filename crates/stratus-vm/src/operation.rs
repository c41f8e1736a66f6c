//! Lifecycle-affecting operations.

use crate::error::LifecycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An action that changes, or depends on, an instance's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Start,
    Stop,
    Reboot,
    Pause,
    Unpause,
    Suspend,
    Resume,
    Terminate,
    /// Change the instance's product/size in place.
    Alter,
    Clone,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 10] = [
        Operation::Start,
        Operation::Stop,
        Operation::Reboot,
        Operation::Pause,
        Operation::Unpause,
        Operation::Suspend,
        Operation::Resume,
        Operation::Terminate,
        Operation::Alter,
        Operation::Clone,
    ];

    /// Lowercase name of the operation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Stop => "stop",
            Operation::Reboot => "reboot",
            Operation::Pause => "pause",
            Operation::Unpause => "unpause",
            Operation::Suspend => "suspend",
            Operation::Resume => "resume",
            Operation::Terminate => "terminate",
            Operation::Alter => "alter",
            Operation::Clone => "clone",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = LifecycleError;

    /// Parse an operation name (case-insensitive).
    ///
    /// Names outside the closed set are rejected rather than coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| LifecycleError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("start".parse::<Operation>(), Ok(Operation::Start));
        assert_eq!("UNPAUSE".parse::<Operation>(), Ok(Operation::Unpause));
        assert_eq!(" Terminate ".parse::<Operation>(), Ok(Operation::Terminate));
    }

    #[test]
    fn test_parse_unknown_fails_loudly() {
        let err = "hibernate".parse::<Operation>().unwrap_err();
        assert_eq!(err, LifecycleError::UnknownOperation("hibernate".into()));
        assert_eq!(
            err.to_string(),
            "unknown lifecycle operation: \"hibernate\""
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let result: std::result::Result<Operation, _> = serde_json::from_str("\"migrate\"");
        assert!(result.is_err());
        let op: Operation = serde_json::from_str("\"suspend\"").unwrap();
        assert_eq!(op, Operation::Suspend);
    }
}
