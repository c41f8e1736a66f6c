//! Backend-wide static capability flags.

use crate::Operation;
use serde::{Deserialize, Serialize};

/// What the compute backend supports, independent of any instance.
///
/// These are constants for the lifetime of a session. The oracle reads
/// them as plain input and never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BackendCapabilityFlags {
    /// Backend can pause and unpause instances.
    pub supports_pause_unpause: bool,
    /// Backend can start and stop instances.
    pub supports_start_stop: bool,
    /// Backend can suspend and resume instances.
    pub supports_suspend_resume: bool,
}

impl BackendCapabilityFlags {
    /// Create a flag set.
    pub const fn new(
        supports_pause_unpause: bool,
        supports_start_stop: bool,
        supports_suspend_resume: bool,
    ) -> Self {
        Self {
            supports_pause_unpause,
            supports_start_stop,
            supports_suspend_resume,
        }
    }

    /// Every capability enabled.
    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    /// Every capability disabled.
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Static precondition for `op`.
    ///
    /// Alter, Clone, Reboot and Terminate carry no flag gate and always
    /// pass here; Clone is refused later by its state rule.
    pub const fn supports(&self, op: Operation) -> bool {
        match op {
            Operation::Pause | Operation::Unpause => self.supports_pause_unpause,
            Operation::Start | Operation::Stop => self.supports_start_stop,
            Operation::Suspend | Operation::Resume => self.supports_suspend_resume,
            Operation::Alter | Operation::Clone | Operation::Reboot | Operation::Terminate => true,
        }
    }
}
