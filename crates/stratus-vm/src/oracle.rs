//! Transition legality for lifecycle operations.
//!
//! Every verdict is a pure function of `(operation, state, flags)`:
//!
//! | Operation | Flag gate | Rule on source state |
//! |-----------|-----------|----------------------|
//! | Alter | - | only `Running`, `Stopped` |
//! | Clone | - | never |
//! | Pause | pause/unpause | not `Paused`, `Error`, `Suspended` |
//! | Unpause | pause/unpause | only `Paused` |
//! | Reboot | - | not `Error`, `Paused`, `Suspended` |
//! | Resume | suspend/resume | only `Suspended` |
//! | Start | start/stop | not `Running`, `Error`, `Suspended`, `Paused` |
//! | Stop | start/stop | not `Stopped`, `Error`, `Suspended`, `Paused` |
//! | Suspend | suspend/resume | not `Suspended`, `Error`, `Paused` |
//! | Terminate | - | not `Terminated` |
//!
//! Transitional states permit nothing. Each rule matches every state
//! explicitly, so a new [`VmState`] variant does not compile until every
//! operation has decided what to do with it.

use crate::{BackendCapabilityFlags, Operation, VmState};

/// Decide whether `op` may be invoked on an instance currently in `from`.
///
/// A false flag gate short-circuits before the state is looked at.
pub fn can_perform(op: Operation, from: &VmState, flags: BackendCapabilityFlags) -> bool {
    if !flags.supports(op) {
        return false;
    }
    state_admits(op, from)
}

fn state_admits(op: Operation, from: &VmState) -> bool {
    match op {
        Operation::Alter => alter_from(from),
        Operation::Clone => clone_from(from),
        Operation::Pause => pause_from(from),
        Operation::Unpause => unpause_from(from),
        Operation::Reboot => reboot_from(from),
        Operation::Resume => resume_from(from),
        Operation::Start => start_from(from),
        Operation::Stop => stop_from(from),
        Operation::Suspend => suspend_from(from),
        Operation::Terminate => terminate_from(from),
    }
}

// Alter is the only rule written as an allow-list.
fn alter_from(from: &VmState) -> bool {
    match from {
        VmState::Running | VmState::Stopped => true,
        VmState::Paused
        | VmState::Suspended
        | VmState::Terminated
        | VmState::Error
        | VmState::Transitional(_) => false,
    }
}

fn clone_from(from: &VmState) -> bool {
    match from {
        VmState::Running
        | VmState::Stopped
        | VmState::Paused
        | VmState::Suspended
        | VmState::Terminated
        | VmState::Error
        | VmState::Transitional(_) => false,
    }
}

fn pause_from(from: &VmState) -> bool {
    match from {
        VmState::Paused | VmState::Error | VmState::Suspended => false,
        VmState::Running | VmState::Stopped | VmState::Terminated => true,
        VmState::Transitional(_) => false,
    }
}

fn unpause_from(from: &VmState) -> bool {
    match from {
        VmState::Paused => true,
        VmState::Running
        | VmState::Stopped
        | VmState::Suspended
        | VmState::Terminated
        | VmState::Error
        | VmState::Transitional(_) => false,
    }
}

fn reboot_from(from: &VmState) -> bool {
    match from {
        VmState::Error | VmState::Paused | VmState::Suspended => false,
        VmState::Running | VmState::Stopped | VmState::Terminated => true,
        VmState::Transitional(_) => false,
    }
}

fn resume_from(from: &VmState) -> bool {
    match from {
        VmState::Suspended => true,
        VmState::Running
        | VmState::Stopped
        | VmState::Paused
        | VmState::Terminated
        | VmState::Error
        | VmState::Transitional(_) => false,
    }
}

fn start_from(from: &VmState) -> bool {
    match from {
        VmState::Running | VmState::Error | VmState::Suspended | VmState::Paused => false,
        VmState::Stopped | VmState::Terminated => true,
        VmState::Transitional(_) => false,
    }
}

fn stop_from(from: &VmState) -> bool {
    match from {
        VmState::Stopped | VmState::Error | VmState::Suspended | VmState::Paused => false,
        VmState::Running | VmState::Terminated => true,
        VmState::Transitional(_) => false,
    }
}

fn suspend_from(from: &VmState) -> bool {
    match from {
        VmState::Suspended | VmState::Error | VmState::Paused => false,
        VmState::Running | VmState::Stopped | VmState::Terminated => true,
        VmState::Transitional(_) => false,
    }
}

fn terminate_from(from: &VmState) -> bool {
    match from {
        VmState::Terminated => false,
        VmState::Running
        | VmState::Stopped
        | VmState::Paused
        | VmState::Suspended
        | VmState::Error => true,
        VmState::Transitional(_) => false,
    }
}

/// Decision surface bound to one backend's capability flags.
///
/// Holds no instance state. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleCapabilityOracle {
    flags: BackendCapabilityFlags,
}

impl LifecycleCapabilityOracle {
    /// Bind the oracle to resolved backend flags.
    pub const fn new(flags: BackendCapabilityFlags) -> Self {
        Self { flags }
    }

    /// The flags this oracle decides with.
    pub const fn flags(&self) -> BackendCapabilityFlags {
        self.flags
    }

    /// Whether the backend supports pause/unpause at all.
    pub const fn supports_pause_unpause(&self) -> bool {
        self.flags.supports_pause_unpause
    }

    /// Whether the backend supports start/stop at all.
    pub const fn supports_start_stop(&self) -> bool {
        self.flags.supports_start_stop
    }

    /// Whether the backend supports suspend/resume at all.
    pub const fn supports_suspend_resume(&self) -> bool {
        self.flags.supports_suspend_resume
    }

    /// Static precondition for `op`, ignoring state.
    pub const fn supports(&self, op: Operation) -> bool {
        self.flags.supports(op)
    }

    /// Whether `op` is permitted from `from`.
    pub fn can_perform(&self, op: Operation, from: &VmState) -> bool {
        can_perform(op, from, self.flags)
    }

    /// Whether the instance can be altered in place from `from`.
    pub fn can_alter(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Alter, from)
    }

    /// Whether the instance can be cloned from `from`.
    pub fn can_clone(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Clone, from)
    }

    /// Whether the instance can be paused from `from`.
    pub fn can_pause(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Pause, from)
    }

    /// Whether the instance can be unpaused from `from`.
    pub fn can_unpause(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Unpause, from)
    }

    /// Whether the instance can be rebooted from `from`.
    pub fn can_reboot(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Reboot, from)
    }

    /// Whether the instance can be resumed from `from`.
    pub fn can_resume(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Resume, from)
    }

    /// Whether the instance can be started from `from`.
    pub fn can_start(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Start, from)
    }

    /// Whether the instance can be stopped from `from`.
    pub fn can_stop(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Stop, from)
    }

    /// Whether the instance can be suspended from `from`.
    pub fn can_suspend(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Suspend, from)
    }

    /// Whether the instance can be terminated from `from`.
    pub fn can_terminate(&self, from: &VmState) -> bool {
        self.can_perform(Operation::Terminate, from)
    }
}
