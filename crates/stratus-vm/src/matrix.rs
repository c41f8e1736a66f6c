//! Full verdict table for one set of backend flags.

use crate::{can_perform, BackendCapabilityFlags, Operation, VmState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdicts for every operation from a single source state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRow {
    pub state: VmState,
    pub permitted: BTreeMap<Operation, bool>,
}

/// Every declared state crossed with every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    pub flags: BackendCapabilityFlags,
    pub rows: Vec<TransitionRow>,
}

impl TransitionMatrix {
    /// Evaluate the table for `flags`.
    pub fn evaluate(flags: BackendCapabilityFlags) -> Self {
        let rows = VmState::DECLARED
            .into_iter()
            .map(|state| {
                let permitted = Operation::ALL
                    .into_iter()
                    .map(|op| (op, can_perform(op, &state, flags)))
                    .collect();
                TransitionRow { state, permitted }
            })
            .collect();

        Self { flags, rows }
    }

    /// Verdict for `op` from `state`, or `None` if the state has no row.
    pub fn is_permitted(&self, op: Operation, state: &VmState) -> Option<bool> {
        self.row(state)
            .and_then(|row| row.permitted.get(&op).copied())
    }

    /// Operations permitted from `state`, in declaration order.
    pub fn permitted_operations(&self, state: &VmState) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.is_permitted(*op, state) == Some(true))
            .collect()
    }

    fn row(&self, state: &VmState) -> Option<&TransitionRow> {
        self.rows.iter().find(|row| &row.state == state)
    }
}
