//! The two-jug water-measuring problem.
//!
//! A classic breadth-first state space, expressed here as the unit-cost,
//! zero-heuristic special case of [`crate::search`]: every action costs 1,
//! so the engine returns a pour sequence with the fewest steps. The state is
//! just the pair of fill levels; the six actions are the usual fills,
//! empties and pours.

use crate::search::{uniform_cost_search, Solution};
use std::fmt;

/// Fill levels of the two jugs, in the same units as their capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JugState {
    pub a: u64,
    pub b: u64,
}

/// One step of the pouring procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JugAction {
    FillA,
    FillB,
    EmptyA,
    EmptyB,
    PourAToB,
    PourBToA,
}

impl fmt::Display for JugAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JugAction::FillA => "Fill jug A",
            JugAction::FillB => "Fill jug B",
            JugAction::EmptyA => "Empty jug A",
            JugAction::EmptyB => "Empty jug B",
            JugAction::PourAToB => "Pour A into B",
            JugAction::PourBToA => "Pour B into A",
        };
        write!(f, "{}", name)
    }
}

/// A water-jug instance: two jug capacities and a target amount.
#[derive(Clone, Copy, Debug)]
pub struct JugProblem {
    pub capacity_a: u64,
    pub capacity_b: u64,
    pub target: u64,
}

impl JugProblem {
    /// Creates an instance.
    ///
    /// # Returns
    /// * `Ok(JugProblem)` for positive capacities.
    /// * `Err(String)` if either capacity is zero.
    pub fn new(capacity_a: u64, capacity_b: u64, target: u64) -> Result<Self, String> {
        if capacity_a == 0 || capacity_b == 0 {
            return Err("Jug capacities must be positive".to_string());
        }
        Ok(JugProblem {
            capacity_a,
            capacity_b,
            target,
        })
    }

    /// Whether `state` measures out the target: either jug, or both
    /// together, holding exactly that amount.
    pub fn is_goal(&self, state: &JugState) -> bool {
        state.a == self.target || state.b == self.target || state.a + state.b == self.target
    }

    /// Every state reachable from `state` in one action.
    ///
    /// All six actions are always offered; no-op actions (filling a full
    /// jug, pouring into a full jug) produce the same state again, which
    /// the engine discards as already finalized.
    pub fn successors(&self, state: &JugState) -> Vec<(JugState, JugAction, u64)> {
        let JugState { a, b } = *state;
        let pour_a_to_b = (self.capacity_b - b).min(a);
        let pour_b_to_a = (self.capacity_a - a).min(b);
        vec![
            (
                JugState {
                    a: self.capacity_a,
                    b,
                },
                JugAction::FillA,
                1,
            ),
            (
                JugState {
                    a,
                    b: self.capacity_b,
                },
                JugAction::FillB,
                1,
            ),
            (JugState { a: 0, b }, JugAction::EmptyA, 1),
            (JugState { a, b: 0 }, JugAction::EmptyB, 1),
            (
                JugState {
                    a: a - pour_a_to_b,
                    b: b + pour_a_to_b,
                },
                JugAction::PourAToB,
                1,
            ),
            (
                JugState {
                    a: a + pour_b_to_a,
                    b: b - pour_b_to_a,
                },
                JugAction::PourBToA,
                1,
            ),
        ]
    }

    /// Finds a shortest pour sequence that measures the target, starting
    /// from two empty jugs.
    ///
    /// Targets larger than the combined capacity are rejected without
    /// searching. Returns `None` when the target cannot be measured (the
    /// state space is finite, so the frontier always empties).
    pub fn solve(&self) -> Option<Solution<JugState, JugAction>> {
        if self.target > self.capacity_a + self.capacity_b {
            return None;
        }
        uniform_cost_search(
            JugState { a: 0, b: 0 },
            |state| self.is_goal(state),
            |state| self.successors(state),
        )
    }
}
