//! Validated transitions for lifecycle enums.

use std::fmt::Debug;

use super::{DomainError, ErrorCode};

/// A lifecycle enum whose moves are listed in `valid_transitions`.
///
/// ```ignore
/// let next = GuardPhase::Auth.transition_to(GuardPhase::App)?;
/// ```
pub trait StateMachine: Copy + PartialEq + Debug {
    /// Targets reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Override when a `matches!` table is cheaper than building the list.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if !self.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{:?} cannot move to {:?}", self, target),
            )
            .with_detail("from", format!("{:?}", self))
            .with_detail("to", format!("{:?}", target)));
        }
        Ok(target)
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
