//=========================================================================
// Stepping State
//=========================================================================
//
// State machine for the stepping controller.
//
// Transitions (enabled branch only):
//
//   Waiting --step_frame()-----> SteppingOne --(one slot runs)--> Waiting
//   Waiting --continue_frame()-> ContinuingFrame --(tick wraps)-> Waiting
//
// Disabled is reachable from any state via disable(), and transitions
// back to Waiting via enable().
//
//=========================================================================

//=== SteppingState =======================================================

/// Execution-gating mode of the stepping controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteppingState {
    /// Stepping is off; every system runs and the cursor never moves.
    Disabled,

    /// Stepping is on and the pipeline is frozen at the cursor.
    Waiting,

    /// Exactly one system (the cursor slot) may run, then re-suspend.
    SteppingOne,

    /// All remaining systems of the current tick may run, then re-arm
    /// at the start of the next tick.
    ContinuingFrame,
}

impl SteppingState {
    /// Returns true for any enabled sub-state.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Disabled is the only non-enabled state.
    #[test]
    fn enabled_covers_all_sub_states() {
        assert!(!SteppingState::Disabled.is_enabled());
        assert!(SteppingState::Waiting.is_enabled());
        assert!(SteppingState::SteppingOne.is_enabled());
        assert!(SteppingState::ContinuingFrame.is_enabled());
    }

    /// SteppingState is a cheap Copy value.
    #[test]
    fn state_is_copy() {
        let state = SteppingState::Waiting;
        let copied = state;
        assert_eq!(state, copied);
    }
}
