//=========================================================================
// Command Boundary
//=========================================================================
//
// Discrete operator commands and the plumbing that delivers them.
//
// Architecture:
//   KeyPress → CommandMapper → SteppingCommand → CommandQueue → controller
//
// The stepping core does not interpret raw input devices: the host's
// input layer produces `KeyPress` values, the mapper turns them into
// commands, and the queue holds them until the driver drains it at the
// next tick boundary.
//
//=========================================================================

//=== Module Declarations =================================================

mod keys;
mod mapper;
mod queue;

//=== Public API ==========================================================

pub use keys::{KeyCode, KeyPress, Modifiers};
pub use mapper::CommandMapper;
pub use queue::{apply_command, command_channel, CommandQueue, CommandSender};

//=== SteppingCommand =====================================================

/// Operator command for the stepping controller.
///
/// Commands arrive from an external input-mapping layer and are applied
/// only between ticks (see `CommandQueue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteppingCommand {
    /// Toggle stepping on or off.
    Toggle,

    /// Run exactly one more system, then re-suspend.
    StepOne,

    /// Run all remaining systems of the current tick.
    ContinueFrame,

    /// Log the controller's current state for inspection.
    DumpState,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Commands are cheap Copy values.
    #[test]
    fn command_is_copy() {
        let command = SteppingCommand::StepOne;
        let copied = command;
        assert_eq!(command, copied);
    }

    /// Commands are usable as hash map keys for binding tables.
    #[test]
    fn command_is_hashable() {
        let mut set = HashSet::new();
        set.insert(SteppingCommand::Toggle);
        set.insert(SteppingCommand::Toggle);
        set.insert(SteppingCommand::StepOne);

        assert_eq!(set.len(), 2);
    }
}
