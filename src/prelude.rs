//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stepwise::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Pipeline data model
pub use crate::core::pipeline::{Cursor, PhaseKey, PipelineDescriptor, SlotIndex, SystemKey};

// Stepping controller
pub use crate::core::stepping::{SteppingController, SteppingState};

// Command boundary
pub use crate::core::command::{
    apply_command, command_channel, CommandMapper, CommandQueue, CommandSender, KeyCode, KeyPress,
    Modifiers, SteppingCommand,
};

// Overlay
pub use crate::core::overlay::{hint, SteppingHud};

// Host-loop driver
pub use crate::core::driver::PipelineDriver;
