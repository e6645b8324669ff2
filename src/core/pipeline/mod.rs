//=========================================================================
// Pipeline Model
//=========================================================================
//
// Data model for the host's system pipeline.
//
// Architecture:
//   PipelineDescriptor
//     ├─ phases: Vec<(P, Vec<S>)>            (execution order)
//     └─ positions: HashMap<(P, S), SlotIndex>
//   Cursor
//     ├─ pos: Option<SlotIndex>              (None = start of next tick)
//     └─ tick: u64
//
// The descriptor is supplied by the host and treated as opaque ordering
// data; the cursor is owned by the stepping controller and points at the
// next system eligible to run.
//
//=========================================================================

//=== Module Declarations =================================================

mod cursor;
mod descriptor;

//=== Public API ==========================================================

pub use cursor::Cursor;
pub use descriptor::{PhaseKey, PipelineDescriptor, SlotIndex, SystemKey};
