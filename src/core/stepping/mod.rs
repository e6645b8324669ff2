//=========================================================================
// Stepping System
//=========================================================================
//
// Debug layer that freezes, single-steps, and resumes a fixed-order
// system pipeline without altering its steady-state behavior when
// disabled.
//
// Architecture:
//   SteppingController
//     ├─ pipeline: PipelineDescriptor  (host-supplied layout)
//     ├─ cursor: Cursor                (next system eligible to run)
//     └─ state: SteppingState          (Disabled / Waiting / ...)
//
// Flow:
//   commands (enable / step / continue) between ticks
//   should_run(phase, system) per slot, in pipeline order
//
//=========================================================================

//=== Module Declarations =================================================

mod controller;
mod state;

//=== Public API ==========================================================

pub use controller::SteppingController;
pub use state::SteppingState;
