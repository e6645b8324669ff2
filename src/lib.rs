//=========================================================================
// Stepwise — Library Root
//
// This crate defines the public API surface of Stepwise, a stepping
// debug controller for fixed-order system pipelines.
//
// Responsibilities:
// - Expose the stepping controller and the pipeline data model
// - Provide the command boundary (key mapping, cross-thread queue)
// - Provide the optional text overlay and the host-loop driver
//
// The controller sits above an ordered pipeline of executable units
// ("systems") grouped into named phases ("schedules") and lets an
// operator freeze, single-step, and resume that pipeline. When
// disabled it is invisible: every system runs and nothing is tracked.
//
// Typical usage:
// ```no_run
// use stepwise::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Phase { Update }
// impl PhaseKey for Phase {}
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Sys { Movement, Collisions }
// impl SystemKey for Sys {}
//
// fn main() {
//     let pipeline = PipelineDescriptor::new()
//         .add_phase(Phase::Update, [Sys::Movement, Sys::Collisions]);
//     let (mut driver, commands) = PipelineDriver::new(pipeline);
//
//     loop {
//         // input layer: commands.send(SteppingCommand::Toggle) etc.
//         driver.run_tick(|phase, system| {
//             // dispatch the system body for (phase, system)
//             let _ = (phase, system);
//         });
//     }
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all subsystems (pipeline model, stepping controller,
// command boundary, overlay, driver). It is exposed publicly for
// fine-grained imports, but most hosts will use the `prelude`.
//
pub mod core;

//--- Prelude -------------------------------------------------------------
//
// Re-exports the commonly used types so hosts can
// `use stepwise::prelude::*;` without learning the module layout.
//
pub mod prelude;
