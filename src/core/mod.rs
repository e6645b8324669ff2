//=========================================================================
// Core Subsystems
//
// Internal subsystems of the stepping debug layer.
//
// Responsibilities:
// - Model the host's pipeline as opaque ordering data (`pipeline`)
// - Gate per-slot execution while stepping is active (`stepping`)
// - Carry operator commands across the tick boundary (`command`)
// - Present cursor state as text (`overlay`)
// - Glue it all to the host's frame loop (`driver`)
//
// Notes:
// Dependency direction is strictly downward: overlay and driver sit on
// top of stepping, stepping sits on pipeline, and command touches
// stepping only to apply drained commands. Nothing in here owns a
// thread or a global resource; the host decides where each piece lives.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod command;
pub mod driver;
pub mod overlay;
pub mod pipeline;
pub mod stepping;
