//=========================================================================
// Stepping Overlay
//=========================================================================
//
// Read-only presentation of stepping state as text.
//
// Flow, once per tick:
//   controller.is_enabled() / cursor_snapshot() → SteppingHud::render()
//     → phase-by-phase listing with a marker on the cursor row
//
// The overlay never mutates the controller, and the controller never
// depends on the overlay: headless operation behaves identically with
// this module unused.
//
//=========================================================================

//=== Module Declarations =================================================

mod hud;

//=== Public API ==========================================================

pub use hud::{hint, SteppingHud};
