//=========================================================================
// Stepping HUD
//=========================================================================
//
// Thin text renderer for the stepping controller's cursor.
//
// Output shape, one row per slot in executor order:
//
//   Update
//   ->  movement
//       collisions
//   Render
//       draw_sprites
//
// How the host displays the string (terminal, UI text node, log line)
// is its own business; this module only formats.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Write;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::pipeline::{PhaseKey, SystemKey};
use crate::core::stepping::SteppingController;

//=== Operator Hint =======================================================

/// One-line key-binding hint for the operator, matching the default
/// command bindings.
pub fn hint() -> &'static str {
    "Press ` to toggle stepping mode (S: step system, Space: step frame)"
}

//=== SteppingHud =========================================================

/// Formats the pipeline listing with a marker at the cursor row.
///
/// Purely a consumer of the controller's read-only snapshot; constructing
/// or dropping a hud has no effect on stepping behavior.
pub struct SteppingHud {
    marker: &'static str,
    blank: &'static str,
}

impl SteppingHud {
    //--- Construction -----------------------------------------------------

    /// Creates a hud with the standard `-> ` marker.
    pub fn new() -> Self {
        Self {
            marker: "->  ",
            blank: "    ",
        }
    }

    /// Logs the operator hint. Call once at startup.
    pub fn log_hint(&self) {
        info!("{}", hint());
    }

    //--- Rendering --------------------------------------------------------

    /// Renders the listing for the current tick.
    ///
    /// Returns `None` while stepping is disabled (overlay hidden).
    /// Otherwise one header line per phase and one marked or blank row
    /// per system, in pipeline order.
    pub fn render<P: PhaseKey, S: SystemKey>(
        &self,
        controller: &SteppingController<P, S>,
    ) -> Option<String> {
        if !controller.is_enabled() {
            return None;
        }

        let cursor = controller.cursor_snapshot();
        let mut out = String::new();

        for (phase, systems) in controller.pipeline().phases() {
            let _ = writeln!(out, "{:?}", phase);
            for &system in systems {
                let mark = if cursor == Some((phase, system)) {
                    self.marker
                } else {
                    self.blank
                };
                let _ = writeln!(out, "{}{:?}", mark, system);
            }
        }

        Some(out)
    }
}

impl Default for SteppingHud {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::PipelineDescriptor;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestPhase {
        Update,
        Render,
    }

    impl PhaseKey for TestPhase {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestSystem {
        Movement,
        Collisions,
        Draw,
    }

    impl SystemKey for TestSystem {}

    fn controller() -> SteppingController<TestPhase, TestSystem> {
        SteppingController::new(
            PipelineDescriptor::new()
                .add_phase(TestPhase::Update, [TestSystem::Movement, TestSystem::Collisions])
                .add_phase(TestPhase::Render, [TestSystem::Draw]),
        )
    }

    /// Hidden while stepping is disabled.
    #[test]
    fn render_hidden_while_disabled() {
        let hud = SteppingHud::new();
        let stepping = controller();
        assert_eq!(hud.render(&stepping), None);
    }

    /// Enabled: every phase and system appears, marker on the cursor.
    #[test]
    fn render_marks_cursor_row() {
        let hud = SteppingHud::new();
        let mut stepping = controller();
        stepping.enable();

        let text = hud.render(&stepping).unwrap();

        assert!(text.contains("Update"));
        assert!(text.contains("Render"));
        assert!(text.contains("->  Movement"));
        assert!(text.contains("    Collisions"));
        assert!(text.contains("    Draw"));
    }

    /// The marker follows the cursor as systems are stepped.
    #[test]
    fn marker_follows_cursor() {
        let hud = SteppingHud::new();
        let mut stepping = controller();
        stepping.enable();

        stepping.step_frame();
        assert!(stepping.should_run(TestPhase::Update, TestSystem::Movement));

        let text = hud.render(&stepping).unwrap();
        assert!(text.contains("    Movement"));
        assert!(text.contains("->  Collisions"));
    }

    /// Rendering does not mutate the controller.
    #[test]
    fn render_is_read_only() {
        let hud = SteppingHud::new();
        let mut stepping = controller();
        stepping.enable();
        stepping.step_frame();

        let before = stepping.cursor_snapshot();
        let _ = hud.render(&stepping);
        let _ = hud.render(&stepping);

        assert_eq!(stepping.cursor_snapshot(), before);
        assert!(stepping.should_run(TestPhase::Update, TestSystem::Movement));
    }

    /// The hint names the default bindings.
    #[test]
    fn hint_mentions_default_keys() {
        let text = hint();
        assert!(text.contains('`'));
        assert!(text.contains('S'));
        assert!(text.contains("Space"));
    }
}
