//=========================================================================
// Stepping Controller
//=========================================================================
//
// Owns the enable/disable state, the cursor, and the per-slot decision
// of which systems may execute this tick.
//
// Control flow:
//   host, per slot, in pipeline order:
//     controller.should_run(phase, system) → bool
//       ├─ true  → host executes the system, cursor has advanced past it
//       └─ false → host skips the system this pass
//
// The controller is a plain value handed to whichever code evaluates
// the gate. No global resource, no singleton: dependency injection all
// the way down.
//
// Gate semantics while enabled: slots strictly before the cursor already
// ran this tick and are never re-run; slots at or after the cursor wait
// for a step or continue command. Stepping never silently skips a system
// the pipeline expects to run every tick — each tick completes in full
// before the cursor wraps to the next one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::pipeline::{Cursor, PhaseKey, PipelineDescriptor, SlotIndex, SystemKey};

use super::state::SteppingState;

//=== SteppingController ==================================================

/// Debug controller gating execution of a fixed-order system pipeline.
///
/// Created disabled: the gate answers true for every slot and steady-state
/// behavior is unchanged. Once enabled, the pipeline freezes at the cursor
/// and advances one system (`step_frame`) or one full tick
/// (`continue_frame`) at a time.
///
/// All commands are total over the controller's own state; commands issued
/// in a mode where they are meaningless are logged no-ops, never errors.
///
/// # Example
///
/// ```
/// use stepwise::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Phase { Update }
/// impl PhaseKey for Phase {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Sys { Input, Movement }
/// impl SystemKey for Sys {}
///
/// let pipeline = PipelineDescriptor::new()
///     .add_phase(Phase::Update, [Sys::Input, Sys::Movement]);
/// let mut stepping = SteppingController::new(pipeline);
///
/// stepping.enable();
/// stepping.step_frame();
/// assert!(stepping.should_run(Phase::Update, Sys::Input));
/// assert!(!stepping.should_run(Phase::Update, Sys::Movement));
/// ```
pub struct SteppingController<P: PhaseKey, S: SystemKey> {
    /// Pipeline layout for the current reconfiguration epoch.
    pipeline: PipelineDescriptor<P, S>,

    /// Position of the next system eligible to run while stepping.
    cursor: Cursor,

    /// Current gating mode.
    state: SteppingState,

    /// Slots that bypass stepping entirely (engine-internal systems
    /// that must run every host frame, e.g. input flush).
    always_run: HashSet<(P, S)>,
}

impl<P: PhaseKey, S: SystemKey> SteppingController<P, S> {
    //--- Construction -----------------------------------------------------

    /// Creates a disabled controller over `pipeline`.
    pub fn new(pipeline: PipelineDescriptor<P, S>) -> Self {
        Self {
            pipeline,
            cursor: Cursor::new(),
            state: SteppingState::Disabled,
            always_run: HashSet::new(),
        }
    }

    //--- Reconfiguration --------------------------------------------------

    /// Replaces the pipeline descriptor, starting a new epoch.
    ///
    /// Must only be called between ticks. Old cursor positions and
    /// always-run marks refer to the previous layout and are discarded;
    /// the cursor requeues at the start of the new pipeline.
    pub fn set_pipeline(&mut self, pipeline: PipelineDescriptor<P, S>) {
        debug!(
            "pipeline reconfigured: {} slots, cursor reset",
            pipeline.slot_count()
        );
        self.pipeline = pipeline;
        self.cursor.reset();
        self.always_run.clear();
    }

    /// Read access to the current pipeline layout (for presentation).
    pub fn pipeline(&self) -> &PipelineDescriptor<P, S> {
        &self.pipeline
    }

    /// Marks a slot to run every host frame regardless of stepping.
    ///
    /// # Panics
    ///
    /// Panics if `(phase, system)` is not in the current descriptor.
    pub fn always_run(&mut self, phase: P, system: S) {
        if self.pipeline.position_of(phase, system).is_none() {
            panic!(
                "always_run marked for unknown slot {:?}/{:?}: \
                 pipeline descriptor is out of sync with the host",
                phase, system
            );
        }
        self.always_run.insert((phase, system));
    }

    //--- Commands ---------------------------------------------------------

    /// Turns stepping on, freezing the pipeline at the cursor.
    ///
    /// Idempotent. The cursor is left where the last session stopped;
    /// if the pipeline was reconfigured since, `set_pipeline` has
    /// already requeued it at the start.
    pub fn enable(&mut self) {
        if self.state == SteppingState::Disabled {
            debug!("stepping enabled");
            self.state = SteppingState::Waiting;
        }
    }

    /// Turns stepping off; every system runs again.
    ///
    /// Idempotent. Leaves the cursor untouched so re-enabling resumes
    /// where the session left off.
    pub fn disable(&mut self) {
        if self.state != SteppingState::Disabled {
            debug!("stepping disabled");
            self.state = SteppingState::Disabled;
        }
    }

    /// Returns true while stepping is active.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Arms the controller to run exactly the cursor system, then
    /// re-suspend before the next one. No-op while disabled.
    pub fn step_frame(&mut self) {
        match self.state {
            SteppingState::Disabled => {
                debug!("step_frame ignored: stepping is disabled");
            }
            SteppingState::ContinuingFrame => {
                debug!("step_frame ignored: already continuing this tick");
            }
            SteppingState::Waiting | SteppingState::SteppingOne => {
                debug!("stepping one system");
                self.state = SteppingState::SteppingOne;
            }
        }
    }

    /// Arms the controller to run all remaining systems of the current
    /// tick, then re-arm stepping at the start of the next tick. No-op
    /// while disabled.
    pub fn continue_frame(&mut self) {
        if self.state == SteppingState::Disabled {
            debug!("continue_frame ignored: stepping is disabled");
            return;
        }
        debug!("continuing to end of tick");
        self.state = SteppingState::ContinuingFrame;
    }

    //--- Gate -------------------------------------------------------------

    /// Decides whether `(phase, system)` may execute right now.
    ///
    /// Called by the host immediately before it would run the system;
    /// a false answer means the host skips it this pass. O(1), and the
    /// only side effect is advancing the cursor past a slot that was
    /// allowed to run while stepping is enabled.
    ///
    /// # Panics
    ///
    /// Panics if the slot is not in the current descriptor. Answering
    /// either way for an unknown slot would desynchronize the cursor
    /// from the pipeline, so the mismatch surfaces immediately.
    pub fn should_run(&mut self, phase: P, system: S) -> bool {
        let Some(slot) = self.pipeline.position_of(phase, system) else {
            panic!(
                "should_run called for unknown slot {:?}/{:?}: \
                 pipeline descriptor is out of sync with the host",
                phase, system
            );
        };

        if self.state == SteppingState::Disabled {
            return true;
        }

        // position_of succeeded, so the pipeline is non-empty and the
        // cursor resolves to a real slot.
        let Some(cursor) = self.cursor.resolve(&self.pipeline) else {
            return false;
        };

        // Always-run slots bypass gating. Nudge the cursor off them so
        // it always names a steppable system.
        if self.always_run.contains(&(phase, system)) {
            if slot == cursor {
                self.advance_past(slot);
            }
            return true;
        }

        match self.state {
            SteppingState::Disabled => unreachable!("handled above"),

            // Frozen: nothing at or after the cursor runs, and slots
            // before it already ran this tick.
            SteppingState::Waiting => false,

            SteppingState::SteppingOne => {
                if slot == cursor {
                    self.advance_past(slot);
                    self.state = SteppingState::Waiting;
                    true
                } else {
                    false
                }
            }

            SteppingState::ContinuingFrame => {
                if slot >= cursor {
                    self.advance_past(slot);
                    true
                } else {
                    false
                }
            }
        }
    }

    //--- Presentation Snapshot --------------------------------------------

    /// Ids of the slot the cursor points at, for read-only display.
    ///
    /// `None` while stepping is disabled or the pipeline is empty.
    pub fn cursor_snapshot(&self) -> Option<(P, S)> {
        if !self.is_enabled() {
            return None;
        }
        let slot = self.cursor.resolve(&self.pipeline)?;
        self.pipeline.slot_ids(slot)
    }

    /// Completed full passes through the pipeline.
    pub fn tick(&self) -> u64 {
        self.cursor.tick()
    }

    /// Current gating mode.
    pub fn state(&self) -> SteppingState {
        self.state
    }

    //--- Internal Helpers -------------------------------------------------

    /// Advances the cursor past a slot that just ran; a wrap ends the
    /// tick and re-arms waiting if a continue was in flight.
    fn advance_past(&mut self, slot: SlotIndex) {
        if self.cursor.advance_past(slot, &self.pipeline) {
            debug!("tick {} complete, cursor wrapped", self.cursor.tick());
            if self.state == SteppingState::ContinuingFrame {
                self.state = SteppingState::Waiting;
            }
        }
    }
}

//=== Debug Trait ==========================================================
//
// Compact rendering for the operator's state-dump command.
//
impl<P: PhaseKey, S: SystemKey> fmt::Debug for SteppingController<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteppingController")
            .field("state", &self.state)
            .field("tick", &self.cursor.tick())
            .field("cursor", &self.cursor_snapshot())
            .field("slots", &self.pipeline.slot_count())
            .field("always_run", &self.always_run.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
