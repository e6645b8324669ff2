//=========================================================================
// Cursor
//=========================================================================
//
// Single logical position tracking which system is next to run while
// stepping is active, plus the tick counter that advances when the
// position wraps off the end of the pipeline.
//
// Position semantics:
//   None  → queued to start at the first slot of the first phase
//   Some  → a real slot in the current descriptor
//
// The cursor is a plain value owned by the stepping controller. It is
// not shared, not global, and not safe for concurrent mutation; the
// controller is the single serialization point (see driver).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::descriptor::{PhaseKey, PipelineDescriptor, SlotIndex, SystemKey};

//=== Cursor ==============================================================

/// Pointer to the next system eligible to run while stepping is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Logical position; `None` means start of the next tick.
    pos: Option<SlotIndex>,

    /// Completed full passes through the pipeline.
    tick: u64,
}

impl Cursor {
    //--- Construction -----------------------------------------------------

    /// Creates a cursor queued at the start of the pipeline, tick 0.
    pub fn new() -> Self {
        Self { pos: None, tick: 0 }
    }

    //--- Queries ----------------------------------------------------------

    /// Number of completed ticks (full passes through the pipeline).
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Resolves the logical position against a descriptor.
    ///
    /// The queued-at-start position resolves to the descriptor's first
    /// real slot. `None` only for an empty pipeline.
    pub fn resolve<P: PhaseKey, S: SystemKey>(
        &self,
        descriptor: &PipelineDescriptor<P, S>,
    ) -> Option<SlotIndex> {
        match self.pos {
            Some(index) => Some(index),
            None => descriptor.first_slot(),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Resets to the start of the pipeline without touching the tick count.
    ///
    /// Used on reconfiguration, when old positions are meaningless.
    pub fn reset(&mut self) {
        self.pos = None;
    }

    /// Advances past `slot` after the host confirmed it executed.
    ///
    /// Moves to the next slot in pipeline order. Wrapping off the last
    /// slot queues the cursor at the start and increments the tick
    /// counter. Returns true when a wrap occurred (tick boundary).
    pub fn advance_past<P: PhaseKey, S: SystemKey>(
        &mut self,
        slot: SlotIndex,
        descriptor: &PipelineDescriptor<P, S>,
    ) -> bool {
        match descriptor.next_slot(slot) {
            Some(next) => {
                self.pos = Some(next);
                false
            }
            None => {
                self.pos = None;
                self.tick += 1;
                true
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
