//=========================================================================
// Pipeline Descriptor
//=========================================================================
//
// Immutable-per-tick description of the host's system pipeline: named
// phases, each an ordered sequence of identified system slots.
//
// Architecture:
//   host config → add_phase() → Vec<(P, Vec<S>)>  (execution order)
//                                     ↓
//                      HashMap<(P, S), SlotIndex>  (O(1) slot lookup)
//
// The descriptor never schedules anything itself. It is opaque ordering
// data: the stepping controller reads positions out of it, the overlay
// reads names out of it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

//=== Key Traits ==========================================================

/// Marker trait for phase identifiers.
///
/// A phase names an ordered group of systems executed together within one
/// tick (e.g. "Update", "PostUpdate"). Typically implemented by a
/// host-specific enum.
///
/// # Example
///
/// ```
/// use stepwise::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Phase { Update, Render }
///
/// impl PhaseKey for Phase {}
/// ```
pub trait PhaseKey: Copy + Eq + Hash + Debug + Send + 'static {}

/// Marker trait for system slot identifiers.
///
/// A system key names one unit of work within a phase. Keys are unique
/// only within their phase; two phases may reuse the same key for
/// unrelated systems.
pub trait SystemKey: Copy + Eq + Hash + Debug + Send + 'static {}

//=== SlotIndex ===========================================================

/// Position of one system slot in pipeline order.
///
/// Ordered by phase first, then by system within the phase, which is
/// exactly the order the host executes slots in. This is the internal
/// currency for cursor arithmetic; public APIs speak in `(P, S)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex {
    /// Index of the phase in the descriptor's phase order.
    pub phase: usize,

    /// Index of the system within its phase.
    pub system: usize,
}

//=== PipelineDescriptor ==================================================

/// Ordered description of phases and their system slots.
///
/// Supplied by the host at configuration time and held by the stepping
/// controller for one reconfiguration epoch. The descriptor is plain
/// data: no reflection, no runtime type tagging, no scheduling logic.
///
/// Slot lookup is O(1) via a precomputed position map, so the per-slot
/// `should_run` gate never scans the phase lists.
///
/// # Invariants
///
/// - Phase ids are unique across the descriptor.
/// - System ids are unique within their phase.
///
/// Violating either on `add_phase` is a configuration bug in the host
/// and panics immediately rather than desynchronizing the cursor later.
pub struct PipelineDescriptor<P: PhaseKey, S: SystemKey> {
    /// Phases in execution order, each with its systems in execution order.
    phases: Vec<(P, Vec<S>)>,

    /// Precomputed (phase, system) → position lookup.
    positions: HashMap<(P, S), SlotIndex>,
}

impl<P: PhaseKey, S: SystemKey> PipelineDescriptor<P, S> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Appends a phase and its ordered system slots.
    ///
    /// Phases are executed in insertion order. An empty system list is
    /// allowed; the slot iteration simply skips the phase.
    ///
    /// # Panics
    ///
    /// Panics if `phase` was already added, or if `systems` contains a
    /// duplicate id. Both indicate host misconfiguration.
    pub fn add_phase(mut self, phase: P, systems: impl IntoIterator<Item = S>) -> Self {
        if self.phases.iter().any(|(p, _)| *p == phase) {
            panic!("phase {:?} added twice to pipeline descriptor", phase);
        }

        let phase_idx = self.phases.len();
        let mut slots = Vec::new();

        for system in systems {
            let index = SlotIndex {
                phase: phase_idx,
                system: slots.len(),
            };
            if self.positions.insert((phase, system), index).is_some() {
                panic!("system {:?} added twice to phase {:?}", system, phase);
            }
            slots.push(system);
        }

        self.phases.push((phase, slots));
        self
    }

    //--- Slot Lookup ------------------------------------------------------

    /// Returns the pipeline position of `(phase, system)`, if it exists.
    pub fn position_of(&self, phase: P, system: S) -> Option<SlotIndex> {
        self.positions.get(&(phase, system)).copied()
    }

    /// Returns the `(P, S)` ids at `index`, if the index is valid.
    pub fn slot_ids(&self, index: SlotIndex) -> Option<(P, S)> {
        let (phase, systems) = self.phases.get(index.phase)?;
        let system = systems.get(index.system)?;
        Some((*phase, *system))
    }

    /// Returns the first real slot of the pipeline.
    ///
    /// Skips leading empty phases. `None` if no phase has any systems.
    pub fn first_slot(&self) -> Option<SlotIndex> {
        self.phases
            .iter()
            .position(|(_, systems)| !systems.is_empty())
            .map(|phase| SlotIndex { phase, system: 0 })
    }

    /// Returns the slot after `index` in pipeline order.
    ///
    /// Crosses phase boundaries, skipping empty phases. `None` when
    /// `index` is the last slot of the pipeline.
    pub fn next_slot(&self, index: SlotIndex) -> Option<SlotIndex> {
        let (_, systems) = self.phases.get(index.phase)?;

        // Next system within the same phase
        if index.system + 1 < systems.len() {
            return Some(SlotIndex {
                phase: index.phase,
                system: index.system + 1,
            });
        }

        // First system of the next non-empty phase
        self.phases
            .iter()
            .enumerate()
            .skip(index.phase + 1)
            .find(|(_, (_, systems))| !systems.is_empty())
            .map(|(phase, _)| SlotIndex { phase, system: 0 })
    }

    //--- Queries ----------------------------------------------------------

    /// Iterates phases in execution order.
    pub fn phases(&self) -> impl Iterator<Item = (P, &[S])> + '_ {
        self.phases.iter().map(|(p, systems)| (*p, systems.as_slice()))
    }

    /// Iterates every slot in pipeline order.
    pub fn slots(&self) -> impl Iterator<Item = (P, S)> + '_ {
        self.phases
            .iter()
            .flat_map(|(p, systems)| systems.iter().map(move |s| (*p, *s)))
    }

    /// Total number of system slots across all phases.
    pub fn slot_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no phase has any systems.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<P: PhaseKey, S: SystemKey> Default for PipelineDescriptor<P, S> {
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

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestPhase {
        Update,
        Render,
        Cleanup,
    }

    impl PhaseKey for TestPhase {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestSystem {
        A,
        B,
        C,
    }

    impl SystemKey for TestSystem {}

    fn two_phase() -> PipelineDescriptor<TestPhase, TestSystem> {
        PipelineDescriptor::new()
            .add_phase(TestPhase::Update, [TestSystem::A, TestSystem::B])
            .add_phase(TestPhase::Render, [TestSystem::C])
    }

    //--- Construction -----------------------------------------------------

    /// A freshly created descriptor has no slots.
    #[test]
    fn new_descriptor_is_empty() {
        let desc = PipelineDescriptor::<TestPhase, TestSystem>::new();
        assert!(desc.is_empty());
        assert_eq!(desc.slot_count(), 0);
        assert_eq!(desc.first_slot(), None);
    }

    /// Slot count spans all phases.
    #[test]
    fn slot_count_spans_phases() {
        let desc = two_phase();
        assert_eq!(desc.slot_count(), 3);
        assert!(!desc.is_empty());
    }

    /// Duplicate phase ids are a configuration bug.
    #[test]
    #[should_panic(expected = "added twice")]
    fn duplicate_phase_panics() {
        let _ = PipelineDescriptor::new()
            .add_phase(TestPhase::Update, [TestSystem::A])
            .add_phase(TestPhase::Update, [TestSystem::B]);
    }

    /// Duplicate system ids within one phase are a configuration bug.
    #[test]
    #[should_panic(expected = "added twice")]
    fn duplicate_system_in_phase_panics() {
        let _ = PipelineDescriptor::new()
            .add_phase(TestPhase::Update, [TestSystem::A, TestSystem::A]);
    }

    /// The same system id in different phases is allowed.
    #[test]
    fn same_system_id_in_different_phases() {
        let desc = PipelineDescriptor::new()
            .add_phase(TestPhase::Update, [TestSystem::A])
            .add_phase(TestPhase::Render, [TestSystem::A]);

        assert_eq!(desc.slot_count(), 2);
        assert_ne!(
            desc.position_of(TestPhase::Update, TestSystem::A),
            desc.position_of(TestPhase::Render, TestSystem::A),
        );
    }

    //--- Slot Lookup ------------------------------------------------------

    /// Positions reflect pipeline order.
    #[test]
    fn position_of_known_slots() {
        let desc = two_phase();

        assert_eq!(
            desc.position_of(TestPhase::Update, TestSystem::A),
            Some(SlotIndex { phase: 0, system: 0 }),
        );
        assert_eq!(
            desc.position_of(TestPhase::Update, TestSystem::B),
            Some(SlotIndex { phase: 0, system: 1 }),
        );
        assert_eq!(
            desc.position_of(TestPhase::Render, TestSystem::C),
            Some(SlotIndex { phase: 1, system: 0 }),
        );
    }

    /// Unknown slots resolve to None.
    #[test]
    fn position_of_unknown_slot_is_none() {
        let desc = two_phase();
        assert_eq!(desc.position_of(TestPhase::Render, TestSystem::A), None);
        assert_eq!(desc.position_of(TestPhase::Cleanup, TestSystem::A), None);
    }

    /// slot_ids is the inverse of position_of.
    #[test]
    fn slot_ids_roundtrip() {
        let desc = two_phase();
        let index = desc.position_of(TestPhase::Update, TestSystem::B).unwrap();
        assert_eq!(desc.slot_ids(index), Some((TestPhase::Update, TestSystem::B)));
    }

    /// Out-of-range indices resolve to None.
    #[test]
    fn slot_ids_out_of_range() {
        let desc = two_phase();
        assert_eq!(desc.slot_ids(SlotIndex { phase: 9, system: 0 }), None);
        assert_eq!(desc.slot_ids(SlotIndex { phase: 0, system: 9 }), None);
    }

    //--- Ordering ---------------------------------------------------------

    /// SlotIndex orders by phase first, then system.
    #[test]
    fn slot_index_ordering() {
        let early = SlotIndex { phase: 0, system: 5 };
        let late = SlotIndex { phase: 1, system: 0 };
        assert!(early < late);

        let a = SlotIndex { phase: 0, system: 0 };
        let b = SlotIndex { phase: 0, system: 1 };
        assert!(a < b);
    }

    /// next_slot walks within a phase, then across the boundary.
    #[test]
    fn next_slot_crosses_phase_boundary() {
        let desc = two_phase();
        let a = desc.position_of(TestPhase::Update, TestSystem::A).unwrap();
        let b = desc.position_of(TestPhase::Update, TestSystem::B).unwrap();
        let c = desc.position_of(TestPhase::Render, TestSystem::C).unwrap();

        assert_eq!(desc.next_slot(a), Some(b));
        assert_eq!(desc.next_slot(b), Some(c));
        assert_eq!(desc.next_slot(c), None);
    }

    /// Empty phases are invisible to slot iteration.
    #[test]
    fn empty_phases_are_skipped() {
        let desc = PipelineDescriptor::new()
            .add_phase(TestPhase::Update, [])
            .add_phase(TestPhase::Render, [TestSystem::A])
            .add_phase(TestPhase::Cleanup, []);

        assert_eq!(desc.first_slot(), Some(SlotIndex { phase: 1, system: 0 }));
        assert_eq!(desc.next_slot(SlotIndex { phase: 1, system: 0 }), None);
        assert_eq!(desc.slot_count(), 1);
    }

    /// slots() yields every (phase, system) pair in execution order.
    #[test]
    fn slots_iterate_in_pipeline_order() {
        let desc = two_phase();
        let order: Vec<_> = desc.slots().collect();
        assert_eq!(
            order,
            vec![
                (TestPhase::Update, TestSystem::A),
                (TestPhase::Update, TestSystem::B),
                (TestPhase::Render, TestSystem::C),
            ],
        );
    }
}
