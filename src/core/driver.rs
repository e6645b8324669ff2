//=========================================================================
// Pipeline Driver
//=========================================================================
//
// Host-side glue that walks the pipeline once per host frame, gating
// every slot through the stepping controller.
//
// Each call to run_tick():
//  1. Drains queued operator commands (the only point where commands
//     touch the controller, so the cursor is never mutated mid-walk)
//  2. Walks every slot in pipeline order, asking should_run
//  3. Invokes the host's executor for each slot that may run
//
// The driver is the single serialization point for cursor mutation.
// Command senders may live on any thread; everything else here is
// single-threaded and synchronous.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::command::{command_channel, CommandQueue, CommandSender};
use crate::core::pipeline::{PhaseKey, PipelineDescriptor, SystemKey};
use crate::core::stepping::SteppingController;

//=== PipelineDriver ======================================================

/// Owns a stepping controller and its command queue, and drives one
/// gated pass over the pipeline per host frame.
///
/// The executor closure receives the `(phase, system)` ids of each slot
/// that is allowed to run and dispatches to the actual system body; the
/// driver treats those bodies as opaque.
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
/// enum Sys { Movement, Collisions }
/// impl SystemKey for Sys {}
///
/// let pipeline = PipelineDescriptor::new()
///     .add_phase(Phase::Update, [Sys::Movement, Sys::Collisions]);
/// let (mut driver, commands) = PipelineDriver::new(pipeline);
///
/// // Steady state: everything runs.
/// let ran = driver.run_tick(|_phase, _system| { /* dispatch */ });
/// assert_eq!(ran, 2);
///
/// // Frozen once the toggle command lands.
/// commands.send(SteppingCommand::Toggle);
/// assert_eq!(driver.run_tick(|_, _| {}), 0);
/// ```
pub struct PipelineDriver<P: PhaseKey, S: SystemKey> {
    controller: SteppingController<P, S>,
    commands: CommandQueue,

    /// Slot walk order, cached per epoch to keep run_tick allocation-free.
    slot_order: Vec<(P, S)>,
}

impl<P: PhaseKey, S: SystemKey> PipelineDriver<P, S> {
    //--- Construction -----------------------------------------------------

    /// Creates a driver over `pipeline` with stepping disabled, plus the
    /// sender half of its command channel for the input layer.
    pub fn new(pipeline: PipelineDescriptor<P, S>) -> (Self, CommandSender) {
        let (sender, commands) = command_channel();
        let controller = SteppingController::new(pipeline);
        let slot_order = controller.pipeline().slots().collect();

        (
            Self {
                controller,
                commands,
                slot_order,
            },
            sender,
        )
    }

    //--- Tick Loop --------------------------------------------------------

    /// Runs one gated pass over the pipeline.
    ///
    /// Drains pending commands first, then walks every slot in pipeline
    /// order, calling `exec` for each slot the controller allows.
    /// Returns the number of systems executed this pass.
    pub fn run_tick(&mut self, mut exec: impl FnMut(P, S)) -> usize {
        self.commands.drain_into(&mut self.controller);

        let mut ran = 0;
        for &(phase, system) in &self.slot_order {
            if self.controller.should_run(phase, system) {
                exec(phase, system);
                ran += 1;
            }
        }
        ran
    }

    //--- Reconfiguration --------------------------------------------------

    /// Replaces the pipeline between ticks; the cursor resets to the
    /// start of the new layout.
    pub fn reconfigure(&mut self, pipeline: PipelineDescriptor<P, S>) {
        self.controller.set_pipeline(pipeline);
        self.slot_order = self.controller.pipeline().slots().collect();
    }

    //--- Accessors --------------------------------------------------------

    /// Read access to the controller (presentation, queries).
    pub fn controller(&self) -> &SteppingController<P, S> {
        &self.controller
    }

    /// Mutable access for between-tick configuration such as marking
    /// always-run slots.
    pub fn controller_mut(&mut self) -> &mut SteppingController<P, S> {
        &mut self.controller
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::SteppingCommand;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestPhase {
        Update,
        Render,
    }

    impl PhaseKey for TestPhase {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestSystem {
        A,
        B,
        C,
    }

    impl SystemKey for TestSystem {}

    use TestPhase::*;
    use TestSystem::*;

    fn driver() -> (PipelineDriver<TestPhase, TestSystem>, CommandSender) {
        PipelineDriver::new(
            PipelineDescriptor::new()
                .add_phase(Update, [A, B])
                .add_phase(Render, [C]),
        )
    }

    /// Runs one pass and records which systems executed.
    fn pass(driver: &mut PipelineDriver<TestPhase, TestSystem>) -> Vec<TestSystem> {
        let mut ran = Vec::new();
        driver.run_tick(|_, system| ran.push(system));
        ran
    }

    /// With stepping disabled, every pass runs the full pipeline in order.
    #[test]
    fn disabled_runs_full_pipeline_in_order() {
        let (mut driver, _sender) = driver();

        assert_eq!(pass(&mut driver), vec![A, B, C]);
        assert_eq!(pass(&mut driver), vec![A, B, C]);
        assert_eq!(driver.controller().tick(), 0);
    }

    /// A toggle command freezes the pipeline starting with the next pass.
    #[test]
    fn toggle_freezes_next_pass() {
        let (mut driver, sender) = driver();

        sender.send(SteppingCommand::Toggle);
        assert_eq!(pass(&mut driver), vec![]);
        assert!(driver.controller().is_enabled());
    }

    /// One conceptual tick spread over several passes: step, step, continue.
    #[test]
    fn stepping_spreads_tick_over_passes() {
        let (mut driver, sender) = driver();
        sender.send(SteppingCommand::Toggle);
        assert_eq!(pass(&mut driver), vec![]);

        sender.send(SteppingCommand::StepOne);
        assert_eq!(pass(&mut driver), vec![A]);

        sender.send(SteppingCommand::StepOne);
        assert_eq!(pass(&mut driver), vec![B]);

        sender.send(SteppingCommand::ContinueFrame);
        assert_eq!(pass(&mut driver), vec![C]);

        assert_eq!(driver.controller().tick(), 1);
    }

    /// Commands queued mid-walk only apply on the next pass.
    #[test]
    fn commands_apply_at_tick_start_only() {
        let (mut driver, sender) = driver();
        sender.send(SteppingCommand::Toggle);
        pass(&mut driver);
        sender.send(SteppingCommand::StepOne);

        let mut ran = Vec::new();
        driver.run_tick(|_, system| {
            ran.push(system);
            // Arrives too late for this pass.
            sender.send(SteppingCommand::StepOne);
        });

        // Only the step drained at tick start took effect.
        assert_eq!(ran, vec![A]);

        // The mid-walk step applies on the next pass.
        assert_eq!(pass(&mut driver), vec![B]);
    }

    /// Always-run slots keep executing every pass while frozen.
    #[test]
    fn always_run_slots_execute_while_frozen() {
        let (mut driver, sender) = driver();
        driver.controller_mut().always_run(Update, B);

        sender.send(SteppingCommand::Toggle);
        assert_eq!(pass(&mut driver), vec![B]);
        assert_eq!(pass(&mut driver), vec![B]);
    }

    /// Reconfiguration swaps the walk order and resets the cursor.
    #[test]
    fn reconfigure_swaps_pipeline() {
        let (mut driver, sender) = driver();
        sender.send(SteppingCommand::Toggle);
        pass(&mut driver);

        driver.reconfigure(PipelineDescriptor::new().add_phase(Update, [C, A]));

        sender.send(SteppingCommand::ContinueFrame);
        assert_eq!(pass(&mut driver), vec![C, A]);
    }

    /// Commands sent from another thread land at the next tick boundary.
    #[test]
    fn commands_from_other_thread() {
        let (mut driver, sender) = driver();

        let handle = std::thread::spawn(move || {
            sender.send(SteppingCommand::Toggle);
            sender.send(SteppingCommand::StepOne);
        });
        handle.join().unwrap();

        assert_eq!(pass(&mut driver), vec![A]);
    }
}
