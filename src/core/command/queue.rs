//=========================================================================
// Command Queue
//=========================================================================
//
// Queued command buffer between an asynchronous input source and the
// tick loop.
//
// Architecture:
//   Input/UI thread:                    Tick loop:
//   ┌──────────────────────┐           ┌─────────────────────────┐
//   │  KeyPress            │           │  drain_into(controller) │
//   │   ↓ CommandMapper    │           │   at tick start, before │
//   │  SteppingCommand ────┼──channel──┼─→ any should_run call   │
//   └──────────────────────┘           └─────────────────────────┘
//
// The cursor is not designed for concurrent mutation, so commands are
// never applied mid-tick; they queue here until the driver drains them
// between ticks. Senders are cloneable and cheap; a disconnected side
// is tolerated (the debug layer must never take the host down).
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::pipeline::{PhaseKey, SystemKey};
use crate::core::stepping::SteppingController;

use super::SteppingCommand;

//=== Channel Construction ================================================

/// Creates a connected sender/queue pair for stepping commands.
pub fn command_channel() -> (CommandSender, CommandQueue) {
    let (tx, rx) = unbounded();
    (CommandSender { tx }, CommandQueue { rx })
}

//=== CommandSender =======================================================

/// Input-side handle for queueing stepping commands.
///
/// Clone freely; every handle feeds the same queue.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<SteppingCommand>,
}

impl CommandSender {
    /// Queues a command for the next tick boundary.
    ///
    /// A disconnected queue (tick loop gone) is logged and ignored.
    pub fn send(&self, command: SteppingCommand) {
        if self.tx.send(command).is_err() {
            warn!("stepping command {:?} dropped: queue disconnected", command);
        }
    }
}

//=== CommandQueue ========================================================

/// Tick-loop side of the command buffer.
///
/// Drained exactly once per tick, at tick start, so the cursor is never
/// observed torn mid-tick.
pub struct CommandQueue {
    rx: Receiver<SteppingCommand>,
}

impl CommandQueue {
    /// Applies every pending command to the controller, in arrival
    /// order. Returns the number of commands applied.
    pub fn drain_into<P: PhaseKey, S: SystemKey>(
        &self,
        controller: &mut SteppingController<P, S>,
    ) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(command) => {
                    apply_command(command, controller);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // All senders dropped; nothing more will ever arrive.
                    break;
                }
            }
        }
        applied
    }

    /// Returns true if commands are waiting.
    pub fn has_pending(&self) -> bool {
        !self.rx.is_empty()
    }
}

//=== Command Application =================================================

/// Applies one command to the controller.
///
/// `Toggle` resolves against the current mode; the remaining commands
/// are direct method calls (no-ops where the controller defines them
/// as such).
pub fn apply_command<P: PhaseKey, S: SystemKey>(
    command: SteppingCommand,
    controller: &mut SteppingController<P, S>,
) {
    match command {
        SteppingCommand::Toggle => {
            if controller.is_enabled() {
                controller.disable();
            } else {
                controller.enable();
            }
        }
        SteppingCommand::StepOne => controller.step_frame(),
        SteppingCommand::ContinueFrame => controller.continue_frame(),
        SteppingCommand::DumpState => info!("{:#?}", controller),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
