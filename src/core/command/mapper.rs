//=========================================================================
// Command Mapper
//=========================================================================
//
// Maps key presses to stepping commands.
//
// Architecture:
//   (key, modifiers) → HashMap → SteppingCommand
//
// Lives on the input side of the command boundary: the host's input
// layer feeds presses in, the resulting commands go over the command
// channel and are drained at tick start.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::keys::{KeyCode, KeyPress};
use super::SteppingCommand;

//=== CommandMapper =======================================================

/// Translates discrete key presses into stepping commands.
///
/// Modifier state must match a binding exactly. Unbound presses map to
/// nothing, which the caller simply drops.
pub struct CommandMapper {
    bindings: HashMap<KeyPress, SteppingCommand>,
}

impl CommandMapper {
    //--- Construction -----------------------------------------------------

    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates a mapper with the conventional debug bindings:
    /// backquote toggles stepping, S steps one system, Space continues
    /// the frame, and Slash dumps controller state to the log.
    pub fn with_default_bindings() -> Self {
        let mut mapper = Self::new();
        mapper.bind(KeyPress::plain(KeyCode::Backquote), SteppingCommand::Toggle);
        mapper.bind(KeyPress::plain(KeyCode::KeyS), SteppingCommand::StepOne);
        mapper.bind(KeyPress::plain(KeyCode::Space), SteppingCommand::ContinueFrame);
        mapper.bind(KeyPress::plain(KeyCode::Slash), SteppingCommand::DumpState);
        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a press to a command, replacing any previous binding.
    pub fn bind(&mut self, press: KeyPress, command: SteppingCommand) {
        if let Some(previous) = self.bindings.insert(press, command) {
            warn!(
                "rebinding {:?}: {:?} replaces {:?}",
                press, command, previous
            );
        }
    }

    /// Removes the binding for a press, if any.
    pub fn unbind(&mut self, press: KeyPress) {
        self.bindings.remove(&press);
    }

    /// Removes all bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a press to its bound command, if one exists.
    pub fn map_press(&self, press: KeyPress) -> Option<SteppingCommand> {
        self.bindings.get(&press).copied()
    }

    /// Convenience lookup for an unmodified key press.
    pub fn map_key(&self, key: KeyCode) -> Option<SteppingCommand> {
        self.map_press(KeyPress::plain(key))
    }

    /// Number of active bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no bindings exist.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for CommandMapper {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
