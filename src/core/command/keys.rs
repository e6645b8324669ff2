//=========================================================================
// Key Press Types
//=========================================================================
//
// Portable representation of the key presses the command mapper consumes.
//
// The stepping core never polls input devices itself; the host's input
// layer translates whatever it receives (Winit, SDL, a terminal) into
// `KeyPress` values and feeds them to the `CommandMapper`. Keys are
// physical locations, not characters, so bindings survive keyboard
// layout changes.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Covers the keys a debug binding layer plausibly binds: letters,
/// digits, arrows, and the handful of special keys the default bindings
/// use. `Unidentified` is the fallback for anything the host's input
/// layer does not map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Number Row -------------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letters ----------------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrows -----------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar.
    Space,

    /// Return/Enter key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Backtick/grave key (left of Digit1 on ANSI layouts).
    Backquote,

    /// Forward slash key.
    Slash,

    /// Fallback for keys the host's input layer does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state accompanying a key press.
///
/// Bindings match modifiers exactly: a binding on plain `S` does not
/// trigger on `Ctrl+S`, and vice versa. Left/right variants are not
/// distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift held (either side).
    pub shift: bool,

    /// Ctrl held (either side; Command on macOS).
    pub ctrl: bool,

    /// Alt held (either side; Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Ctrl + Shift.
    pub const CTRL_SHIFT: Self = Self { shift: true, ctrl: true, alt: false };
}

//=== KeyPress ============================================================

/// One discrete key-down event, as delivered by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Physical key that went down.
    pub key: KeyCode,

    /// Modifier state at the time of the press.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// A press of `key` with no modifiers held.
    pub fn plain(key: KeyCode) -> Self {
        Self { key, modifiers: Modifiers::NONE }
    }

    /// A press of `key` with the given modifier state.
    pub fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Default modifier state is none held.
    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    /// Modifier constants set exactly their own flags.
    #[test]
    fn modifier_constants() {
        assert!(Modifiers::SHIFT.shift && !Modifiers::SHIFT.ctrl && !Modifiers::SHIFT.alt);
        assert!(Modifiers::CTRL.ctrl && !Modifiers::CTRL.shift);
        assert!(Modifiers::ALT.alt && !Modifiers::ALT.ctrl);
        assert!(Modifiers::CTRL_SHIFT.ctrl && Modifiers::CTRL_SHIFT.shift);
    }

    /// Presses are compared by key plus modifier state.
    #[test]
    fn key_press_equality() {
        assert_eq!(KeyPress::plain(KeyCode::KeyS), KeyPress::plain(KeyCode::KeyS));
        assert_ne!(
            KeyPress::plain(KeyCode::KeyS),
            KeyPress::with_modifiers(KeyCode::KeyS, Modifiers::CTRL),
        );
        assert_ne!(KeyPress::plain(KeyCode::KeyS), KeyPress::plain(KeyCode::Space));
    }

    /// KeyPress is usable as a hash map key.
    #[test]
    fn key_press_is_hashable() {
        let mut set = HashSet::new();
        set.insert(KeyPress::plain(KeyCode::Space));
        set.insert(KeyPress::plain(KeyCode::Space));
        set.insert(KeyPress::with_modifiers(KeyCode::Space, Modifiers::SHIFT));

        assert_eq!(set.len(), 2);
    }
}
