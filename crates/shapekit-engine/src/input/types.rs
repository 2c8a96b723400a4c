use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform physical keys into these variants where possible.
/// Anything else becomes `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

impl Key {
    /// Key that types `c` without Shift on a US layout. Uppercase letters are
    /// different characters and map to nothing.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
            '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
            ' ' => Some(Key::Space),
            '\t' => Some(Key::Tab),
            '\r' | '\n' => Some(Key::Enter),
            _ => None,
        }
    }

    /// Key for a character code as reported by `keypress`-style events (e.g. 119 for `w`).
    pub fn from_char_code(code: u32) -> Option<Key> {
        char::from_u32(code).and_then(Key::from_char)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when the event is an auto-repeat of a held key.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// The key of a press (including repeats), if this is one.
    #[inline]
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key { key, state: KeyState::Pressed, .. } => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_codes_of_the_movement_keys() {
        assert_eq!(Key::from_char_code(119), Some(Key::W));
        assert_eq!(Key::from_char_code(115), Some(Key::S));
        assert_eq!(Key::from_char_code(97), Some(Key::A));
        assert_eq!(Key::from_char_code(100), Some(Key::D));
    }

    #[test]
    fn only_unshifted_letters_map() {
        assert_eq!(Key::from_char('q'), Some(Key::Q));
        assert_eq!(Key::from_char('Q'), None);
        assert_eq!(Key::from_char_code(87), None);
        assert_eq!(Key::from_char('7'), Some(Key::Digit7));
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn invalid_char_code_is_none() {
        assert_eq!(Key::from_char_code(0xD800), None);
    }

    #[test]
    fn pressed_key_ignores_releases() {
        let press = InputEvent::Key {
            key: Key::W,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: true,
        };
        let release = InputEvent::Key {
            key: Key::W,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            repeat: false,
        };
        assert_eq!(press.pressed_key(), Some(Key::W));
        assert_eq!(release.pressed_key(), None);
        assert_eq!(InputEvent::Focused(true).pressed_key(), None);
    }
}
