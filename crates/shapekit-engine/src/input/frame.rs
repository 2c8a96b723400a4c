use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, focus).
/// `InputFrame` provides events and first presses since the last frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order, key repeats included.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame (first press only, no repeats).
    pub keys_pressed: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Every press in arrival order, repeats included.
    pub fn presses(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(InputEvent::pressed_key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
