use std::collections::HashMap;

use crate::coords::Point;

use super::frame::InputFrame;
use super::types::Key;

/// Distance a single key press moves something, in logical pixels.
pub const DEFAULT_STEP: f32 = 10.0;

/// Screen-space direction (+Y points down).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset for this direction.
    #[inline]
    pub fn unit(self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, -1.0),
            Direction::Down => Point::new(0.0, 1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }
}

/// A displacement requested by input, applied by the update step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoveCommand {
    pub direction: Direction,
    pub offset: Point,
}

/// Maps keys to movement commands.
///
/// Defaults to `w`/`s`/`a`/`d` (character codes 119/115/97/100) for
/// up/down/left/right with a step of [`DEFAULT_STEP`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    step: f32,
    moves: HashMap<Key, Direction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty(DEFAULT_STEP);
        bindings.bind(Key::W, Direction::Up);
        bindings.bind(Key::S, Direction::Down);
        bindings.bind(Key::A, Direction::Left);
        bindings.bind(Key::D, Direction::Right);
        bindings
    }
}

impl KeyBindings {
    /// No bindings at all.
    pub fn empty(step: f32) -> Self {
        Self { step, moves: HashMap::new() }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Binds `key` to `direction`, replacing any earlier binding of that key.
    pub fn bind(&mut self, key: Key, direction: Direction) -> &mut Self {
        self.moves.insert(key, direction);
        self
    }

    /// Command for a single key press, if the key is bound.
    pub fn command(&self, key: Key) -> Option<MoveCommand> {
        let direction = *self.moves.get(&key)?;
        Some(MoveCommand {
            direction,
            offset: direction.unit() * self.step,
        })
    }

    /// Command for a character code (`keypress`-style, e.g. 119 for `w`).
    pub fn command_for_char_code(&self, code: u32) -> Option<MoveCommand> {
        Key::from_char_code(code).and_then(|key| self.command(key))
    }

    /// Commands for every bound press in `frame`, in arrival order, repeats included.
    pub fn commands<'a>(&'a self, frame: &'a InputFrame) -> impl Iterator<Item = MoveCommand> + 'a {
        frame.presses().filter_map(move |key| self.command(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputState, KeyState, Modifiers};

    fn moved(code: u32, from: Point) -> Point {
        let cmd = KeyBindings::default().command_for_char_code(code).unwrap();
        from + cmd.offset
    }

    #[test]
    fn w_moves_up_by_ten() {
        assert_eq!(moved(119, Point::new(100.0, 100.0)), Point::new(100.0, 90.0));
    }

    #[test]
    fn s_moves_down_by_ten() {
        assert_eq!(moved(115, Point::new(100.0, 100.0)), Point::new(100.0, 110.0));
    }

    #[test]
    fn a_moves_left_by_ten() {
        assert_eq!(moved(97, Point::new(100.0, 100.0)), Point::new(90.0, 100.0));
    }

    #[test]
    fn d_moves_right_by_ten() {
        assert_eq!(moved(100, Point::new(100.0, 100.0)), Point::new(110.0, 100.0));
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let bindings = KeyBindings::default();
        assert!(bindings.command(Key::Q).is_none());
        assert!(bindings.command_for_char_code(113).is_none());
        assert!(KeyBindings::empty(5.0).command(Key::W).is_none());
    }

    #[test]
    fn uppercase_char_codes_do_not_move() {
        let bindings = KeyBindings::default();
        for code in [87, 83, 65, 68] {
            assert!(bindings.command_for_char_code(code).is_none(), "code {code}");
        }
    }

    #[test]
    fn custom_step_and_rebinding() {
        let mut bindings = KeyBindings::default().with_step(2.5);
        bindings.bind(Key::ArrowUp, Direction::Up);
        let cmd = bindings.command(Key::ArrowUp).unwrap();
        assert_eq!(cmd.direction, Direction::Up);
        assert_eq!(cmd.offset, Point::new(0.0, -2.5));
    }

    #[test]
    fn commands_follow_frame_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for (key, repeat) in [(Key::D, false), (Key::D, true), (Key::Q, false), (Key::W, false)] {
            state.apply_event(
                &mut frame,
                InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat },
            );
        }

        let directions: Vec<_> = KeyBindings::default()
            .commands(&frame)
            .map(|c| c.direction)
            .collect();
        assert_eq!(directions, vec![Direction::Right, Direction::Right, Direction::Up]);
    }
}
