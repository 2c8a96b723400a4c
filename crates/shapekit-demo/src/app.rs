use shapekit_engine::core::{App, AppControl, FrameCtx};
use shapekit_engine::input::{InputFrame, Key, KeyBindings};
use shapekit_engine::paint::Color;

use crate::scenes::{self, Scene};

/// What the frame's input asked the app to do.
#[derive(Debug, Default, PartialEq)]
struct FrameRequest {
    exit: bool,
    next_scene: bool,
}

// First presses only: holding Tab switches once.
fn scan_keys(frame: &InputFrame) -> FrameRequest {
    FrameRequest {
        exit: frame.keys_pressed.contains(&Key::Escape),
        next_scene: frame.keys_pressed.contains(&Key::Tab),
    }
}

/// Hosts the demo scenes and forwards movement commands to the active one.
pub struct DemoApp {
    title: String,
    bindings: KeyBindings,
    scenes: Vec<Box<dyn Scene>>,
    active: usize,
    shown_title: Option<String>,
}

impl DemoApp {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bindings: KeyBindings::default(),
            scenes: scenes::all(),
            active: 0,
            shown_title: None,
        }
    }

    pub fn active_scene(&self) -> &dyn Scene {
        self.scenes[self.active].as_ref()
    }

    fn next_scene(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.scenes.len();
        log::info!("scene: {}", self.active_scene().name());
    }

    /// One update step: scene switching, then movement.
    fn update(&mut self, frame: &InputFrame) -> AppControl {
        let req = scan_keys(frame);
        if req.exit {
            return AppControl::Exit;
        }
        if req.next_scene {
            self.next_scene();
        }

        let scene = &mut self.scenes[self.active];
        for cmd in self.bindings.commands(frame) {
            scene.apply(cmd);
        }
        AppControl::Continue
    }

    fn window_title(&self) -> String {
        let scene = self.active_scene();
        match scene.status() {
            "" => format!("{} - {}", self.title, scene.name()),
            status => format!("{} - {}: {}", self.title, scene.name(), status),
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.update(ctx.input_frame) == AppControl::Exit {
            return AppControl::Exit;
        }

        let title = self.window_title();
        if self.shown_title.as_deref() != Some(title.as_str()) {
            let status = self.active_scene().status();
            if !status.is_empty() {
                log::info!("{status}");
            }
            ctx.runtime.set_title(title.clone());
            self.shown_title = Some(title);
        }

        ctx.canvas.clear();
        self.active_scene().draw(ctx.canvas);
        ctx.present(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_engine::input::{InputEvent, InputState, KeyState, Modifiers};

    fn frame_with(keys: &[Key]) -> InputFrame {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    modifiers: Modifiers::default(),
                    repeat: false,
                },
            );
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Released,
                    modifiers: Modifiers::default(),
                    repeat: false,
                },
            );
        }
        frame
    }

    #[test]
    fn escape_exits() {
        let mut app = DemoApp::new("demo");
        assert_eq!(app.update(&frame_with(&[Key::Escape])), AppControl::Exit);
    }

    #[test]
    fn tab_cycles_and_wraps() {
        let mut app = DemoApp::new("demo");
        assert_eq!(app.active_scene().name(), "collision");
        app.update(&frame_with(&[Key::Tab]));
        assert_eq!(app.active_scene().name(), "gallery");
        app.update(&frame_with(&[Key::Tab]));
        assert_eq!(app.active_scene().name(), "mario");
        app.update(&frame_with(&[Key::Tab]));
        assert_eq!(app.active_scene().name(), "collision");
    }

    #[test]
    fn held_tab_switches_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for repeat in [false, true, true] {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key: Key::Tab,
                    state: KeyState::Pressed,
                    modifiers: Modifiers::default(),
                    repeat,
                },
            );
        }

        let mut app = DemoApp::new("demo");
        app.update(&frame);
        assert_eq!(app.active_scene().name(), "gallery");
    }

    #[test]
    fn movement_reaches_collision_and_title_shows_it() {
        let mut app = DemoApp::new("demo");
        assert_eq!(app.window_title(), "demo - collision");

        app.update(&frame_with(&[Key::D, Key::D, Key::D, Key::D]));
        assert_eq!(app.window_title(), "demo - collision: collision");
    }

    #[test]
    fn static_scenes_ignore_movement() {
        let mut app = DemoApp::new("demo");
        app.update(&frame_with(&[Key::Tab, Key::D, Key::D]));
        assert_eq!(app.window_title(), "demo - gallery");
    }
}
