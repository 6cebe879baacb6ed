//! Mouse input for the orbit controls.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use super::core::GlintApp;

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

/// Left-button drag tracking.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    pressed: bool,
    last: Option<(f64, f64)>,
}

impl DragState {
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Record a cursor position; returns the movement since the last one
    /// while the button is held.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let previous = self.last.replace((x, y));
        if !self.pressed {
            return None;
        }
        previous.map(|(px, py)| ((x - px) as f32, (y - py) as f32))
    }

    pub fn cursor_left(&mut self) {
        self.last = None;
    }
}

/// Wheel movement in notches, negative toward the target.
pub fn wheel_steps(delta: MouseScrollDelta) -> f32 {
    // winit reports scrolling away from the user as positive
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y,
        MouseScrollDelta::PixelDelta(pos) => (-pos.y / PIXELS_PER_LINE) as f32,
    }
}

impl GlintApp {
    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.drag.set_pressed(state == ElementState::Pressed);
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        let Some((dx, dy)) = self.drag.moved(x, y) else {
            return;
        };
        let height = self
            .window
            .as_ref()
            .map(|w| w.inner_size().height as f32)
            .unwrap_or(1.0);
        if let Some(scene) = self.scene.as_mut() {
            scene.controls.rotate(dx, dy, height);
        }
    }

    pub(super) fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let steps = wheel_steps(delta);
        if let Some(scene) = self.scene.as_mut() {
            scene.controls.dolly(steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn movement_without_button_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.moved(10.0, 10.0), None);
        assert_eq!(drag.moved(20.0, 10.0), None);
    }

    #[test]
    fn drag_reports_deltas_from_last_position() {
        let mut drag = DragState::default();
        drag.moved(10.0, 10.0);
        drag.set_pressed(true);
        assert_eq!(drag.moved(15.0, 7.0), Some((5.0, -3.0)));
        assert_eq!(drag.moved(15.0, 9.0), Some((0.0, 2.0)));
        drag.set_pressed(false);
        assert_eq!(drag.moved(30.0, 30.0), None);
    }

    #[test]
    fn first_position_after_leaving_has_no_delta() {
        let mut drag = DragState::default();
        drag.set_pressed(true);
        drag.moved(0.0, 0.0);
        drag.cursor_left();
        assert_eq!(drag.moved(100.0, 100.0), None);
        assert_eq!(drag.moved(101.0, 100.0), Some((1.0, 0.0)));
    }

    #[test]
    fn scrolling_up_moves_toward_target() {
        assert!(wheel_steps(MouseScrollDelta::LineDelta(0.0, 1.0)) < 0.0);
        assert!(wheel_steps(MouseScrollDelta::LineDelta(0.0, -2.0)) > 0.0);
        let pixels = wheel_steps(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0)));
        assert_eq!(pixels, -2.0);
    }
}
