use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};

use super::free_camera::FreeCamera;
use super::input::CameraInput;

/// Mouse "search" input: drag to look around, including above and below.
///
/// Rotation is fed into the camera's pending rotation, divided by
/// `angular_sensibility`. Drag distance accumulates into a bounded window
/// (`restriction_x` / `restriction_y`, in pixels); once the window is
/// exhausted on an axis, further dragging in that direction stops rotating
/// the camera until the drag backs off. With `pointer_locked` set, raw
/// relative motion drives the rotation directly and the window does not
/// apply.
pub struct MouseSearchInput {
    /// Mouse buttons that start a drag.
    pub buttons: Vec<MouseButton>,
    /// Rotation divisor: larger values mean slower rotation.
    pub angular_sensibility: f32,
    /// Horizontal drag window, in pixels.
    pub restriction_x: f32,
    /// Vertical drag window, in pixels.
    pub restriction_y: f32,
    /// Host sets this while the pointer is captured/locked.
    pub pointer_locked: bool,
    cursor: Option<(f64, f64)>,
    previous: Option<(f64, f64)>,
    angle: (f32, f32),
    attached: bool,
}

impl Default for MouseSearchInput {
    fn default() -> Self {
        Self {
            buttons: vec![MouseButton::Left, MouseButton::Middle, MouseButton::Right],
            angular_sensibility: 2000.0,
            restriction_x: 100.0,
            restriction_y: 60.0,
            pointer_locked: false,
            cursor: None,
            previous: None,
            angle: (0.0, 0.0),
            attached: false,
        }
    }
}

impl MouseSearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at the given cursor position.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.previous = Some((x, y));
    }

    /// End the current drag.
    pub fn pointer_up(&mut self) {
        self.previous = None;
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.previous.is_some()
    }

    /// Track a cursor move; rotates the camera when a drag is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64, camera: &mut FreeCamera) {
        self.cursor = Some((x, y));
        if self.pointer_locked {
            return;
        }
        let Some((prev_x, prev_y)) = self.previous else {
            return;
        };

        let offset_x = (x - prev_x) as f32;
        let offset_y = (y - prev_y) as f32;

        // Advance the bounded window; steps that would leave it are undone.
        self.angle.0 += offset_x;
        self.angle.1 -= offset_y;
        if self.angle.0.abs() > self.restriction_x {
            self.angle.0 -= offset_x;
        }
        if self.angle.1.abs() > self.restriction_y {
            self.angle.1 += offset_y;
        }

        if self.angle.0.abs() < self.restriction_x {
            let yaw = offset_x / self.angular_sensibility;
            if camera.right_handed {
                camera.pending_rotation.y -= yaw;
            } else {
                camera.pending_rotation.y += yaw;
            }
        }
        if self.angle.1.abs() < self.restriction_y {
            camera.pending_rotation.x += offset_y / self.angular_sensibility;
        }

        self.previous = Some((x, y));
    }

    /// Pointer-locked relative motion: rotates without the drag window.
    pub fn relative_move(&mut self, dx: f64, dy: f64, camera: &mut FreeCamera) {
        let yaw = dx as f32 / self.angular_sensibility;
        if camera.right_handed {
            camera.pending_rotation.y -= yaw;
        } else {
            camera.pending_rotation.y += yaw;
        }
        camera.pending_rotation.x += dy as f32 / self.angular_sensibility;
        self.previous = None;
    }
}

impl CameraInput for MouseSearchInput {
    fn name(&self) -> &str {
        "mouse_search"
    }

    fn attach(&mut self) {
        self.attached = true;
        self.angle = (0.0, 0.0);
        self.previous = None;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.previous = None;
        self.cursor = None;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn process_window_event(&mut self, event: &WindowEvent, camera: &mut FreeCamera) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_move(position.x, position.y, camera);
            }
            WindowEvent::MouseInput { state, button, .. } if self.buttons.contains(button) => {
                match state {
                    ElementState::Pressed => {
                        if let Some((x, y)) = self.cursor {
                            self.pointer_down(x, y);
                        }
                    }
                    ElementState::Released => self.pointer_up(),
                }
            }
            _ => (),
        }
    }

    fn process_device_event(&mut self, event: &DeviceEvent, camera: &mut FreeCamera) {
        if !self.pointer_locked {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.relative_move(*dx, *dy, camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector3, Zero};

    const EPSILON: f32 = 1e-6;

    fn camera() -> FreeCamera {
        FreeCamera::new("camera", Vector3::zero())
    }

    #[test]
    fn test_drag_rotates_by_sensibility() {
        let mut input = MouseSearchInput::new();
        input.attach();
        let mut camera = camera();

        input.pointer_down(100.0, 100.0);
        input.pointer_move(120.0, 90.0, &mut camera);

        assert!((camera.pending_rotation.y - 20.0 / 2000.0).abs() < EPSILON);
        assert!((camera.pending_rotation.x - -10.0 / 2000.0).abs() < EPSILON);
    }

    #[test]
    fn test_move_without_drag_does_nothing() {
        let mut input = MouseSearchInput::new();
        input.attach();
        let mut camera = camera();

        input.pointer_move(500.0, 500.0, &mut camera);
        assert_eq!(camera.pending_rotation.x, 0.0);
        assert_eq!(camera.pending_rotation.y, 0.0);
    }

    #[test]
    fn test_restriction_window_stops_rotation() {
        let mut input = MouseSearchInput::new();
        input.attach();
        let mut camera = camera();

        input.pointer_down(0.0, 0.0);
        // Walk far past the 100 px horizontal window in 50 px steps.
        for step in 1..=6 {
            input.pointer_move(step as f64 * 50.0, 0.0, &mut camera);
        }

        // Only the first step rotates: the second parks the window exactly on
        // the 100 px boundary (which no longer rotates), and later steps are
        // undone by the window check.
        assert!((camera.pending_rotation.y - 50.0 / 2000.0).abs() < EPSILON);
    }

    #[test]
    fn test_backing_off_reopens_the_window() {
        let mut input = MouseSearchInput::new();
        input.attach();
        let mut camera = camera();

        input.pointer_down(0.0, 0.0);
        input.pointer_move(90.0, 0.0, &mut camera);
        input.pointer_move(40.0, 0.0, &mut camera);
        input.pointer_move(80.0, 0.0, &mut camera);

        let expected = (90.0 - 50.0 + 40.0) / 2000.0;
        assert!((camera.pending_rotation.y - expected).abs() < EPSILON);
    }

    #[test]
    fn test_right_handed_flips_yaw_sign() {
        let mut input = MouseSearchInput::new();
        input.attach();
        let mut camera = camera();
        camera.right_handed = true;

        input.pointer_down(0.0, 0.0);
        input.pointer_move(20.0, 0.0, &mut camera);
        assert!((camera.pending_rotation.y + 20.0 / 2000.0).abs() < EPSILON);
    }

    #[test]
    fn test_pointer_locked_relative_motion() {
        let mut input = MouseSearchInput::new();
        input.attach();
        input.pointer_locked = true;
        let mut camera = camera();

        input.relative_move(10.0, 4.0, &mut camera);
        assert!((camera.pending_rotation.y - 10.0 / 2000.0).abs() < EPSILON);
        assert!((camera.pending_rotation.x - 4.0 / 2000.0).abs() < EPSILON);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_detach_ends_drag() {
        let mut input = MouseSearchInput::new();
        input.attach();
        input.pointer_down(0.0, 0.0);
        input.detach();
        assert!(!input.is_dragging());
    }
}
