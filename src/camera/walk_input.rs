use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::free_camera::FreeCamera;
use super::input::CameraInput;

/// Arrow-key walk input.
///
/// Up/down queue a move of `camera.speed` along the camera's local forward
/// axis; left/right yaw by `camera.angular_speed`. Keys held down are kept in
/// a pressed list (insertion order, no duplicates) and applied on every
/// [`CameraInput::check_inputs`] poll, so holding a key keeps the camera
/// moving. Losing window focus or detaching clears the list.
pub struct KeyboardWalkInput {
    pub keys_up: Vec<KeyCode>,
    pub keys_down: Vec<KeyCode>,
    pub keys_left: Vec<KeyCode>,
    pub keys_right: Vec<KeyCode>,
    pressed: Vec<KeyCode>,
    attached: bool,
}

impl Default for KeyboardWalkInput {
    fn default() -> Self {
        Self {
            keys_up: vec![KeyCode::ArrowUp],
            keys_down: vec![KeyCode::ArrowDown],
            keys_left: vec![KeyCode::ArrowLeft],
            keys_right: vec![KeyCode::ArrowRight],
            pressed: Vec::new(),
            attached: false,
        }
    }
}

impl KeyboardWalkInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_bound(&self, code: KeyCode) -> bool {
        self.keys_up.contains(&code)
            || self.keys_down.contains(&code)
            || self.keys_left.contains(&code)
            || self.keys_right.contains(&code)
    }

    /// Record a key transition. Unbound keys are ignored.
    pub fn on_key(&mut self, code: KeyCode, state: ElementState) {
        if !self.is_bound(code) {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.pressed.contains(&code) {
                    self.pressed.push(code);
                }
            }
            ElementState::Released => {
                self.pressed.retain(|held| *held != code);
            }
        }
    }

    /// Drop all held keys (focus loss).
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Keys currently held, in press order.
    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed
    }
}

impl CameraInput for KeyboardWalkInput {
    fn name(&self) -> &str {
        "keyboard"
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.pressed.clear();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn process_window_event(&mut self, event: &WindowEvent, _camera: &mut FreeCamera) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.on_key(*code, *state),
            WindowEvent::Focused(false) => self.clear(),
            _ => (),
        }
    }

    fn check_inputs(&mut self, camera: &mut FreeCamera) {
        for index in 0..self.pressed.len() {
            let code = self.pressed[index];
            if self.keys_left.contains(&code) {
                camera.rotation.y -= camera.angular_speed;
            } else if self.keys_right.contains(&code) {
                camera.rotation.y += camera.angular_speed;
            } else if self.keys_up.contains(&code) {
                camera.queue_local_move(cgmath::Vector3::new(0.0, 0.0, camera.speed));
            } else if self.keys_down.contains(&code) {
                camera.queue_local_move(cgmath::Vector3::new(0.0, 0.0, -camera.speed));
            }
        }
    }
}
