use winit::event::{DeviceEvent, WindowEvent};

use super::free_camera::FreeCamera;

/// A camera input device: attach/detach lifecycle, event processing, and a
/// per-frame poll that turns held state into camera motion.
///
/// Devices are registered into a [`CameraInputManager`]; events only reach a
/// device while it is attached.
pub trait CameraInput {
    /// Short identifier used for lookup and removal.
    fn name(&self) -> &str;

    /// Start accepting events.
    fn attach(&mut self);

    /// Stop accepting events and drop any held state.
    fn detach(&mut self);

    fn is_attached(&self) -> bool;

    /// Consume a window event (keyboard, cursor, buttons, focus).
    fn process_window_event(&mut self, _event: &WindowEvent, _camera: &mut FreeCamera) {}

    /// Consume a raw device event (relative mouse motion).
    fn process_device_event(&mut self, _event: &DeviceEvent, _camera: &mut FreeCamera) {}

    /// Per-frame poll; called once per frame before the camera is committed.
    fn check_inputs(&mut self, _camera: &mut FreeCamera) {}
}

/// Aggregation list for camera input devices.
///
/// The host forwards its `winit` events here; the manager fans them out to
/// every attached device and runs the per-frame poll.
#[derive(Default)]
pub struct CameraInputManager {
    inputs: Vec<Box<dyn CameraInput>>,
}

impl CameraInputManager {
    pub fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Register a device. A device with a duplicate name replaces the
    /// existing one so stale handlers cannot linger.
    pub fn add(&mut self, mut input: Box<dyn CameraInput>) {
        input.attach();
        if let Some(existing) = self
            .inputs
            .iter_mut()
            .find(|existing| existing.name() == input.name())
        {
            log::warn!("replacing camera input device '{}'", input.name());
            existing.detach();
            *existing = input;
            return;
        }
        self.inputs.push(input);
    }

    /// Detach and remove the device with the given name. Returns whether a
    /// device was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let Some(index) = self.inputs.iter().position(|input| input.name() == name) else {
            return false;
        };
        self.inputs[index].detach();
        self.inputs.remove(index);
        true
    }

    pub fn attach_all(&mut self) {
        for input in &mut self.inputs {
            input.attach();
        }
    }

    pub fn detach_all(&mut self) {
        for input in &mut self.inputs {
            input.detach();
        }
    }

    pub fn process_window_event(&mut self, event: &WindowEvent, camera: &mut FreeCamera) {
        for input in &mut self.inputs {
            if input.is_attached() {
                input.process_window_event(event, camera);
            }
        }
    }

    pub fn process_device_event(&mut self, event: &DeviceEvent, camera: &mut FreeCamera) {
        for input in &mut self.inputs {
            if input.is_attached() {
                input.process_device_event(event, camera);
            }
        }
    }

    /// Run every attached device's per-frame poll.
    pub fn check_inputs(&mut self, camera: &mut FreeCamera) {
        for input in &mut self.inputs {
            if input.is_attached() {
                input.check_inputs(camera);
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.inputs.iter().map(|input| input.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
