//! # Camera and Camera Input Devices
//!
//! A first-person style [`FreeCamera`] description plus typed input devices
//! that drive it. Input devices implement the [`CameraInput`] trait and are
//! registered into a [`CameraInputManager`], which fans out `winit` events
//! and runs a per-frame poll. Raw event delivery (the window loop itself) is
//! the host application's job.

pub mod free_camera;
pub mod input;
pub mod search_input;
pub mod walk_input;

pub use free_camera::{FreeCamera, ViewCamera};
pub use input::{CameraInput, CameraInputManager};
pub use search_input::MouseSearchInput;
pub use walk_input::KeyboardWalkInput;
