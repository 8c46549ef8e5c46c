//! # Crateyard Prelude
//!
//! Convenient imports for typical use: building a stage, generating layouts
//! and wiring camera input devices.
//!
//! ```rust
//! use crateyard::prelude::*;
//!
//! let stage = crateyard::default_stage().unwrap();
//! assert!(stage.collisions_enabled);
//! ```

// Re-export the layout core
pub use crate::layout::{generate, generate_with, InvalidArgument, Placement, PlacementRequest};

// Re-export scene description types
pub use crate::scene::{
    build_stage, HemisphericLight, Material, MaterialManager, Object, Scene, SceneStatistics,
    Shape, StageConfig,
};

// Re-export camera and input devices
pub use crate::camera::{
    CameraInput, CameraInputManager, FreeCamera, KeyboardWalkInput, MouseSearchInput, ViewCamera,
};

// Re-export top-level convenience
pub use crate::default_stage;

// Re-export common external dependencies
pub use cgmath::{Deg, InnerSpace, Rad, Vector3, Zero};
