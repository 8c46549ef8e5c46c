//! # Scene Description
//!
//! Renderer-agnostic description of a scene: objects with symbolic shapes and
//! transforms, materials, a hemispheric light, gravity/collision settings and
//! the camera rig. A host engine walks this description to build meshes,
//! register collision bodies and drive its render loop; nothing in here
//! touches the GPU.

pub mod material;
pub mod object;
pub mod scene;
pub mod stage;

pub use material::{Material, MaterialManager};
pub use object::{Object, Shape};
pub use scene::{HemisphericLight, Scene, SceneStatistics};
pub use stage::{build_stage, StageConfig};
