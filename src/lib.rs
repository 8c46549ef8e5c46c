// src/lib.rs
//! Crateyard
//!
//! A small 3D scene demo toolkit: a procedural ring layout generator, a
//! renderer-agnostic scene description and walk-style camera input devices.
//! Rendering, physics integration and mesh construction are left to the host
//! engine that consumes the description.

pub mod camera;
pub mod layout;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use layout::{InvalidArgument, Placement, PlacementRequest};
pub use scene::Scene;

/// Builds the crate-ring demo stage with default settings and the
/// thread-local RNG.
pub fn default_stage() -> Result<Scene, InvalidArgument> {
    scene::stage::build_stage(&scene::stage::StageConfig::default(), &mut rand::rng())
}
