//! # Procedural Ring Layout
//!
//! This module computes placement positions for N objects arranged roughly
//! evenly around a circle, with bounded random jitter applied to both radius
//! and angle. The shape of the layout is deterministic; the values are
//! stochastic unless a seeded RNG is injected.
//!
//! ## Usage
//!
//! ```rust
//! use crateyard::layout::{self, PlacementRequest};
//!
//! let request = PlacementRequest {
//!     count: 6,
//!     base_radius: 6.0,
//!     radius_jitter: 0.5,
//!     angle_jitter: 0.1,
//!     height: 1.0,
//! };
//!
//! let placement = layout::generate(&request).unwrap();
//! assert_eq!(placement.len(), 6);
//! ```

pub mod ring;

pub use ring::{generate, generate_with};

use cgmath::Vector3;
use thiserror::Error;

/// Error raised for structurally invalid placement requests.
///
/// This is the only failure mode of the layout core. It propagates to the
/// immediate caller unchanged; invalid inputs are never clamped or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid placement request: {0}")]
pub struct InvalidArgument(String);

impl InvalidArgument {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Human-readable description of what was invalid.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Input to the ring layout generator.
///
/// Jitter fractions are *expected* in `[0, 1]` but are honored as-is when
/// outside that range (wider jitter, not an error).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Number of objects to place. Must be at least 1.
    pub count: u32,
    /// Nominal circle radius. Must be positive.
    pub base_radius: f32,
    /// Fraction of `base_radius` used as the radius jitter half-range.
    pub radius_jitter: f32,
    /// Fraction of each position's nominal angle used as the angle jitter half-range.
    pub angle_jitter: f32,
    /// Fixed Y coordinate shared by every placement.
    pub height: f32,
}

/// Output of the ring layout generator: one position per requested object,
/// in index order. Index `i` is centered on nominal angle `i * 2π / count`;
/// the sequence carries no further ordering guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Placement positions as (x, height, z).
    pub positions: Vec<Vector3<f32>>,
}

impl Placement {
    /// Number of positions in this placement.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the placement holds no positions (never the case for a
    /// placement returned by [`generate`]).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over the positions in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vector3<f32>> {
        self.positions.iter()
    }
}

impl IntoIterator for Placement {
    type Item = Vector3<f32>;
    type IntoIter = std::vec::IntoIter<Vector3<f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Vector3<f32>;
    type IntoIter = std::slice::Iter<'a, Vector3<f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
