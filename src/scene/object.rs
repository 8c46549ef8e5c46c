use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

use super::material::MaterialId;

/// Symbolic primitive shapes.
///
/// The host engine builds the actual mesh for each variant; this crate only
/// describes dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Cube with the given edge length, centered on its origin.
    Box { size: f32 },
    /// Horizontal ground plane.
    Ground { width: f32, height: f32 },
    /// Cylinder (or cone, when the diameters differ) along the local Y axis.
    Cylinder {
        diameter_top: f32,
        diameter_bottom: f32,
        height: f32,
    },
    /// Polyline through the given points, in local space.
    Lines { points: Vec<Vector3<f32>> },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Ground { .. } => "ground",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Lines { .. } => "lines",
        }
    }
}

/// A placeable scene object: a shape, a transform and render/physics flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub shape: Shape,
    pub transform: Matrix4<f32>,
    material_id: Option<MaterialId>,
    /// Registers the object with the host engine's collision system.
    pub check_collisions: bool,
    pub visible: bool,
}

impl Object {
    /// Create a new object with an identity transform.
    pub fn new(name: &str, shape: Shape) -> Self {
        Self {
            name: name.to_string(),
            shape,
            transform: Matrix4::identity(),
            material_id: None,
            check_collisions: false,
            visible: true,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Assign a material by ID.
    pub fn set_material(&mut self, material_id: &str) {
        self.material_id = Some(material_id.to_string());
    }

    pub fn get_material_id(&self) -> Option<&str> {
        self.material_id.as_deref()
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Apply translation (multiplies with existing transform)
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.transform = Matrix4::from_scale(scale);
    }

    /// Set non-uniform scale
    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.transform = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    }

    /// Set rotation around X axis
    pub fn set_rotation_x<A: Into<Rad<f32>>>(&mut self, angle: A) {
        self.transform = Matrix4::from_angle_x(angle);
    }

    /// Set rotation around Y axis
    pub fn set_rotation_y<A: Into<Rad<f32>>>(&mut self, angle: A) {
        self.transform = Matrix4::from_angle_y(angle);
    }

    /// Apply rotation around X axis
    pub fn rotate_x<A: Into<Rad<f32>>>(&mut self, angle: A) {
        self.transform = self.transform * Matrix4::from_angle_x(angle);
    }

    /// Apply rotation around Y axis
    pub fn rotate_y<A: Into<Rad<f32>>>(&mut self, angle: A) {
        self.transform = self.transform * Matrix4::from_angle_y(angle);
    }

    /// Create a complete transform from translation, Y rotation, and scale.
    /// Order matters: T * R * S.
    pub fn set_transform_trs<A: Into<Rad<f32>>>(
        &mut self,
        translation: Vector3<f32>,
        rotation_y: A,
        scale: Vector3<f32>,
    ) {
        let t = Matrix4::from_translation(translation);
        let r = Matrix4::from_angle_y(rotation_y);
        let s = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
        self.transform = t * r * s;
    }

    /// Reset to identity matrix
    pub fn reset_transform(&mut self) {
        self.transform = Matrix4::identity();
    }

    /// The translation component of the current transform.
    pub fn translation(&self) -> Vector3<f32> {
        self.transform.w.truncate()
    }
}
