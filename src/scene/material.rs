//! Material definitions and centralized management.
//!
//! Materials are stored in [`MaterialManager`] and objects reference them by
//! ID. Lookups for missing or unassigned IDs fall back to a default material
//! so the host renderer never has to deal with a material-less object.

use std::collections::HashMap;

/// Material ID for referencing materials
pub type MaterialId = String;

/// Surface description consumed by the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// RGBA base color.
    pub base_color: [f32; 4],
    /// Metallic factor (0.0 = dielectric, 1.0 = metallic).
    pub metallic: f32,
    /// Surface roughness (0.0 = mirror, 1.0 = rough).
    pub roughness: f32,
    /// Disable to render both sides of a surface.
    pub back_face_culling: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            metallic: 0.0,
            roughness: 0.5,
            back_face_culling: true,
        }
    }
}

impl Material {
    /// Creates a new material with basic PBR properties
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor
    /// * `roughness` - Surface roughness
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            back_face_culling: true,
        }
    }
}

/// Centralized material storage.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Adds a material, keyed by its name. Replaces any existing material
    /// with the same name.
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Resolves an object's material reference, falling back to the default
    /// material when the reference is missing or dangling.
    pub fn get_material_for_object(&self, material_id: Option<&str>) -> &Material {
        material_id
            .and_then(|id| self.materials.get(id))
            .unwrap_or(&self.default_material)
    }

    pub fn list_materials(&self) -> Vec<&String> {
        self.materials.keys().collect()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_default() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::new("crate", [0.6, 0.4, 0.2, 1.0], 0.0, 0.8));

        assert_eq!(manager.get_material_for_object(Some("crate")).name, "crate");
        assert_eq!(manager.get_material_for_object(Some("missing")).name, "Default");
        assert_eq!(manager.get_material_for_object(None).name, "Default");
    }

    #[test]
    fn test_pbr_factors_are_clamped() {
        let material = Material::new("hot", [1.0; 4], 2.0, -1.0);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn test_same_name_replaces() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::new("ground", [1.0; 4], 0.0, 0.5));
        manager.add_material(Material::new("ground", [0.0, 0.0, 0.0, 1.0], 0.0, 0.5));
        assert_eq!(manager.material_count(), 1);
        assert_eq!(
            manager.get_material("ground").unwrap().base_color,
            [0.0, 0.0, 0.0, 1.0]
        );
    }
}
