use cgmath::Vector3;

use crate::camera::{FreeCamera, ViewCamera};

use super::material::{Material, MaterialManager};
use super::object::Object;

/// Ambient light filling the scene from a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphericLight {
    pub name: String,
    pub direction: Vector3<f32>,
    pub intensity: f32,
}

/// Main scene containing objects, materials, lighting and the camera rig.
///
/// World objects live in `objects`; `camera_attachments` are objects expressed
/// in the player camera's space (markers, HUD geometry) that the host renders
/// relative to the camera transform.
pub struct Scene {
    pub clear_color: [f32; 4],
    pub light: HemisphericLight,
    /// Gravity applied to gravity-enabled cameras by the host engine.
    pub gravity: Vector3<f32>,
    pub collisions_enabled: bool,
    pub camera: FreeCamera,
    pub view_camera: Option<ViewCamera>,
    pub camera_attachments: Vec<Object>,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    /// Creates a new scene around the given player camera.
    pub fn new(camera: FreeCamera) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            light: HemisphericLight {
                name: "light".to_string(),
                direction: Vector3::new(0.0, 1.0, 0.0),
                intensity: 1.0,
            },
            gravity: Vector3::new(0.0, 0.0, 0.0),
            collisions_enabled: false,
            camera,
            view_camera: None,
            camera_attachments: Vec::new(),
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Adds a world object, renaming it if its name is already taken.
    pub fn add_object(&mut self, mut object: Object) -> &mut Object {
        object.name = self.ensure_unique_name(&object.name);
        log::debug!("adding {} '{}'", object.shape.kind(), object.name);
        self.objects.push(object);
        self.objects.last_mut().unwrap()
    }

    /// Adds an object in the player camera's space.
    pub fn attach_to_camera(&mut self, object: Object) -> &mut Object {
        self.camera_attachments.push(object);
        self.camera_attachments.last_mut().unwrap()
    }

    /// Creates a new material and adds it to the material manager
    ///
    /// # Arguments
    /// * `name` - Unique name for the material
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor
    /// * `roughness` - Roughness factor
    pub fn add_material(
        &mut self,
        name: &str,
        base_color: [f32; 4],
        metallic: f32,
        roughness: f32,
    ) -> &mut Material {
        let material = Material::new(name, base_color, metallic, roughness);
        self.material_manager.add_material(material);
        self.material_manager.get_material_mut(name).unwrap()
    }

    /// Convenience method for creating materials with RGB colors
    pub fn add_material_rgb(
        &mut self,
        name: &str,
        r: f32,
        g: f32,
        b: f32,
        metallic: f32,
        roughness: f32,
    ) -> &mut Material {
        self.add_material(name, [r, g, b, 1.0], metallic, roughness)
    }

    /// Gets material for rendering an object
    ///
    /// Returns the material assigned to the object, or the default material
    /// if no material is assigned or the assigned material doesn't exist.
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }

    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Finds a world object by name.
    pub fn find_object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|object| object.name.clone()).collect()
    }

    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|object| object.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            attachment_count: self.camera_attachments.len(),
            material_count: self.material_manager.material_count(),
            collidable_count: self
                .objects
                .iter()
                .filter(|object| object.check_collisions)
                .count(),
        }
    }
}

/// Scene statistics for debugging and logging
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub attachment_count: usize,
    pub material_count: usize,
    pub collidable_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::object::Shape;
    use cgmath::Zero;

    fn scene() -> Scene {
        Scene::new(FreeCamera::new("camera", Vector3::zero()))
    }

    #[test]
    fn test_duplicate_names_are_made_unique() {
        let mut scene = scene();
        scene.add_object(Object::new("crate", Shape::Box { size: 2.0 }));
        scene.add_object(Object::new("crate", Shape::Box { size: 2.0 }));
        scene.add_object(Object::new("crate", Shape::Box { size: 2.0 }));

        let names = scene.get_object_names();
        assert_eq!(names, vec!["crate", "crate (1)", "crate (2)"]);
    }

    #[test]
    fn test_material_fallback_for_unassigned_object() {
        let mut scene = scene();
        scene.add_material_rgb("crate", 0.6, 0.4, 0.2, 0.0, 0.8);
        let object = Object::new("crate", Shape::Box { size: 2.0 });
        assert_eq!(scene.get_material_for_object(&object).name, "Default");
    }

    #[test]
    fn test_statistics_count_collidables_and_attachments() {
        let mut scene = scene();
        let mut ground = Object::new("ground", Shape::Ground { width: 100.0, height: 100.0 });
        ground.check_collisions = true;
        scene.add_object(ground);
        scene.add_object(Object::new("decor", Shape::Box { size: 1.0 }));
        scene.attach_to_camera(Object::new(
            "marker",
            Shape::Cylinder {
                diameter_top: 0.01,
                diameter_bottom: 0.2,
                height: 0.2,
            },
        ));
        scene.add_material_rgb("ground", 0.5, 0.5, 0.5, 0.0, 0.9);

        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.attachment_count, 1);
        assert_eq!(stats.material_count, 1);
        assert_eq!(stats.collidable_count, 1);
    }

    #[test]
    fn test_find_object_by_name() {
        let mut scene = scene();
        scene.add_object(Object::new("ground", Shape::Ground { width: 100.0, height: 100.0 }));
        assert!(scene.find_object("ground").is_some());
        assert!(scene.find_object("sky").is_none());
    }
}
