//! The crate-ring demo stage.
//!
//! Assembles the full demo scene: a walkable camera rig with an
//! over-the-shoulder view camera, a hemispheric light, two ground planes and
//! a jittered ring of crates placed by the [`crate::layout`] module. The
//! result is a plain [`Scene`] description for a host engine to render.

use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::{Rad, Vector3};
use rand::Rng;

use crate::camera::{FreeCamera, ViewCamera};
use crate::layout::{self, InvalidArgument, PlacementRequest};

use super::object::{Object, Shape};
use super::scene::Scene;

/// Knobs for the demo stage. Defaults reproduce the original demo.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// Number of crates in the ring.
    pub crate_count: u32,
    /// Nominal ring radius.
    pub ring_radius: f32,
    /// Radius jitter fraction handed to the layout generator.
    pub radius_jitter: f32,
    /// Angle jitter fraction handed to the layout generator.
    pub angle_jitter: f32,
    /// Crate edge length.
    pub crate_size: f32,
    /// Crate center height above the ground.
    pub crate_height: f32,
    /// Ground plane side length.
    pub ground_extent: f32,
    pub gravity: Vector3<f32>,
    pub clear_color: [f32; 4],
    pub light_intensity: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            crate_count: 6,
            ring_radius: 6.0,
            radius_jitter: 0.5,
            angle_jitter: 0.1,
            crate_size: 2.0,
            crate_height: 1.0,
            ground_extent: 100.0,
            gravity: Vector3::new(0.0, -0.9, 0.0),
            clear_color: [0.1, 0.1, 0.1, 1.0],
            light_intensity: 0.9,
        }
    }
}

/// Number of wireframe loops in the camera's ellipse cage.
const ELLIPSE_LOOPS: usize = 23;

/// Builds the demo stage, drawing crate jitter from `rng`.
///
/// Fails with [`InvalidArgument`] when the config requests an impossible
/// crate ring (zero crates or a non-positive radius).
pub fn build_stage<R: Rng + ?Sized>(
    config: &StageConfig,
    rng: &mut R,
) -> Result<Scene, InvalidArgument> {
    // Player camera: slow walking pace, tight near plane, collision ellipsoid
    // roughly person-sized with its center at the feet.
    let mut camera = FreeCamera::new("camera", Vector3::new(0.0, 1.0, 0.0));
    camera.min_z = 0.0001;
    camera.speed = 0.02;
    camera.angular_sensibility = 5000.0;
    camera.apply_gravity = true;
    camera.check_collisions = true;
    camera.ellipsoid = Vector3::new(0.5, 1.0, 0.5);
    camera.ellipsoid_offset = Vector3::new(0.0, 1.0, 0.0);

    let mut scene = Scene::new(camera);
    scene.clear_color = config.clear_color;
    scene.light.direction = Vector3::new(0.0, 100.0, 0.0);
    scene.light.intensity = config.light_intensity;
    scene.gravity = config.gravity;
    scene.collisions_enabled = true;

    scene.view_camera = Some(ViewCamera {
        name: "viewcamera".to_string(),
        offset: Vector3::new(0.0, 3.0, -3.0),
        target: Vector3::new(0.0, -0.0001, 0.0),
    });

    // Cone marker showing where the player camera points in the view camera.
    let mut cone = Object::new(
        "dummycamera",
        Shape::Cylinder {
            diameter_top: 0.01,
            diameter_bottom: 0.2,
            height: 0.2,
        },
    );
    cone.rotate_x(Rad(FRAC_PI_2));
    scene.attach_to_camera(cone);

    build_ellipse_cage(&mut scene);

    scene.add_material_rgb("groundMat", 0.8, 0.8, 0.8, 0.0, 0.9).back_face_culling = false;
    scene.add_material_rgb("lowerMat", 0.8, 0.8, 0.8, 0.0, 0.9).back_face_culling = false;
    scene.add_material_rgb("Mat", 1.0, 1.0, 1.0, 0.0, 0.7);

    let mut ground = Object::new(
        "ground",
        Shape::Ground {
            width: config.ground_extent,
            height: config.ground_extent,
        },
    );
    ground.set_material("groundMat");
    ground.check_collisions = true;

    // The lower ground is a wider, inverted clone forming a pit floor.
    let mut lower_ground = ground.clone();
    lower_ground.set_name("lowerGround".to_string());
    lower_ground.set_material("lowerMat");
    lower_ground.set_scale_xyz(Vector3::new(4.0, -16.0, 4.0));

    scene.add_object(ground);
    scene.add_object(lower_ground);

    let placement = layout::generate_with(
        &PlacementRequest {
            count: config.crate_count,
            base_radius: config.ring_radius,
            radius_jitter: config.radius_jitter,
            angle_jitter: config.angle_jitter,
            height: config.crate_height,
        },
        rng,
    )?;

    for (index, position) in placement.iter().enumerate() {
        let name = if index == 0 {
            "crate".to_string()
        } else {
            format!("box{}", index)
        };
        let mut crate_box = Object::new(&name, Shape::Box { size: config.crate_size });
        crate_box.set_translation(*position);
        crate_box.set_material("Mat");
        crate_box.check_collisions = true;
        scene.add_object(crate_box);
    }

    let stats = scene.get_statistics();
    log::info!(
        "built crate-ring stage: {} objects ({} collidable), {} camera attachments",
        stats.object_count,
        stats.collidable_count,
        stats.attachment_count
    );

    Ok(scene)
}

/// Ring of ellipse wireframe loops around the player camera, visible in the
/// view camera as a cage marking the player's position.
fn build_ellipse_cage(scene: &mut Scene) {
    let points = ellipse_arc_points(0.5, 1.0);
    scene.add_material_rgb("red", 1.0, 0.0, 0.0, 0.0, 1.0);

    for index in 0..ELLIPSE_LOOPS {
        let name = if index == 0 {
            "e".to_string()
        } else {
            format!("el{}", index)
        };
        let mut loop_lines = Object::new(&name, Shape::Lines { points: points.clone() });
        loop_lines.set_material("red");
        loop_lines.set_rotation_y(Rad(5.0 * PI / 16.0 + index as f32 * PI / 16.0));
        scene.attach_to_camera(loop_lines);
    }
}

/// Half-ellipse arc in the local YZ plane: (0, b·sinθ, a·cosθ) for
/// θ ∈ [-π/2, π/2) in π/36 steps.
fn ellipse_arc_points(a: f32, b: f32) -> Vec<Vector3<f32>> {
    // Integer stepping keeps the point count stable against float drift.
    (0..36)
        .map(|step| {
            let theta = -FRAC_PI_2 + step as f32 * PI / 36.0;
            Vector3::new(0.0, b * theta.sin(), a * theta.cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_stage() -> Scene {
        let mut rng = StdRng::seed_from_u64(7);
        build_stage(&StageConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_stage_object_inventory() {
        let scene = default_stage();

        // Two grounds plus six crates.
        assert_eq!(scene.get_object_count(), 8);
        assert!(scene.find_object("ground").is_some());
        assert!(scene.find_object("lowerGround").is_some());
        assert!(scene.find_object("crate").is_some());
        for index in 1..6 {
            assert!(scene.find_object(&format!("box{}", index)).is_some());
        }

        // Cone marker plus the 23-loop ellipse cage.
        assert_eq!(scene.camera_attachments.len(), 1 + ELLIPSE_LOOPS);
    }

    #[test]
    fn test_stage_physics_configuration() {
        let scene = default_stage();
        assert!(scene.collisions_enabled);
        assert_eq!(scene.gravity, Vector3::new(0.0, -0.9, 0.0));
        assert!(scene.camera.apply_gravity);
        assert!(scene.camera.check_collisions);
        assert_eq!(scene.camera.ellipsoid_offset, Vector3::new(0.0, 1.0, 0.0));

        let stats = scene.get_statistics();
        assert_eq!(stats.collidable_count, 8);
    }

    #[test]
    fn test_stage_camera_rig() {
        let scene = default_stage();
        assert_eq!(scene.camera.position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(scene.camera.speed, 0.02);
        assert_eq!(scene.camera.angular_sensibility, 5000.0);

        let view = scene.view_camera.as_ref().unwrap();
        assert_eq!(view.offset, Vector3::new(0.0, 3.0, -3.0));
    }

    #[test]
    fn test_crates_sit_on_the_jittered_ring() {
        let scene = default_stage();
        let config = StageConfig::default();

        // Exact envelope of the anchored-at-max jitter curve.
        let lower = config.ring_radius * (1.0 + config.radius_jitter);
        let upper = config.ring_radius * (1.0 + 3.0 * config.radius_jitter);

        for object in scene.objects.iter().filter(|object| {
            matches!(object.shape, Shape::Box { .. })
        }) {
            let position = object.translation();
            assert_eq!(position.y, config.crate_height);
            let radius = (position.x * position.x + position.z * position.z).sqrt();
            assert!(radius >= lower - 1e-3 && radius < upper + 1e-3);
        }

        // Index 0 is never angle-jittered.
        let first = scene.find_object("crate").unwrap().translation();
        assert_eq!(first.z, 0.0);
        assert!(first.x > 0.0);
    }

    #[test]
    fn test_ground_materials_render_both_sides() {
        let scene = default_stage();
        let ground = scene.find_object("ground").unwrap();
        assert!(!scene.get_material_for_object(ground).back_face_culling);
        let lower = scene.find_object("lowerGround").unwrap();
        assert!(!scene.get_material_for_object(lower).back_face_culling);
    }

    #[test]
    fn test_invalid_config_propagates() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = StageConfig {
            crate_count: 0,
            ..StageConfig::default()
        };
        assert!(build_stage(&config, &mut rng).is_err());

        let config = StageConfig {
            ring_radius: 0.0,
            ..StageConfig::default()
        };
        assert!(build_stage(&config, &mut rng).is_err());
    }

    #[test]
    fn test_ellipse_arc_spans_half_circle() {
        let points = ellipse_arc_points(0.5, 1.0);
        assert_eq!(points.len(), 36);
        // Arc starts at the bottom of the ellipse and stays in the YZ plane.
        assert!((points[0].y + 1.0).abs() < 1e-5);
        for point in &points {
            assert_eq!(point.x, 0.0);
        }
    }
}
