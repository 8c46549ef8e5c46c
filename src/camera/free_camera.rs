use cgmath::{Matrix3, Rad, Vector2, Vector3, Zero};

/// First-person style camera description.
///
/// Input devices accumulate motion into `pending_move` / `pending_rotation`;
/// the host engine (or [`FreeCamera::commit`] in engine-less demos and tests)
/// folds the pending motion into the transform. Collision response and
/// gravity integration stay with the host engine - the `ellipsoid`,
/// `apply_gravity` and `check_collisions` fields are configuration it reads.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    pub name: String,
    pub position: Vector3<f32>,
    /// Pitch (x) and yaw (y) in radians.
    pub rotation: Vector2<f32>,
    /// Translation speed per input step.
    pub speed: f32,
    /// Yaw applied per turn input step, in radians.
    pub angular_speed: f32,
    /// Mouse-look divisor: larger values mean slower rotation.
    pub angular_sensibility: f32,
    /// Near clip distance.
    pub min_z: f32,
    /// Collision ellipsoid half-extents, consumed by the host engine.
    pub ellipsoid: Vector3<f32>,
    pub ellipsoid_offset: Vector3<f32>,
    pub apply_gravity: bool,
    pub check_collisions: bool,
    /// Flips the forward axis for right-handed host scenes.
    pub right_handed: bool,
    /// World-space translation queued by input devices.
    pub pending_move: Vector3<f32>,
    /// Rotation (pitch, yaw) queued by input devices.
    pub pending_rotation: Vector2<f32>,
}

impl FreeCamera {
    pub fn new(name: &str, position: Vector3<f32>) -> Self {
        Self {
            name: name.to_string(),
            position,
            rotation: Vector2::zero(),
            speed: 2.0,
            angular_speed: 0.05,
            angular_sensibility: 2000.0,
            min_z: 1.0,
            ellipsoid: Vector3::new(0.5, 1.0, 0.5),
            ellipsoid_offset: Vector3::zero(),
            apply_gravity: false,
            check_collisions: false,
            right_handed: false,
            pending_move: Vector3::zero(),
            pending_rotation: Vector2::zero(),
        }
    }

    /// Current orientation as a rotation matrix (yaw, then pitch).
    pub fn orientation(&self) -> Matrix3<f32> {
        Matrix3::from_angle_y(Rad(self.rotation.y)) * Matrix3::from_angle_x(Rad(self.rotation.x))
    }

    /// Unit-ish forward vector in world space (local +Z rotated by the
    /// current orientation).
    pub fn forward(&self) -> Vector3<f32> {
        self.orientation() * Vector3::new(0.0, 0.0, 1.0)
    }

    /// Queue a camera-space move: the direction is rotated into world space
    /// by the current orientation and added to the pending translation.
    pub fn queue_local_move(&mut self, mut direction: Vector3<f32>) {
        if self.right_handed {
            direction.z = -direction.z;
        }
        self.pending_move += self.orientation() * direction;
    }

    /// Queue a rotation delta (pitch, yaw) in radians.
    pub fn queue_rotation(&mut self, pitch: f32, yaw: f32) {
        self.pending_rotation += Vector2::new(pitch, yaw);
    }

    /// Fold queued motion into the transform and clear the queues.
    ///
    /// Hosts with a physics step apply the pending values through their own
    /// collision/gravity pass instead of calling this.
    pub fn commit(&mut self) {
        self.position += self.pending_move;
        self.rotation += self.pending_rotation;
        self.pending_move = Vector3::zero();
        self.pending_rotation = Vector2::zero();
    }
}

/// Secondary camera parented to the player camera, looking at a fixed point
/// in the parent's space (the demo's over-the-shoulder view).
#[derive(Debug, Clone)]
pub struct ViewCamera {
    pub name: String,
    /// Offset from the parent camera, in the parent's space.
    pub offset: Vector3<f32>,
    /// Look-at target, in the parent's space.
    pub target: Vector3<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_local_move_with_zero_rotation_is_world_move() {
        let mut camera = FreeCamera::new("camera", Vector3::zero());
        camera.queue_local_move(Vector3::new(0.0, 0.0, 0.5));
        assert!((camera.pending_move.x).abs() < EPSILON);
        assert!((camera.pending_move.z - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_local_move_follows_yaw() {
        let mut camera = FreeCamera::new("camera", Vector3::zero());
        camera.rotation.y = FRAC_PI_2;
        camera.queue_local_move(Vector3::new(0.0, 0.0, 1.0));
        // Local +Z yawed by 90 degrees lands on world +X.
        assert!((camera.pending_move.x - 1.0).abs() < EPSILON);
        assert!((camera.pending_move.z).abs() < EPSILON);
    }

    #[test]
    fn test_right_handed_flips_forward_axis() {
        let mut camera = FreeCamera::new("camera", Vector3::zero());
        camera.right_handed = true;
        camera.queue_local_move(Vector3::new(0.0, 0.0, 1.0));
        assert!((camera.pending_move.z + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_commit_applies_and_clears_pending_motion() {
        let mut camera = FreeCamera::new("camera", Vector3::new(0.0, 1.0, 0.0));
        camera.queue_local_move(Vector3::new(0.0, 0.0, 2.0));
        camera.queue_rotation(0.1, -0.2);
        camera.commit();

        assert!((camera.position.z - 2.0).abs() < EPSILON);
        assert!((camera.rotation.x - 0.1).abs() < EPSILON);
        assert!((camera.rotation.y + 0.2).abs() < EPSILON);
        assert_eq!(camera.pending_move, Vector3::zero());
        assert_eq!(camera.pending_rotation, Vector2::zero());
    }
}
