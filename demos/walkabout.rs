//! # Walkabout Demo
//!
//! Builds the crate-ring stage and simulates a short arrow-key walk without a
//! renderer attached: the keyboard input device queues motion, and the camera
//! commits it once per simulated frame.
//!
//! ```bash
//! RUST_LOG=info cargo run --example walkabout
//! ```

use anyhow::Result;
use crateyard::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

fn main() -> Result<()> {
    env_logger::init();

    // Seeded so repeated runs print the same layout.
    let mut rng = StdRng::seed_from_u64(2024);
    let mut stage = build_stage(&StageConfig::default(), &mut rng)?;

    let stats = stage.get_statistics();
    println!(
        "stage: {} objects, {} camera attachments, {} materials",
        stats.object_count, stats.attachment_count, stats.material_count
    );

    println!("\ncrate ring:");
    for object in stage.objects.iter().filter(|object| matches!(object.shape, Shape::Box { .. })) {
        let position = object.translation();
        let radius = (position.x * position.x + position.z * position.z).sqrt();
        println!(
            "  {:<8} at ({:>7.3}, {:>5.2}, {:>7.3})  radius {:>6.3}",
            object.name, position.x, position.y, position.z, radius
        );
    }

    // Input devices registered the way a host application would.
    let mut inputs = CameraInputManager::new();
    inputs.add(Box::new(KeyboardWalkInput::new()));
    inputs.add(Box::new(MouseSearchInput::new()));
    println!("\ninput devices: {:?}", inputs.names());

    // Walk forward for a second's worth of frames, then turn right and keep
    // walking. Events are fed to the device directly since there is no window.
    let mut walk = KeyboardWalkInput::new();
    walk.attach();

    println!("\nwalking forward...");
    walk.on_key(KeyCode::ArrowUp, ElementState::Pressed);
    for _ in 0..60 {
        walk.check_inputs(&mut stage.camera);
        stage.camera.commit();
    }
    report_camera(&stage.camera);

    println!("turning right while walking...");
    walk.on_key(KeyCode::ArrowRight, ElementState::Pressed);
    for _ in 0..60 {
        walk.check_inputs(&mut stage.camera);
        stage.camera.commit();
    }
    report_camera(&stage.camera);

    Ok(())
}

fn report_camera(camera: &FreeCamera) {
    println!(
        "  camera at ({:.3}, {:.3}, {:.3}), yaw {:.3} rad",
        camera.position.x, camera.position.y, camera.position.z, camera.rotation.y
    );
}
