//! Headless demo: a floor, a slowly tumbling box, and the three coordinate
//! axes as colored beams, orbited by a scripted drag gesture.
//!
//! Rendering goes into the recording backend; each simulated frame prints
//! how many vertices the scene submitted. Run with `RUST_LOG=debug` to see
//! the library's diagnostics.

use anyhow::Result;
use cgmath::Vector3;
use orrery::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.background = Vector3::new(0.05, 0.05, 0.1);

    scene.attach(shapes::cuboid(Vector3::new(10.0, 10.0, 0.1)));
    let origin = Vector3::new(0.0, 0.0, 0.0);
    scene
        .attach(shapes::beam(origin, Vector3::new(5.0, 0.0, 0.0), 0.2))
        .color = Some(Vector3::new(1.0, 0.0, 0.0));
    scene
        .attach(shapes::beam(origin, Vector3::new(0.0, 5.0, 0.0), 0.2))
        .color = Some(Vector3::new(0.0, 1.0, 0.0));
    scene
        .attach(shapes::beam(origin, Vector3::new(0.0, 0.0, 5.0), 0.2))
        .color = Some(Vector3::new(0.0, 0.0, 1.0));
    scene.attach(shapes::cuboid_at(
        Vector3::new(2.0, 1.0, 1.0),
        Vector3::new(0.0, 0.0, 1.0),
    ));
    let tumbling = scene.root.children().len() - 1;

    let mut camera = Camera::new();
    let mut controller = OrbitController::new();
    controller.set_view(0.0, std::f64::consts::FRAC_PI_2, 10.0, &mut camera);

    // Scripted orbit: press, drag across the window, release, zoom in.
    controller.button(Button::Primary, ButtonState::Pressed, 0, 256.0, 256.0);

    let mut backend = RecordingBackend::new(512, 512);
    for frame in 0..10 {
        controller.motion(256.0 + frame as f64 * 12.0, 256.0, &mut camera);

        let node = &mut scene.root.children_mut()[tumbling];
        node.transform = node.transform * Transform::rotation(Vector3::new(0.01, 0.0, 0.0));

        backend.clear_commands();
        camera.render(&scene, &mut backend);
        println!(
            "frame {:2}: azimuth {:+.3} rad, {} vertices submitted",
            frame,
            controller.azimuth,
            backend.vertex_count()
        );
    }

    controller.button(Button::Primary, ButtonState::Released, 0, 364.0, 256.0);
    controller.scroll(0.0, 2.0, &mut camera);
    println!("zoomed to distance {:.3}", controller.distance);

    Ok(())
}
