//! # Orbit Controller
//!
//! Interaction state machine translating raw pointer events into orbit
//! parameters (center, azimuth, elevation, distance) and from those into
//! the driven camera's view transform.
//!
//! A button press snapshots the pointer position and all four parameters
//! as the drag origin; motion while a drag is active updates parameters
//! relative to that origin, so replaying an identical event sequence from
//! identical parameters always yields the identical view transform. No
//! parameter is clamped: a negative distance or an out-of-range angle
//! simply wraps or inverts the view.

use super::Camera;
use crate::math::Transform;
use cgmath::{Vector3, Zero};
use std::f64::consts::PI;

/// Angle change per pixel while rotating.
const ROTATE_SENSITIVITY: f64 = 0.005;
/// Distance change per pixel while drag-zooming.
const ZOOM_SENSITIVITY: f64 = 0.02;
/// Center change per pixel while panning.
const PAN_SENSITIVITY: f64 = 0.02;

/// Pointer buttons as reported by the host windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Usually the left mouse button.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the middle mouse button.
    Tertiary,
}

/// Press or release half of a button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// What the active drag, if any, controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Idle,
    Rotating,
    Panning,
    Zooming,
}

/// Snapshot taken at the start of a gesture.
#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    x: f64,
    y: f64,
    center: Vector3<f64>,
    azimuth: f64,
    elevation: f64,
    distance: f64,
}

/// Orbit-style camera controller.
pub struct OrbitController {
    /// Point the camera orbits around.
    pub center: Vector3<f64>,
    /// Rotation around the vertical axis, radians.
    pub azimuth: f64,
    /// Tilt above the horizontal plane, radians.
    pub elevation: f64,
    /// Distance from the center.
    pub distance: f64,
    origin: DragOrigin,
    mode: DragMode,
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            center: Vector3::zero(),
            azimuth: 60.0 * PI / 180.0,
            elevation: 35.0 * PI / 180.0,
            distance: 2.0,
            origin: DragOrigin {
                x: 0.0,
                y: 0.0,
                center: Vector3::zero(),
                azimuth: 0.0,
                elevation: 0.0,
                distance: 0.0,
            },
            mode: DragMode::Idle,
        }
    }

    /// Sets the orbit parameters directly and applies them to the camera.
    pub fn set_view(
        &mut self,
        azimuth: f64,
        elevation: f64,
        distance: f64,
        camera: &mut Camera,
    ) {
        self.azimuth = azimuth;
        self.elevation = elevation;
        self.distance = distance;
        self.apply(camera);
    }

    /// Button press/release handler.
    ///
    /// A press selects the drag mode by button identity and snapshots the
    /// drag origin; any release returns to idle. Modifier bits are part of
    /// the input contract but do not affect the mode.
    pub fn button(&mut self, button: Button, state: ButtonState, _mods: u32, x: f64, y: f64) {
        match state {
            ButtonState::Pressed => {
                self.origin = DragOrigin {
                    x,
                    y,
                    center: self.center,
                    azimuth: self.azimuth,
                    elevation: self.elevation,
                    distance: self.distance,
                };
                self.mode = match button {
                    Button::Primary => DragMode::Rotating,
                    Button::Secondary => DragMode::Panning,
                    Button::Tertiary => DragMode::Zooming,
                };
            }
            ButtonState::Released => self.mode = DragMode::Idle,
        }
    }

    /// Pointer motion handler; a no-op while idle.
    pub fn motion(&mut self, x: f64, y: f64, camera: &mut Camera) {
        match self.mode {
            DragMode::Idle => return,
            DragMode::Rotating => {
                self.azimuth = self.origin.azimuth - ROTATE_SENSITIVITY * (x - self.origin.x);
                self.elevation = self.origin.elevation + ROTATE_SENSITIVITY * (y - self.origin.y);
            }
            DragMode::Zooming => {
                self.distance = self.origin.distance + ZOOM_SENSITIVITY * (y - self.origin.y);
            }
            DragMode::Panning => {
                // Rotate the screen-space drag by the current azimuth so
                // panning stays screen-relative at any orbit angle.
                let drag = Vector3::new(self.origin.x - x, y - self.origin.y, 0.0);
                self.center = self.origin.center
                    + Transform::rotation(Vector3::new(0.0, 0.0, -self.azimuth))
                        .transform_direction(drag * PAN_SENSITIVITY);
            }
        }
        self.apply(camera);
    }

    /// Scroll handler; exponential zoom, active regardless of drag state.
    pub fn scroll(&mut self, _x_offset: f64, y_offset: f64, camera: &mut Camera) {
        self.distance *= 2.0_f64.sqrt().powf(-y_offset);
        self.apply(camera);
    }

    /// Recomputes the camera's view transform from the orbit parameters:
    /// tilt by `elevation - pi/2`, back off by `distance`, spin by
    /// `-azimuth`, and recenter on `center`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.transform = Transform::from_euler(
            Vector3::new(self.elevation - PI / 2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -self.distance),
        ) * Transform::rotation(Vector3::new(0.0, 0.0, -self.azimuth))
            * Transform::translation(-self.center);
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn drag(
        controller: &mut OrbitController,
        camera: &mut Camera,
        button: Button,
        from: (f64, f64),
        to: (f64, f64),
    ) {
        controller.button(button, ButtonState::Pressed, 0, from.0, from.1);
        controller.motion(to.0, to.1, camera);
        controller.button(button, ButtonState::Released, 0, to.0, to.1);
    }

    #[test]
    fn rotating_drag_updates_angles_from_origin() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        let (azimuth0, elevation0) = (controller.azimuth, controller.elevation);

        drag(
            &mut controller,
            &mut camera,
            Button::Primary,
            (100.0, 100.0),
            (140.0, 80.0),
        );

        assert_relative_eq!(controller.azimuth, azimuth0 - 0.005 * 40.0, epsilon = 1e-12);
        assert_relative_eq!(
            controller.elevation,
            elevation0 + 0.005 * -20.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zooming_drag_updates_distance() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        let distance0 = controller.distance;

        drag(
            &mut controller,
            &mut camera,
            Button::Tertiary,
            (0.0, 0.0),
            (0.0, 50.0),
        );
        assert_relative_eq!(controller.distance, distance0 + 0.02 * 50.0, epsilon = 1e-12);
    }

    #[test]
    fn panning_is_screen_relative_at_zero_azimuth() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        controller.set_view(0.0, PI / 2.0, 5.0, &mut camera);

        drag(
            &mut controller,
            &mut camera,
            Button::Secondary,
            (10.0, 10.0),
            (0.0, 30.0),
        );
        // Drag of (dx, dy) = (-10, +20) maps to (origin.x - x, y - origin.y)
        // scaled by the pan sensitivity, unrotated since azimuth is zero.
        assert_relative_eq!(
            controller.center,
            Vector3::new(10.0 * 0.02, 20.0 * 0.02, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn motion_while_idle_changes_nothing() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        controller.apply(&mut camera);
        let before = camera.transform;

        controller.motion(500.0, 500.0, &mut camera);
        assert_eq!(camera.transform.0, before.0);
        assert_relative_eq!(controller.azimuth, 60.0 * PI / 180.0);
    }

    #[test]
    fn release_of_any_button_ends_the_drag() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();

        controller.button(Button::Primary, ButtonState::Pressed, 0, 0.0, 0.0);
        controller.button(Button::Tertiary, ButtonState::Released, 0, 0.0, 0.0);
        let azimuth = controller.azimuth;
        controller.motion(100.0, 0.0, &mut camera);
        assert_eq!(controller.azimuth, azimuth);
    }

    #[test]
    fn scroll_zoom_is_exponential_and_always_active() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        let distance0 = controller.distance;

        controller.scroll(0.0, 2.0, &mut camera);
        assert_relative_eq!(controller.distance, distance0 / 2.0, epsilon = 1e-12);
        controller.scroll(0.0, -4.0, &mut camera);
        assert_relative_eq!(controller.distance, distance0 * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn distance_is_never_clamped() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        controller.set_view(0.0, 0.0, 1.0, &mut camera);

        drag(
            &mut controller,
            &mut camera,
            Button::Tertiary,
            (0.0, 0.0),
            (0.0, -200.0),
        );
        assert!(controller.distance < 0.0);
    }

    #[test]
    fn replayed_gesture_is_deterministic() {
        let run = || {
            let mut controller = OrbitController::new();
            let mut camera = Camera::new();
            controller.set_view(0.3, 0.8, 4.0, &mut camera);
            controller.button(Button::Primary, ButtonState::Pressed, 0, 20.0, 30.0);
            controller.motion(60.0, 10.0, &mut camera);
            controller.motion(80.0, 90.0, &mut camera);
            controller.button(Button::Primary, ButtonState::Released, 0, 80.0, 90.0);
            controller.scroll(0.0, 1.5, &mut camera);
            camera.transform
        };
        assert_eq!(run().0, run().0);
    }

    #[test]
    fn view_transform_matches_composed_formula() {
        let mut controller = OrbitController::new();
        let mut camera = Camera::new();
        controller.center = Vector3::new(1.0, 2.0, 3.0);
        controller.set_view(0.4, 1.1, 6.0, &mut camera);

        let expected = Transform::from_euler(
            Vector3::new(1.1 - PI / 2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -6.0),
        ) * Transform::rotation(Vector3::new(0.0, 0.0, -0.4))
            * Transform::translation(Vector3::new(-1.0, -2.0, -3.0));
        assert_relative_eq!(camera.transform.0, expected.0, epsilon = 1e-12);
    }
}
