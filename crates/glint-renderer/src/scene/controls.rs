//! Damped orbit controls for the main camera.
//!
//! Input accumulates as pending spherical deltas around the target; each
//! `update` integrates part of them into the camera position.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use glint_config::schema::CameraConfig;

use super::camera::PerspectiveCamera;

/// Keeps the polar angle away from the poles, where `look_at` degenerates.
const POLAR_EPSILON: f32 = 1e-6;

/// Dolly factor per wheel notch at `zoom_speed = 1`.
const DOLLY_BASE: f32 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitControls {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            target: Vec3::from_array(config.target),
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Queue a drag of `(dx, dy)` pixels in a viewport `height` pixels tall.
    ///
    /// Dragging the full height turns the camera once around the target.
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        let height = height.max(1.0);
        self.pending_theta -= TAU * dx / height * self.rotate_speed;
        self.pending_phi -= TAU * dy / height * self.rotate_speed;
    }

    /// Queue a wheel step; negative `delta` moves toward the target.
    pub fn dolly(&mut self, delta: f32) {
        let step = DOLLY_BASE.powf(self.zoom_speed);
        if delta < 0.0 {
            self.pending_scale *= step;
        } else if delta > 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Whether any input is still waiting to be applied.
    #[cfg(test)]
    pub(crate) fn is_settling(&self) -> bool {
        self.pending_theta.abs() > POLAR_EPSILON
            || self.pending_phi.abs() > POLAR_EPSILON
            || (self.pending_scale - 1.0).abs() > POLAR_EPSILON
    }

    /// Move `camera` toward the pending input; returns whether it moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        let fraction = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        theta += self.pending_theta * fraction;
        phi += self.pending_phi * fraction;
        phi = phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        let radius = (radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        let previous = camera.position;
        camera.position = self.target + new_offset;
        camera.target = self.target;

        if self.enable_damping {
            self.pending_theta *= 1.0 - self.damping_factor;
            self.pending_phi *= 1.0 - self.damping_factor;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }
        self.pending_scale = 1.0;

        previous.distance_squared(camera.position) > POLAR_EPSILON * POLAR_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OrbitControls, PerspectiveCamera) {
        let config = CameraConfig::default();
        (
            OrbitControls::from_config(&config),
            PerspectiveCamera::from_config(&config, 1.0),
        )
    }

    fn azimuth(camera: &PerspectiveCamera) -> f32 {
        camera.position.x.atan2(camera.position.z)
    }

    #[test]
    fn idle_update_keeps_camera_still() {
        let (mut controls, mut camera) = setup();
        let before = camera.position;
        assert!(!controls.update(&mut camera));
        assert!((camera.position - before).length() < 1e-5);
    }

    #[test]
    fn damping_applies_a_fraction_per_tick() {
        let (mut controls, mut camera) = setup();
        // A quarter of the viewport height is a quarter turn
        controls.rotate(-25.0, 0.0, 100.0);
        controls.update(&mut camera);
        let expected = TAU / 4.0 * 0.05;
        assert!((azimuth(&camera) - expected).abs() < 1e-4);
        assert!(controls.is_settling());
    }

    #[test]
    fn damped_rotation_converges_on_input() {
        let (mut controls, mut camera) = setup();
        controls.rotate(-25.0, 0.0, 100.0);
        for _ in 0..600 {
            controls.update(&mut camera);
        }
        assert!((azimuth(&camera) - TAU / 4.0).abs() < 1e-3);
        assert!(!controls.is_settling());
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let (mut controls, mut camera) = setup();
        controls.enable_damping = false;
        controls.rotate(-25.0, 0.0, 100.0);
        assert!(controls.update(&mut camera));
        assert!((azimuth(&camera) - TAU / 4.0).abs() < 1e-4);
        assert!(!controls.is_settling());
    }

    #[test]
    fn rotation_keeps_distance() {
        let (mut controls, mut camera) = setup();
        controls.rotate(13.0, 7.0, 100.0);
        for _ in 0..50 {
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let (mut controls, mut camera) = setup();
        controls.enable_damping = false;
        controls.rotate(0.0, 1000.0, 100.0);
        controls.update(&mut camera);
        // Parked just off the north pole, still at the orbit distance
        assert!(camera.position.is_finite());
        assert!((camera.position.y - 0.5).abs() < 1e-4);
        assert!(camera.position.x.abs() < 1e-4);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let (mut controls, mut camera) = setup();
        controls.max_distance = 0.6;
        for _ in 0..20 {
            controls.dolly(1.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 0.6).abs() < 1e-4);

        controls.dolly(-1.0);
        controls.update(&mut camera);
        assert!(camera.position.length() < 0.6);
    }
}
