//! Camera control seam
//!
//! Pointer and gesture handling is an external collaborator; what the engine
//! owns is the per-frame settle step that runs after scene mutation and
//! before presentation. External input layers feed deltas into a rig, and
//! [`CameraRig::settle`] integrates them into the camera.

use crate::foundation::math::Vec3;
use crate::scene::Camera;

/// Per-frame camera settling step
pub trait CameraRig {
    /// Apply pending input to the camera. Runs once per frame, after the
    /// animation driver and before presentation.
    fn settle(&mut self, camera: &mut Camera, dt: f32);
}

/// Orbit rig with exponential damping.
///
/// Keeps the camera on a sphere around the target. `rotate` and `zoom`
/// accumulate velocity; each settle step integrates one frame of it and
/// decays it by the damping factor, giving the familiar eased orbit feel.
pub struct DampedOrbitRig {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
    damping: f32,
}

impl DampedOrbitRig {
    /// Minimum orbit distance; zooming stops here
    const MIN_DISTANCE: f32 = 1.0;

    /// Create a rig orbiting the origin at the given distance.
    ///
    /// Yaw and pitch start at zero, placing the camera on +Z.
    pub fn new(distance: f32) -> Self {
        Self {
            target: Vec3::zeros(),
            distance: distance.max(Self::MIN_DISTANCE),
            yaw: 0.0,
            pitch: 0.0,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
            damping: 0.05,
        }
    }

    /// Override the damping factor in (0, 1]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.clamp(1e-3, 1.0);
        self
    }

    /// Feed a rotation delta (radians) from the input layer
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw_velocity += yaw_delta;
        self.pitch_velocity += pitch_delta;
    }

    /// Feed a zoom delta (world units) from the input layer
    pub fn zoom(&mut self, delta: f32) {
        self.zoom_velocity += delta;
    }

    /// Current orbit distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn orbit_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }
}

impl Default for DampedOrbitRig {
    fn default() -> Self {
        Self::new(40.0)
    }
}

impl CameraRig for DampedOrbitRig {
    fn settle(&mut self, camera: &mut Camera, _dt: f32) {
        self.yaw += self.yaw_velocity;
        self.pitch += self.pitch_velocity;
        self.distance = (self.distance + self.zoom_velocity).max(Self::MIN_DISTANCE);

        // Keep the camera off the poles so the up vector stays valid.
        let pitch_limit = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);

        // Damping is per frame, not scaled by dt.
        let decay = 1.0 - self.damping;
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;

        camera.set_position(self.orbit_position());
        camera.look_at(self.target, Vec3::new(0.0, 1.0, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn settle_keeps_camera_on_orbit_sphere() {
        let mut rig = DampedOrbitRig::new(40.0);
        let mut camera = Camera::default();
        rig.rotate(0.3, 0.1);
        for _ in 0..50 {
            rig.settle(&mut camera, 1.0 / 60.0);
            let offset = camera.position - camera.target;
            assert_relative_eq!(offset.magnitude(), rig.distance(), epsilon = 1e-3);
        }
    }

    #[test]
    fn velocity_decays_toward_rest() {
        let mut rig = DampedOrbitRig::new(40.0);
        let mut camera = Camera::default();
        rig.rotate(1.0, 0.0);
        rig.settle(&mut camera, 1.0 / 60.0);
        let early = camera.position;
        for _ in 0..500 {
            rig.settle(&mut camera, 1.0 / 60.0);
        }
        let settled = camera.position;
        for _ in 0..10 {
            rig.settle(&mut camera, 1.0 / 60.0);
        }
        // Movement has effectively stopped after the damping runs out.
        assert!((camera.position - settled).magnitude() < 1e-3);
        assert!((settled - early).magnitude() > 1e-2);
    }

    #[test]
    fn pitch_is_clamped_away_from_poles() {
        let mut rig = DampedOrbitRig::new(10.0);
        let mut camera = Camera::default();
        rig.rotate(0.0, 10.0);
        for _ in 0..100 {
            rig.settle(&mut camera, 1.0 / 60.0);
        }
        let offset = camera.position - camera.target;
        assert!(offset.y < rig.distance(), "camera must not reach the pole");
    }

    #[test]
    fn zoom_respects_minimum_distance() {
        let mut rig = DampedOrbitRig::new(5.0);
        let mut camera = Camera::default();
        rig.zoom(-100.0);
        for _ in 0..20 {
            rig.settle(&mut camera, 1.0 / 60.0);
        }
        assert!(rig.distance() >= 1.0);
    }
}
