//! Perspective camera
//!
//! Position, orientation, and projection parameters, with on-demand matrix
//! generation in a right-handed Y-up coordinate system. The camera is mutated
//! by the camera rig each frame and by viewport-resize events; nothing here
//! depends on a rendering backend.

use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// 3D perspective camera
///
/// # Coordinate System
/// Right-handed, Y-up. The view matrix is a standard look-at; backends apply
/// their own clip-space conventions downstream.
///
/// # Performance Notes
/// Matrices are computed on demand rather than cached; for this scene the
/// cost is negligible next to presentation.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view in degrees (stored as radians)
    /// * `aspect` - Viewport width / height
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Move the camera, keeping target and orientation
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Point the camera at a target with the given up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// Logs only significant changes to stay quiet during live resizes.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-camera view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 40.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(75.0),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn view_matrix_moves_target_onto_negative_z() {
        let camera = Camera::perspective(Vec3::new(0.0, 0.0, 40.0), 75.0, 16.0 / 9.0, 0.1, 1000.0);
        let view = camera.view_matrix();
        let p = view.transform_point(&Point3::origin());
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -40.0, epsilon = 1e-4);
    }

    #[test]
    fn aspect_ratio_updates() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(2.0);
        assert_relative_eq!(camera.aspect, 2.0);
    }
}
