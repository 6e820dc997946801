//! Viewer camera: fixed perspective looking at the origin

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Perspective camera for the product viewport.
///
/// The camera sits on the +Z axis looking at the origin; the model rotates,
/// not the camera. Distance changes with viewport width so narrow layouts
/// keep the whole product in frame.
#[derive(Debug, Clone)]
pub struct ViewerCamera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewerCamera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov_y: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl ViewerCamera {
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Move the camera along +Z, keeping it aimed at the origin.
    pub fn set_distance(&mut self, distance: f32) {
        self.position = Point3::new(0.0, 0.0, distance);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn default_camera_matches_showcase_setup() {
        let camera = ViewerCamera::default();
        assert_relative_eq!(camera.position.z, 5.0);
        assert_relative_eq!(camera.fov_y, 45.0_f32.to_radians());
        assert_relative_eq!(camera.near, 0.1);
        assert_relative_eq!(camera.far, 1000.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = ViewerCamera::default();
        let clip = camera.view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn set_distance_keeps_target() {
        let mut camera = ViewerCamera::default();
        camera.set_distance(7.0);
        assert_relative_eq!(camera.position.z, 7.0);
        assert_eq!(camera.target, Point3::origin());
    }

    #[test]
    fn degenerate_aspect_is_ignored() {
        let mut camera = ViewerCamera::default();
        camera.set_aspect(1.5);
        camera.set_aspect(0.0);
        camera.set_aspect(f32::NAN);
        assert_relative_eq!(camera.aspect, 1.5);
    }
}
