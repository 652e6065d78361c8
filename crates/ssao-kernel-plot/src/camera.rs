//! Camera used to project 3D plots onto the image plane.

use glam::{Mat4, Vec2, Vec3};

/// A perspective camera for viewing the plot.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Orbits the camera around the target.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let radius = (self.position - self.target).length();
        let mut theta = (self.position.x - self.target.x).atan2(self.position.z - self.target.z);
        let mut phi = ((self.position.y - self.target.y) / radius).acos();

        theta -= delta_x;
        phi = (phi - delta_y).clamp(0.01, std::f32::consts::PI - 0.01);

        self.position = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }

    /// Resets the camera to look at the given bounding box.
    pub fn look_at_box(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let size = (max - min).length().max(1e-3);

        self.target = center;
        self.position = center + Vec3::new(0.0, 0.0, size * 1.5);
        self.near = size * 0.001;
        self.far = size * 100.0;
    }

    /// Projects a world-space point to pixel coordinates (origin top-left).
    ///
    /// Returns `None` for points behind the camera.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<Vec2> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width as f32,
            (0.5 - ndc.y * 0.5) * height as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_perspective() {
        let camera = Camera::new(1.0);
        let proj = camera.projection_matrix();
        // Perspective matrix has non-zero w division
        assert!(proj.w_axis.z != 0.0);
    }

    #[test]
    fn test_look_at_box_frames_center() {
        let mut camera = Camera::new(1.0);
        camera.look_at_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::ONE);
        assert_eq!(camera.target, Vec3::new(0.0, 0.5, 0.0));
        assert!(camera.near < 0.01 && camera.far > 100.0);
    }

    #[test]
    fn test_project_target_is_center() {
        let mut camera = Camera::new(800.0 / 600.0);
        camera.look_at_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::ONE);
        camera.orbit(0.6, 0.4);
        let p = camera.project(camera.target, 800, 600).unwrap();
        assert!((p.x - 400.0).abs() < 0.5);
        assert!((p.y - 300.0).abs() < 0.5);
    }

    #[test]
    fn test_project_up_is_up() {
        let camera = Camera::new(1.0);
        let base = camera.project(Vec3::ZERO, 100, 100).unwrap();
        let top = camera.project(Vec3::Y * 0.5, 100, 100).unwrap();
        // Screen y grows downward
        assert!(top.y < base.y);
    }

    #[test]
    fn test_project_behind_camera() {
        let camera = Camera::new(1.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 10.0), 100, 100).is_none());
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new(1.0);
        let before = (camera.position - camera.target).length();
        camera.orbit(1.0, 0.3);
        let after = (camera.position - camera.target).length();
        assert!((before - after).abs() < 1e-4);
    }
}
