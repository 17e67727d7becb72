//! Perspective camera: world-to-screen projection and pointer-ray
//! unprojection.

use glam::{Mat4, Vec3, Vec4};

use crate::raycast::Ray;

/// Vertical field of view, in degrees.
const FOV_Y_DEGREES: f32 = 75.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

/// A fixed perspective camera on the +z axis looking at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    viewport_width: f32,
    viewport_height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Camera {
    /// Creates a camera at `(0, 0, 20)` with the given viewport size.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            viewport_width,
            viewport_height,
        }
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Updates the viewport size; projection must follow the host surface.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn view_projection(&self) -> Mat4 {
        let aspect = self.viewport_width / self.viewport_height;
        let projection = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
        let view = Mat4::from_translation(-self.position);
        projection * view
    }

    /// Projects a world-space point to pixel coordinates (origin top-left).
    /// Returns `None` for points at or behind the camera plane.
    #[must_use]
    pub fn project_to_screen(&self, world: Vec3) -> Option<(f32, f32)> {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let x = (ndc_x * 0.5 + 0.5) * self.viewport_width;
        let y = (ndc_y * -0.5 + 0.5) * self.viewport_height;
        Some((x, y))
    }

    /// Builds a world-space ray through the given pixel coordinates.
    #[must_use]
    pub fn ray_from_screen(&self, x: f32, y: f32) -> Ray {
        let ndc_x = (x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = -((y / self.viewport_height) * 2.0 - 1.0);

        let inverse = self.view_projection().inverse();
        let near = inverse * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inverse * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        Ray {
            origin: self.position,
            direction: (far - near).normalize(),
        }
    }
}
