//! Camera Module
//!
//! Look-at camera state for the scene graph. This module is window-system
//! agnostic - it only holds the eye/center/up vectors and derives the view
//! matrix from them. Projection setup belongs to the embedder.
//!
//! The camera tracks a dirty flag so consumers can skip re-deriving the view
//! transform when nothing moved since they last looked.

use glam::{Mat4, Vec3};

/// Look-at camera state.
///
/// Setters mark the camera dirty; getters are pure reads. A freshly
/// constructed camera sits at the restore pose: centered on the origin with
/// the eye pushed out along +Z by the fixed epsilon distance, up = +Y.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    dirty: bool,
}

impl Camera {
    /// Fixed eye distance along Z for the restore pose.
    ///
    /// The scene graph is 2D; the eye only needs to be off the center plane
    /// by the smallest representable amount for the look-at derivation to be
    /// well-formed.
    pub const Z_EYE: f32 = f32::EPSILON;

    /// Create a camera at the restore pose.
    pub fn new() -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            center: Vec3::ZERO,
            up: Vec3::ZERO,
            dirty: false,
        };
        camera.restore();
        camera
    }

    /// Reset to the restore pose and clear the dirty flag.
    pub fn restore(&mut self) {
        self.eye = Vec3::new(0.0, 0.0, Self::Z_EYE);
        self.center = Vec3::ZERO;
        self.up = Vec3::new(0.0, 1.0, 0.0);
        self.dirty = false;
    }

    /// Eye (viewer) position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target position.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Up direction.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Move the eye, marking the camera dirty.
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
        self.dirty = true;
    }

    /// Move the look-at target, marking the camera dirty.
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.dirty = true;
    }

    /// Change the up direction, marking the camera dirty.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
        self.dirty = true;
    }

    /// Whether the camera changed since the dirty flag was last cleared.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set or clear the dirty flag (consumers clear it after re-deriving
    /// their view transform).
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Right-handed look-at view matrix from the stored vectors.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Camera | center = ({:.2},{:.2},{:.2})>",
            self.center.x, self.center.y, self.center.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_restore_pose() {
        let camera = Camera::new();

        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, Camera::Z_EYE));
        assert_eq!(camera.center(), Vec3::ZERO);
        assert_eq!(camera.up(), Vec3::new(0.0, 1.0, 0.0));
        assert!(!camera.is_dirty());
    }

    #[test]
    fn test_setters_mark_dirty() {
        let mut camera = Camera::new();

        camera.set_center(Vec3::new(1.0, 2.0, 0.0));
        assert!(camera.is_dirty());

        camera.set_dirty(false);
        camera.set_up(Vec3::new(1.0, 0.0, 0.0));
        assert!(camera.is_dirty());

        camera.restore();
        assert!(!camera.is_dirty());
    }

    #[test]
    fn test_display_two_decimals() {
        let mut camera = Camera::new();
        camera.set_center(Vec3::new(1.5, -2.0, 0.1));

        assert_eq!(camera.to_string(), "<Camera | center = (1.50,-2.00,0.10)>");
    }
}
