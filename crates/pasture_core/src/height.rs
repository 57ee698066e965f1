//! # Height Queries
//!
//! The interface anything walking on the terrain uses to find the ground.

use glam::Vec3;

/// A square patch of ground centred on the origin.
///
/// Implementors return 0 for points outside the patch; that is a defined
/// fallback, not an error.
pub trait HeightQuery {
    /// Ground height at world position `(x, z)`.
    fn height_at(&self, x: f32, z: f32) -> f32;

    /// Half of the patch extent along X and Z.
    fn half_extents(&self) -> (f32, f32);

    /// Clamps `position` into the patch and snaps it to the ground.
    fn constrain(&self, position: Vec3) -> Vec3 {
        let (half_width, half_depth) = self.half_extents();
        let x = position.x.clamp(-half_width, half_width);
        let z = position.z.clamp(-half_depth, half_depth);
        Vec3::new(x, self.height_at(x, z), z)
    }
}

/// Perfectly flat ground of a given size. Handy for tests and previews.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatGround {
    /// Full width of the patch.
    pub width: f32,
    /// Height of the ground plane.
    pub height: f32,
}

impl HeightQuery for FlatGround {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let half = self.width * 0.5;
        if x < -half || x > half || z < -half || z > half {
            0.0
        } else {
            self.height
        }
    }

    fn half_extents(&self) -> (f32, f32) {
        (self.width * 0.5, self.width * 0.5)
    }
}
