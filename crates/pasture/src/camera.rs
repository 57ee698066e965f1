//! # Camera
//!
//! A walking camera: it turns at `angular_velocity`, moves forward at
//! `velocity`, and stays a fixed height above the terrain.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use pasture_core::HeightQuery;

use crate::config::CameraConfig;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 100.0;

/// First-person camera walking on the terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Facing, in radians about +Y. Zero looks down -Z.
    pub heading: f32,
    /// Look up (positive) or down, in radians.
    pub pitch: f32,
    /// Forward speed in world units per second.
    pub velocity: f32,
    /// Turn rate in radians per second.
    pub angular_velocity: f32,
    /// Eye height above the ground.
    pub height: f32,
}

impl Camera {
    /// Camera at the origin, looking down -Z.
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.height, 0.0),
            heading: 0.0,
            pitch: 0.0,
            velocity: config.velocity,
            angular_velocity: config.angular_velocity,
            height: config.height,
        }
    }

    /// Unit vector the camera walks along.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.heading.sin_cos();
        Vec3::new(-sin, 0.0, -cos)
    }

    /// Turns, walks and re-seats the camera on the ground.
    pub fn update<H: HeightQuery + ?Sized>(&mut self, dt: f32, ground: &H) {
        self.heading += self.angular_velocity * dt;
        self.position += self.forward() * (self.velocity * dt);
        self.position = ground.constrain(self.position);
        self.position.y += self.height;
    }

    /// World to camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.pitch)
            * Mat4::from_rotation_y(-self.heading)
            * Mat4::from_translation(-self.position)
    }

    /// Perspective projection, with a wider field of view in portrait.
    #[must_use]
    pub fn projection_matrix(aspect: f32) -> Mat4 {
        let fov_y = if aspect > 1.0 { FRAC_PI_4 } else { FRAC_PI_3 };
        Mat4::perspective_rh(fov_y, aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Projection times view.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        Self::projection_matrix(aspect) * self.view_matrix()
    }
}

/// Uniforms shared by every draw in a frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Column-major projection times view.
    pub view_projection: [[f32; 4]; 4],
}

impl FrameUniforms {
    /// Uniforms for a camera at a viewport aspect ratio.
    #[must_use]
    pub fn new(camera: &Camera, aspect: f32) -> Self {
        Self {
            view_projection: camera.view_projection(aspect).to_cols_array_2d(),
        }
    }
}
