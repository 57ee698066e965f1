//! # Per-Instance Uniforms
//!
//! One record per drawn instance: the model matrix and the matrix used to
//! transform normals. The 3×3 normal matrix is stored as three `float4`
//! columns to match shader-side alignment.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::herd::Cow;

/// Model and normal matrix for one instance.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceUniforms {
    /// Column-major model matrix.
    pub model_matrix: [[f32; 4]; 4],
    /// Column-major normal matrix, each column padded with a zero.
    pub normal_matrix: [[f32; 4]; 3],
}

impl InstanceUniforms {
    /// No transform at all; used for the terrain.
    pub const IDENTITY: Self = Self {
        model_matrix: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        normal_matrix: [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
    };

    /// Uniforms for a model matrix.
    ///
    /// The normal matrix is the upper-left 3×3 of the model matrix, which is
    /// exact for rotations and translations.
    #[must_use]
    pub fn from_model(model: Mat4) -> Self {
        let normal = Mat3::from_mat4(model);
        Self {
            model_matrix: model.to_cols_array_2d(),
            normal_matrix: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
        }
    }

    /// Places a cow at its position, turned to its heading.
    #[must_use]
    pub fn for_cow(cow: &Cow) -> Self {
        Self::from_model(Mat4::from_translation(cow.position) * Mat4::from_rotation_y(cow.heading))
    }
}

impl Default for InstanceUniforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<InstanceUniforms>(), 112);
        assert_eq!(std::mem::align_of::<InstanceUniforms>(), 4);
    }

    #[test]
    fn test_identity_matches_identity_matrix() {
        assert_eq!(InstanceUniforms::from_model(Mat4::IDENTITY), InstanceUniforms::IDENTITY);
    }

    #[test]
    fn test_cow_faces_heading() {
        let cow = Cow {
            position: Vec3::new(3.0, 1.0, -2.0),
            heading: std::f32::consts::FRAC_PI_2,
            target_heading: 0.0,
        };
        let uniforms = InstanceUniforms::for_cow(&cow);
        let model = Mat4::from_cols_array_2d(&uniforms.model_matrix);

        // Model space +Z is the cow's nose; at heading pi/2 it points along +X,
        // the same way the herd walks.
        let nose = model * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert!((nose - Vec4::new(4.0, 1.0, -2.0, 1.0)).length() < 1e-6);

        let normal = Mat3::from_cols_array_2d(&[
            uniforms.normal_matrix[0][..3].try_into().unwrap(),
            uniforms.normal_matrix[1][..3].try_into().unwrap(),
            uniforms.normal_matrix[2][..3].try_into().unwrap(),
        ]);
        assert!((normal * Vec3::Y - Vec3::Y).length() < 1e-6);
        assert!((normal * Vec3::Z - Vec3::X).length() < 1e-6);
        assert!(uniforms.normal_matrix.iter().all(|column| column[3] == 0.0));
    }
}
