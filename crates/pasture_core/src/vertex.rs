//! # Vertex Format
//!
//! The single vertex layout shared by the terrain and imported models.
//!
//! ```text
//! offset  0: position   float4  (x, y, z, 1)
//! offset 16: normal     float4  (x, y, z, 0)
//! offset 32: tex_coords float2  (u, v)
//! stride 40
//! ```
//!
//! The renderer builds its vertex descriptor from [`Vertex::LAYOUT`], so the
//! field order here is a binary contract.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// A packed mesh vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Homogeneous position, `w` is always 1.
    pub position: [f32; 4],
    /// Surface normal, `w` is always 0.
    pub normal: [f32; 4],
    /// Texture coordinates.
    pub tex_coords: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<Vertex>() == 40);

/// Component format of a vertex attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Four 32-bit floats.
    Float4,
}

impl AttributeFormat {
    /// Size of the attribute in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float4 => 16,
        }
    }
}

/// One attribute of the vertex layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader attribute slot.
    pub location: u32,
    /// Component format.
    pub format: AttributeFormat,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Full description of the vertex buffer layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    /// Attributes in slot order.
    pub attributes: [VertexAttribute; 3],
    /// Distance in bytes between consecutive vertices.
    pub stride: usize,
}

impl Vertex {
    /// Layout consumed by the rendering layer.
    pub const LAYOUT: VertexLayout = VertexLayout {
        attributes: [
            VertexAttribute {
                location: 0,
                format: AttributeFormat::Float4,
                offset: 0,
            },
            VertexAttribute {
                location: 1,
                format: AttributeFormat::Float4,
                offset: 16,
            },
            VertexAttribute {
                location: 2,
                format: AttributeFormat::Float2,
                offset: 32,
            },
        ],
        stride: std::mem::size_of::<Self>(),
    };

    /// Up-facing normal used wherever no better normal is known.
    pub const UP: Vec3 = Vec3::Y;

    /// Creates a vertex from a position, normal and texture coordinate.
    #[inline]
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, tex_coords: Vec2) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            normal: normal.extend(0.0).to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Returns the position without the homogeneous component.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec4::from_array(self.position).truncate()
    }

    /// Returns the normal without the homogeneous component.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        Vec4::from_array(self.normal).truncate()
    }

    /// Replaces the normal, keeping `w = 0`.
    #[inline]
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal.extend(0.0).to_array();
    }

    /// Returns the texture coordinates.
    #[inline]
    #[must_use]
    pub fn tex_coords(&self) -> Vec2 {
        Vec2::from_array(self.tex_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size_and_layout() {
        assert_eq!(Vertex::LAYOUT.stride, 40);

        let mut offset = 0;
        for attribute in Vertex::LAYOUT.attributes {
            assert_eq!(attribute.offset, offset, "Attributes must be tightly packed");
            offset += attribute.format.size();
        }
        assert_eq!(offset, Vertex::LAYOUT.stride);
    }

    #[test]
    fn test_homogeneous_components() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::new(0.5, 0.25));
        assert_eq!(v.position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(v.tex_coords, [0.5, 0.25]);
    }

    #[test]
    fn test_vertex_bytemuck() {
        let v = Vertex::new(Vec3::X, Vec3::Y, Vec2::ZERO);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 40);
        // normal.y sits right after the four position floats and normal.x
        assert_eq!(&bytes[20..24], &1.0f32.to_ne_bytes());
    }
}
