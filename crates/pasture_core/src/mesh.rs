//! # Indexed Triangle Mesh
//!
//! A mesh is an ordered vertex list plus an ordered list of 16-bit indices,
//! read three at a time as counter-clockwise triangles.
//!
//! ## Invariants
//!
//! - Every index is smaller than the vertex count
//! - The index count is a multiple of 3
//!
//! Producers (terrain generator, model importer) uphold these by
//! construction; [`Mesh::validate`] checks them for anything built by hand.

use glam::Vec3;

use crate::error::{MeshError, MeshResult};
use crate::vertex::Vertex;

/// Index type used by every mesh.
pub type IndexType = u16;

/// Largest number of vertices addressable by [`IndexType`].
pub const MAX_VERTICES: usize = IndexType::MAX as usize + 1;

/// An indexed triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<IndexType>,
}

impl Mesh {
    /// Creates a mesh from its parts.
    ///
    /// The parts are taken as-is; call [`Mesh::validate`] when they come from
    /// an untrusted source.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, indices: Vec<IndexType>) -> Self {
        Self { vertices, indices }
    }

    /// Creates an empty mesh.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Vertex list.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable vertex list. The number of vertices cannot change through it.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Index list.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[IndexType] {
        &self.indices
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [IndexType; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Raw vertex bytes, ready for a GPU buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes, ready for a GPU buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Splits the mesh back into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<IndexType>) {
        (self.vertices, self.indices)
    }

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> MeshResult<()> {
        if self.vertices.len() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices(self.vertices.len()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| usize::from(index) >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Replaces every vertex normal with an area-weighted smooth normal.
    ///
    /// Normals are zeroed, then the unnormalized face normal
    /// `(b - a) x (c - a)` of every triangle is added to each of its three
    /// vertices, and finally every normal is normalized. Larger faces
    /// contribute proportionally more. A vertex whose accumulated normal is
    /// zero (unreferenced, or only touching degenerate triangles) keeps the
    /// zero vector.
    pub fn generate_smooth_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.vertices.len()];

        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (usize::from(i0), usize::from(i1), usize::from(i2));
            let p0 = self.vertices[i0].position();
            let p1 = self.vertices[i1].position();
            let p2 = self.vertices[i2].position();
            let face_normal = (p1 - p0).cross(p2 - p0);

            accumulated[i0] += face_normal;
            accumulated[i1] += face_normal;
            accumulated[i2] += face_normal;
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.set_normal(normal.normalize_or_zero());
        }
    }
}
