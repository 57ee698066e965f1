//! # Terrain Mesh
//!
//! Turns a displaced [`HeightGrid`] into a renderable patch:
//!
//! 1. **Coordinates**: grid indices map to `[-width/2, width/2]` on X and Z,
//!    heights are multiplied by `height_scale`
//! 2. **Texture coordinates**: the texture repeats 5 times across the patch
//! 3. **Normals**: central differences on interior vertices, straight up on
//!    the border
//! 4. **Indices**: two counter-clockwise triangles per grid cell
//!
//! The finished patch answers [`HeightQuery`] by bilinear interpolation.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use pasture_core::{HeightQuery, IndexType, Mesh, Vertex};

use crate::displacement::DisplacementSource;
use crate::grid::HeightGrid;

/// Number of times the terrain texture repeats along each axis.
pub const TEXTURE_REPEAT: f32 = 5.0;

/// Vertical exaggeration applied to slopes before computing normals.
pub const NORMAL_Y_SCALE: f32 = 4.0;

/// Terrain generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Edge length of the square patch in world units.
    pub width: f32,
    /// Multiplier applied to the unscaled heights.
    pub height_scale: f32,
    /// Subdivision levels; the patch has `2^iterations + 1` vertices per side.
    pub iterations: u32,
    /// Error decay per level is `2^-smoothness`; larger is smoother.
    pub smoothness: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 40.0,
            height_scale: 1.5,
            iterations: 4,
            smoothness: 0.95,
        }
    }
}

impl TerrainParams {
    /// Largest subdivision level whose vertices fit 16-bit indices.
    pub const MAX_ITERATIONS: u32 = 7;

    /// Returns parameters that are safe to generate from.
    ///
    /// Out-of-range values are replaced (iterations are clamped, unusable
    /// floats fall back to the defaults) and a warning is logged.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut params = self;

        if params.iterations > Self::MAX_ITERATIONS {
            tracing::warn!(
                requested = params.iterations,
                max = Self::MAX_ITERATIONS,
                "Terrain iterations clamped to fit 16-bit indices"
            );
            params.iterations = Self::MAX_ITERATIONS;
        }
        if !(params.width.is_finite() && params.width > 0.0) {
            tracing::warn!(width = params.width, "Invalid terrain width, using default");
            params.width = defaults.width;
        }
        if !params.height_scale.is_finite() {
            tracing::warn!(height_scale = params.height_scale, "Invalid height scale, using default");
            params.height_scale = defaults.height_scale;
        }
        if !params.smoothness.is_finite() {
            tracing::warn!(smoothness = params.smoothness, "Invalid smoothness, using default");
            params.smoothness = defaults.smoothness;
        }

        params
    }

    /// Vertices per side for these parameters.
    #[must_use]
    pub fn stride(&self) -> usize {
        (1usize << self.iterations.min(Self::MAX_ITERATIONS)) + 1
    }
}

/// A generated terrain patch.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    params: TerrainParams,
    stride: usize,
    mesh: Mesh,
}

impl TerrainMesh {
    /// Generates a terrain patch.
    ///
    /// Never fails: degenerate parameters are sanitized first, and
    /// `iterations = 0` yields a single flat cell.
    pub fn generate<S: DisplacementSource + ?Sized>(params: TerrainParams, source: &mut S) -> Self {
        let params = params.sanitized();
        let grid = HeightGrid::midpoint_displacement(params.iterations, params.smoothness, source);
        let stride = grid.stride();

        let mut vertices = map_coordinates(&grid, &params);
        compute_normals(&mut vertices, stride);
        let indices = grid_indices(stride);

        tracing::debug!(
            stride,
            vertices = vertices.len(),
            indices = indices.len(),
            "Generated terrain"
        );

        Self {
            params,
            stride,
            mesh: Mesh::new(vertices, indices),
        }
    }

    /// Parameters the patch was generated with, after sanitizing.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Vertices per side.
    #[inline]
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Edge length of the patch.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.params.width
    }

    /// The renderable mesh.
    #[inline]
    #[must_use]
    pub const fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the patch, returning its mesh.
    #[must_use]
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Scaled height of grid sample `(row, col)`.
    #[inline]
    #[must_use]
    pub fn sample_height(&self, row: usize, col: usize) -> f32 {
        self.mesh.vertices()[row * self.stride + col].position[1]
    }
}

impl HeightQuery for TerrainMesh {
    /// Bilinearly interpolated height; 0 outside the patch.
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let width = self.params.width;
        let half = width * 0.5;

        // Written so that NaN also lands outside.
        if !((-half..=half).contains(&x) && (-half..=half).contains(&z)) {
            return 0.0;
        }

        let last = (self.stride - 1) as f32;
        let fx = (x / width + 0.5) * last;
        let fz = (z / width + 0.5) * last;

        // On the far edge stay in the last cell and interpolate to its end.
        let ix = (fx.floor().max(0.0) as usize).min(self.stride - 2);
        let iz = (fz.floor().max(0.0) as usize).min(self.stride - 2);
        let dx = fx - ix as f32;
        let dz = fz - iz as f32;

        let y00 = self.sample_height(iz, ix);
        let y01 = self.sample_height(iz, ix + 1);
        let y10 = self.sample_height(iz + 1, ix);
        let y11 = self.sample_height(iz + 1, ix + 1);

        let top = (1.0 - dx) * y00 + dx * y01;
        let bottom = (1.0 - dx) * y10 + dx * y11;
        (1.0 - dz) * top + dz * bottom
    }

    fn half_extents(&self) -> (f32, f32) {
        let half = self.params.width * 0.5;
        (half, half)
    }
}

/// Generates a terrain mesh from bare parameters.
pub fn generate_terrain<S: DisplacementSource + ?Sized>(
    width: f32,
    height_scale: f32,
    iterations: u32,
    smoothness: f32,
    source: &mut S,
) -> Mesh {
    let params = TerrainParams {
        width,
        height_scale,
        iterations,
        smoothness,
    };
    TerrainMesh::generate(params, source).into_mesh()
}

fn map_coordinates(grid: &HeightGrid, params: &TerrainParams) -> Vec<Vertex> {
    let stride = grid.stride();
    let last = (stride - 1) as f32;
    let mut vertices = Vec::with_capacity(stride * stride);

    for r in 0..stride {
        for c in 0..stride {
            let u = c as f32 / last;
            let v = r as f32 / last;

            let position = Vec3::new(
                (u - 0.5) * params.width,
                grid.get(r, c) * params.height_scale,
                (v - 0.5) * params.width,
            );
            let tex_coords = Vec2::new(u, v) * TEXTURE_REPEAT;

            vertices.push(Vertex::new(position, Vertex::UP, tex_coords));
        }
    }

    vertices
}

fn compute_normals(vertices: &mut [Vertex], stride: usize) {
    let positions: Vec<Vec3> = vertices.iter().map(Vertex::position).collect();
    let at = |r: usize, c: usize| positions[r * stride + c];

    for r in 1..stride.saturating_sub(1) {
        for c in 1..stride - 1 {
            let left = at(r, c - 1);
            let right = at(r, c + 1);
            let up = at(r - 1, c);
            let down = at(r + 1, c);

            let tangent = Vec3::new(right.x - left.x, (right.y - left.y) * NORMAL_Y_SCALE, 0.0);
            let bitangent = Vec3::new(0.0, (down.y - up.y) * NORMAL_Y_SCALE, down.z - up.z);

            vertices[r * stride + c].set_normal(bitangent.cross(tangent).normalize());
        }
    }
    // Border vertices keep the up normal they were created with.
}

fn grid_indices(stride: usize) -> Vec<IndexType> {
    let cells = stride - 1;
    let mut indices = Vec::with_capacity(cells * cells * 6);
    let index = |r: usize, c: usize| (r * stride + c) as IndexType;

    for r in 0..cells {
        for c in 0..cells {
            indices.extend_from_slice(&[
                index(r, c),
                index(r + 1, c),
                index(r + 1, c + 1),
                index(r + 1, c + 1),
                index(r, c + 1),
                index(r, c),
            ]);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displacement::{ConstantDisplacement, RandomDisplacement};
    use crate::seed::WorldSeed;

    fn params(iterations: u32) -> TerrainParams {
        TerrainParams {
            iterations,
            ..TerrainParams::default()
        }
    }

    #[test]
    fn test_counts_for_every_iteration() {
        for iterations in 0..=TerrainParams::MAX_ITERATIONS {
            let terrain = TerrainMesh::generate(params(iterations), &mut ConstantDisplacement::ZERO);
            let cells = 1usize << iterations;
            let stride = cells + 1;

            assert_eq!(terrain.mesh().vertex_count(), stride * stride);
            assert_eq!(terrain.mesh().index_count(), 6 * cells * cells);
            assert_eq!(terrain.mesh().validate(), Ok(()));
        }
    }

    #[test]
    fn test_zero_iterations_is_single_cell() {
        let terrain = TerrainMesh::generate(params(0), &mut ConstantDisplacement(1.0));
        assert_eq!(terrain.stride(), 2);
        assert_eq!(terrain.mesh().indices(), &[0, 2, 3, 3, 1, 0]);
        assert!(terrain.mesh().vertices().iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn test_iterations_are_clamped() {
        let terrain = TerrainMesh::generate(params(12), &mut ConstantDisplacement::ZERO);
        assert_eq!(terrain.params().iterations, TerrainParams::MAX_ITERATIONS);
        assert_eq!(terrain.stride(), 129);
    }

    #[test]
    fn test_invalid_width_falls_back() {
        let bad = TerrainParams {
            width: -3.0,
            ..TerrainParams::default()
        };
        let terrain = TerrainMesh::generate(bad, &mut ConstantDisplacement::ZERO);
        assert_eq!(terrain.width(), TerrainParams::default().width);
    }

    #[test]
    fn test_coordinate_mapping() {
        let terrain = TerrainMesh::generate(params(2), &mut ConstantDisplacement::ZERO);
        let vertices = terrain.mesh().vertices();

        assert_eq!(vertices[0].position, [-20.0, 0.0, -20.0, 1.0]);
        assert_eq!(vertices[4].position, [20.0, 0.0, -20.0, 1.0]);
        assert_eq!(vertices[24].position, [20.0, 0.0, 20.0, 1.0]);
        assert_eq!(vertices[0].tex_coords, [0.0, 0.0]);
        assert_eq!(vertices[24].tex_coords, [5.0, 5.0]);
        assert_eq!(vertices[2].tex_coords, [2.5, 0.0]);
    }

    #[test]
    fn test_flat_terrain_normals_point_up() {
        let terrain = TerrainMesh::generate(params(3), &mut ConstantDisplacement::ZERO);
        for v in terrain.mesh().vertices() {
            assert!((v.normal() - Vec3::Y).length() < 1e-6);
            assert_eq!(v.normal[3], 0.0);
        }
    }

    #[test]
    fn test_interior_normals_are_unit_and_border_is_up() {
        let mut source = RandomDisplacement::from_seed(WorldSeed::new(11));
        let terrain = TerrainMesh::generate(params(4), &mut source);
        let stride = terrain.stride();

        for r in 0..stride {
            for c in 0..stride {
                let n = terrain.mesh().vertices()[r * stride + c].normal();
                let border = r == 0 || c == 0 || r == stride - 1 || c == stride - 1;
                if border {
                    assert_eq!(n, Vec3::Y);
                } else {
                    assert!((n.length() - 1.0).abs() < 1e-5);
                    assert!(n.y > 0.0, "Interior normal should face up, got {n}");
                }
            }
        }
    }

    #[test]
    fn test_triangles_wind_counter_clockwise_from_above() {
        let terrain = TerrainMesh::generate(params(2), &mut ConstantDisplacement::ZERO);
        let vertices = terrain.mesh().vertices();

        for [a, b, c] in terrain.mesh().triangles() {
            let pa = vertices[usize::from(a)].position();
            let pb = vertices[usize::from(b)].position();
            let pc = vertices[usize::from(c)].position();
            assert!((pb - pa).cross(pc - pa).y > 0.0);
        }
    }

    #[test]
    fn test_height_at_outside_is_zero() {
        let mut source = RandomDisplacement::from_seed(WorldSeed::new(5));
        let terrain = TerrainMesh::generate(params(4), &mut source);

        assert_eq!(terrain.height_at(20.001, 0.0), 0.0);
        assert_eq!(terrain.height_at(0.0, -20.5), 0.0);
        assert_eq!(terrain.height_at(f32::NAN, 0.0), 0.0);
    }

    #[test]
    fn test_height_at_far_edge_does_not_overrun() {
        let terrain = TerrainMesh::generate(params(3), &mut ConstantDisplacement(0.5));
        let stride = terrain.stride();

        let corner = terrain.height_at(20.0, 20.0);
        assert!((corner - terrain.sample_height(stride - 1, stride - 1)).abs() < 1e-5);
    }
}
