//! # Height Grid
//!
//! A square, row-major grid of unscaled heights and the midpoint
//! displacement ("diamond-square") pass that fills it.
//!
//! ## Subdivision
//!
//! ```text
//! level 0: one cell        level 1: four cells
//!
//!   A---+---B               +---+---+
//!   |       |               | x | x |
//!   +   C   +      -->      +---+---+
//!   |       |               | x | x |
//!   D---+---E               +---+---+
//! ```
//!
//! For every cell the square step sets the centre `C` to the mean of its
//! corners plus an error, then the diamond step sets each edge midpoint to
//! the mean of that edge's endpoints plus an independent error. The error
//! range shrinks by `2^-smoothness` after every level.
//!
//! The far corner of a cell is looked up modulo the stride, so the grid
//! behaves as if it tiled. Within a single patch the far corner never
//! actually wraps.

use crate::displacement::DisplacementSource;

/// Corner and midpoint rows/columns of one subdivision cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    r0: usize,
    c0: usize,
    r1: usize,
    c1: usize,
    rmid: usize,
    cmid: usize,
}

/// Square heightfield of `stride × stride` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    stride: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Creates a flat grid.
    ///
    /// # Panics
    ///
    /// Panics if `stride < 2`; a patch needs at least one cell.
    #[must_use]
    pub fn new(stride: usize) -> Self {
        assert!(stride >= 2, "height grid needs at least 2 samples per side, got {stride}");
        Self {
            stride,
            heights: vec![0.0; stride * stride],
        }
    }

    /// Samples per side.
    #[inline]
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// All heights in row-major order.
    #[inline]
    #[must_use]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Flat index of a sample.
    #[inline]
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.stride && col < self.stride, "({row}, {col}) outside grid");
        row * self.stride + col
    }

    /// Wraps a row or column index around the grid.
    #[inline]
    #[must_use]
    pub const fn wrap(&self, i: usize) -> usize {
        i % self.stride
    }

    /// Height at a sample.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.heights[self.index(row, col)]
    }

    /// Sets the height at a sample.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, height: f32) {
        let index = self.index(row, col);
        self.heights[index] = height;
    }

    /// Builds a displaced grid with `2^iterations + 1` samples per side.
    ///
    /// The four corners are seeded to 0 before the first level.
    pub fn midpoint_displacement<S: DisplacementSource + ?Sized>(
        iterations: u32,
        smoothness: f32,
        source: &mut S,
    ) -> Self {
        let mut grid = Self::new((1usize << iterations) + 1);
        grid.seed_corners();

        let decay = (-smoothness).exp2();
        let mut variance = 1.0f32;

        for level in 0..iterations {
            let squares_per_edge = 1usize << level;
            let square_size = 1usize << (iterations - level);

            for y in 0..squares_per_edge {
                for x in 0..squares_per_edge {
                    let cell = grid.cell(y * square_size, x * square_size, square_size);
                    grid.square_step(cell, variance, source);
                    grid.diamond_step(cell, variance, source);
                }
            }

            variance *= decay;
        }

        grid
    }

    fn seed_corners(&mut self) {
        let last = self.stride - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            self.set(row, col, 0.0);
        }
    }

    fn cell(&self, row: usize, col: usize, size: usize) -> Cell {
        Cell {
            r0: row,
            c0: col,
            r1: self.wrap(row + size),
            c1: self.wrap(col + size),
            rmid: row + size / 2,
            cmid: col + size / 2,
        }
    }

    fn square_step<S: DisplacementSource + ?Sized>(&mut self, cell: Cell, variance: f32, source: &mut S) {
        let y00 = self.get(cell.r0, cell.c0);
        let y01 = self.get(cell.r0, cell.c1);
        let y11 = self.get(cell.r1, cell.c1);
        let y10 = self.get(cell.r1, cell.c0);

        let mean = (y00 + y01 + y11 + y10) * 0.25;
        self.set(cell.rmid, cell.cmid, mean + source.displacement(variance));
    }

    fn diamond_step<S: DisplacementSource + ?Sized>(&mut self, cell: Cell, variance: f32, source: &mut S) {
        let y00 = self.get(cell.r0, cell.c0);
        let y01 = self.get(cell.r0, cell.c1);
        let y11 = self.get(cell.r1, cell.c1);
        let y10 = self.get(cell.r1, cell.c0);

        // top, left, right, bottom
        let top = (y00 + y01) * 0.5 + source.displacement(variance);
        self.set(cell.r0, cell.cmid, top);
        let left = (y00 + y10) * 0.5 + source.displacement(variance);
        self.set(cell.rmid, cell.c0, left);
        let right = (y01 + y11) * 0.5 + source.displacement(variance);
        self.set(cell.rmid, cell.c1, right);
        let bottom = (y10 + y11) * 0.5 + source.displacement(variance);
        self.set(cell.r1, cell.cmid, bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displacement::{ConstantDisplacement, RandomDisplacement};
    use crate::seed::WorldSeed;

    #[test]
    fn test_stride_per_iteration() {
        for iterations in 0..=7 {
            let grid = HeightGrid::midpoint_displacement(iterations, 1.0, &mut ConstantDisplacement::ZERO);
            assert_eq!(grid.stride(), (1 << iterations) + 1);
            assert_eq!(grid.heights().len(), grid.stride() * grid.stride());
        }
    }

    #[test]
    fn test_zero_displacement_is_flat() {
        let grid = HeightGrid::midpoint_displacement(5, 1.0, &mut ConstantDisplacement::ZERO);
        assert!(grid.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_corners_stay_seeded() {
        let mut source = RandomDisplacement::from_seed(WorldSeed::new(3));
        let grid = HeightGrid::midpoint_displacement(4, 0.5, &mut source);
        let last = grid.stride() - 1;

        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            assert_eq!(grid.get(row, col), 0.0, "Corner ({row}, {col}) was displaced");
        }
    }

    #[test]
    fn test_single_level_with_full_error() {
        let grid = HeightGrid::midpoint_displacement(1, 1.0, &mut ConstantDisplacement(1.0));

        // Centre and all four edge midpoints get mean 0 + error 1.
        assert_eq!(grid.get(1, 1), 1.0);
        assert_eq!(grid.get(0, 1), 1.0);
        assert_eq!(grid.get(1, 0), 1.0);
        assert_eq!(grid.get(1, 2), 1.0);
        assert_eq!(grid.get(2, 1), 1.0);
    }

    #[test]
    fn test_variance_decays_between_levels() {
        // smoothness 1 halves the error after the first level
        let grid = HeightGrid::midpoint_displacement(2, 1.0, &mut ConstantDisplacement(1.0));

        let close = |a: f32, b: f32| (a - b).abs() < 1e-6;

        assert_eq!(grid.get(2, 2), 1.0);
        // Second level, first cell: corners 0, 1, 1, 1 -> 0.75 + 0.5
        assert!(close(grid.get(1, 1), 1.25));
        // Bottom edge of the first cell: (1 + 1) / 2 + 0.5
        assert!(close(grid.get(2, 1), 1.5));
        // Top edge of the second cell: (1 + 0) / 2 + 0.5
        assert!(close(grid.get(0, 3), 1.0));
    }

    #[test]
    fn test_wrap() {
        let grid = HeightGrid::new(5);
        assert_eq!(grid.wrap(4), 4);
        assert_eq!(grid.wrap(5), 0);
        assert_eq!(grid.wrap(7), 2);
        assert_eq!(grid.index(2, 3), 13);
    }

    #[test]
    #[should_panic(expected = "at least 2 samples")]
    fn test_degenerate_stride_rejected() {
        let _ = HeightGrid::new(1);
    }
}
