//! # Pasture Procedural Generation
//!
//! Deterministic terrain patches built by midpoint displacement.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same terrain
//! 2. **Injected randomness**: generation takes a [`DisplacementSource`]
//! 3. **Never fails**: degenerate parameters produce a minimal valid patch
//!
//! ## Core Components
//!
//! - [`WorldSeed`]: root of every random stream
//! - [`HeightGrid`]: flat row-major heightfield and the diamond-square pass
//! - [`TerrainMesh`]: renderable patch plus bilinear [`HeightQuery`]
//!
//! ## Example
//!
//! ```rust
//! use pasture_core::HeightQuery;
//! use pasture_procedural::{RandomDisplacement, TerrainMesh, TerrainParams, WorldSeed};
//!
//! let mut source = RandomDisplacement::from_seed(WorldSeed::new(42));
//! let terrain = TerrainMesh::generate(TerrainParams::default(), &mut source);
//!
//! assert_eq!(terrain.mesh().vertex_count(), 17 * 17);
//! assert_eq!(terrain.height_at(100.0, 0.0), 0.0);
//! ```
//!
//! [`HeightQuery`]: pasture_core::HeightQuery

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod displacement;
pub mod grid;
pub mod seed;
pub mod terrain;

pub use displacement::{ConstantDisplacement, DisplacementSource, RandomDisplacement};
pub use grid::HeightGrid;
pub use seed::WorldSeed;
pub use terrain::{generate_terrain, TerrainMesh, TerrainParams, NORMAL_Y_SCALE, TEXTURE_REPEAT};
