//! # Pasture Core
//!
//! The data model shared by every Pasture crate.
//!
//! ## Core Components
//!
//! - [`Vertex`]: 40-byte packed vertex (position, normal, texture coordinates)
//! - [`Mesh`]: vertex list plus 16-bit triangle indices
//! - [`HeightQuery`]: ground height lookup used by anything walking on terrain
//!
//! Meshes are produced by `pasture_procedural` (terrain) and `pasture_import`
//! (models) and handed read-only to a renderer, which uploads
//! [`Mesh::vertex_bytes`] and [`Mesh::index_bytes`] as-is.
//!
//! ## Example
//!
//! ```rust
//! use glam::{Vec2, Vec3};
//! use pasture_core::{Mesh, Vertex};
//!
//! let vertices = vec![
//!     Vertex::new(Vec3::ZERO, Vertex::UP, Vec2::ZERO),
//!     Vertex::new(Vec3::Z, Vertex::UP, Vec2::Y),
//!     Vertex::new(Vec3::X, Vertex::UP, Vec2::X),
//! ];
//! let mesh = Mesh::new(vertices, vec![0, 1, 2]);
//! assert!(mesh.validate().is_ok());
//! assert_eq!(mesh.vertex_bytes().len(), 3 * 40);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod height;
pub mod mesh;
pub mod vertex;

pub use error::{MeshError, MeshResult};
pub use height::{FlatGround, HeightQuery};
pub use mesh::{IndexType, Mesh, MAX_VERTICES};
pub use vertex::{AttributeFormat, Vertex, VertexAttribute, VertexLayout};
