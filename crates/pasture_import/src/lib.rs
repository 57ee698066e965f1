//! # Pasture Model Import
//!
//! Loads models written in a subset of the Wavefront OBJ format into
//! indexed meshes.
//!
//! ## Supported Records
//!
//! | Record | Meaning |
//! |--------|---------|
//! | `v x y z` | position |
//! | `vt u v` | texture coordinate |
//! | `vn x y z` | normal |
//! | `f a b c ...` | polygon, fan-triangulated |
//! | `g name` | start a new group |
//!
//! Face slots are `v`, `v/t`, `v//n` or `v/t/n`, 1-based, or negative to
//! count back from the most recent entry. Every distinct slot becomes one
//! output vertex per group.
//!
//! ## Example
//!
//! ```rust
//! use pasture_import::Model;
//!
//! let source = "v 0 0 0\nv 1 0 0\nv 1 0 1\nv 0 0 1\ng quad\nf 1 2 3 4\n";
//! let model = Model::parse(source, false);
//!
//! let quad = model.group("quad").unwrap();
//! assert_eq!(quad.mesh.indices(), &[0, 1, 2, 0, 2, 3]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builder;
pub mod error;
pub mod face;
pub mod model;
pub mod record;

pub use builder::ModelBuilder;
pub use error::{ImportError, ImportResult};
pub use face::{AttributeCounts, FaceVertex};
pub use model::{Group, Model, DEFAULT_GROUP_NAME};
pub use record::Record;
