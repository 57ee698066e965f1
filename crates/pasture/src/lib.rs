//! # Pasture
//!
//! A herd of cows wandering over a procedurally generated pasture, prepared
//! for instanced drawing.
//!
//! ## Frame Loop
//!
//! ```text
//! Scene::update ──► Herd::tick ──► Cow::step ──► HeightQuery::constrain
//!               └─► Camera::update
//!               └─► InstanceUniforms::for_cow (one per cow)
//! ```
//!
//! Meshes ([`Scene::terrain`], [`Scene::cow_mesh`]) are static after
//! construction; only the uniforms change between frames.
//!
//! ## Example
//!
//! ```rust
//! use pasture::{Scene, SceneConfig};
//! use pasture_import::Model;
//!
//! let model = Model::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\ng spot\nf 1 2 3\n", true);
//! let mut scene = Scene::build(SceneConfig::default(), &model)?;
//!
//! scene.update();
//! assert_eq!(scene.instance_uniforms().len(), 80);
//! # Ok::<(), pasture::SceneError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod config;
pub mod error;
pub mod herd;
pub mod instances;
pub mod scene;

pub use camera::{Camera, FrameUniforms, FAR_PLANE, NEAR_PLANE};
pub use config::{CameraConfig, HerdConfig, SceneConfig};
pub use error::{ConfigError, ConfigResult, SceneError, SceneResult};
pub use herd::{Cow, Herd};
pub use instances::InstanceUniforms;
pub use scene::Scene;
