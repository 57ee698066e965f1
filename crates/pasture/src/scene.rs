//! # Scene
//!
//! Owns everything a frame needs: the terrain patch, the cow mesh, the herd
//! and the camera. A renderer uploads the meshes once, then each frame calls
//! [`Scene::update`] and uploads [`Scene::instance_uniforms`] plus
//! [`Scene::frame_uniforms`].

use std::path::Path;

use pasture_core::Mesh;
use pasture_import::Model;
use pasture_procedural::{RandomDisplacement, TerrainMesh, WorldSeed};

use crate::camera::{Camera, FrameUniforms};
use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::herd::Herd;
use crate::instances::InstanceUniforms;

/// The running scene.
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    terrain: TerrainMesh,
    cow_mesh: Mesh,
    herd: Herd,
    camera: Camera,
    instances: Vec<InstanceUniforms>,
}

impl Scene {
    /// Builds a scene around an already parsed cow model.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Config`] if the config is invalid and
    /// [`SceneError::MissingGroup`] if the model lacks the configured group.
    pub fn build(config: SceneConfig, model: &Model) -> SceneResult<Self> {
        config.validate()?;

        let cow_mesh = model
            .group(&config.model_group)
            .map(|group| group.mesh.clone())
            .ok_or_else(|| SceneError::MissingGroup {
                name: config.model_group.clone(),
                available: model.groups().iter().map(|g| g.name.clone()).collect(),
            })?;

        let mut source = RandomDisplacement::from_seed(config.seed.derive(WorldSeed::TERRAIN));
        let terrain = TerrainMesh::generate(config.terrain, &mut source);

        let herd = Herd::from_seed(config.herd, &terrain, config.seed);
        let camera = Camera::new(&config.camera);
        let instances = herd.cows().iter().map(InstanceUniforms::for_cow).collect();

        tracing::info!(
            seed = config.seed.value(),
            terrain_vertices = terrain.mesh().vertex_count(),
            cow_vertices = cow_mesh.vertex_count(),
            cows = herd.cows().len(),
            "Scene built"
        );

        Ok(Self {
            config,
            terrain,
            cow_mesh,
            herd,
            camera,
            instances,
        })
    }

    /// Loads the cow model from disk, generating smooth normals, and builds
    /// the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Import`] if the model cannot be read, otherwise
    /// as [`Scene::build`].
    pub fn load(config: SceneConfig, model_path: impl AsRef<Path>) -> SceneResult<Self> {
        let model = Model::from_path(model_path, true)?;
        Self::build(config, &model)
    }

    /// Advances the herd and camera by one frame and refreshes the instance
    /// uniforms.
    pub fn update(&mut self) {
        let dt = self.config.frame_duration();

        self.herd.tick(dt, &self.terrain);
        self.camera.update(dt, &self.terrain);

        for (uniforms, cow) in self.instances.iter_mut().zip(self.herd.cows()) {
            *uniforms = InstanceUniforms::for_cow(cow);
        }
    }

    /// Per-frame uniforms for a viewport aspect ratio.
    #[must_use]
    pub fn frame_uniforms(&self, aspect: f32) -> FrameUniforms {
        FrameUniforms::new(&self.camera, aspect)
    }

    /// One entry per cow, in herd order.
    #[inline]
    #[must_use]
    pub fn instance_uniforms(&self) -> &[InstanceUniforms] {
        &self.instances
    }

    /// The instance uniforms as raw bytes.
    #[inline]
    #[must_use]
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// The terrain is drawn untransformed.
    #[inline]
    #[must_use]
    pub const fn terrain_uniforms(&self) -> InstanceUniforms {
        InstanceUniforms::IDENTITY
    }

    /// The generated terrain.
    #[inline]
    #[must_use]
    pub const fn terrain(&self) -> &TerrainMesh {
        &self.terrain
    }

    /// The mesh drawn for every cow.
    #[inline]
    #[must_use]
    pub const fn cow_mesh(&self) -> &Mesh {
        &self.cow_mesh
    }

    /// The herd.
    #[inline]
    #[must_use]
    pub const fn herd(&self) -> &Herd {
        &self.herd
    }

    /// The camera.
    #[inline]
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera, for steering.
    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Configuration the scene was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }
}
