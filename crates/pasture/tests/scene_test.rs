//! # Scene Tests
//!
//! Builds the full scene from the bundled assets and runs it.

use std::path::{Path, PathBuf};

use pasture::{Camera, Scene, SceneConfig, SceneError};
use pasture_core::HeightQuery;

fn asset(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets").join(name)
}

fn bundled_scene() -> Scene {
    let config = SceneConfig::from_path(asset("pasture.toml")).expect("bundled config loads");
    Scene::load(config, asset("cow.obj")).expect("bundled scene builds")
}

/// Test: the bundled config matches the built-in defaults apart from the seed.
#[test]
fn test_bundled_config() {
    let config = SceneConfig::from_path(asset("pasture.toml")).expect("bundled config loads");
    let defaults = SceneConfig::default();

    assert_eq!(config.terrain, defaults.terrain);
    assert_eq!(config.herd, defaults.herd);
    assert_eq!(config.camera, defaults.camera);
    assert_eq!(config.model_group, "spot");
}

/// Test: one minute of simulation keeps every cow on the ground.
#[test]
fn test_minute_of_simulation() {
    let mut scene = bundled_scene();
    let frames = 60 * 60;

    for _ in 0..frames {
        scene.update();
    }

    assert_eq!(scene.herd().frame_count(), frames);
    assert_eq!(scene.instance_uniforms().len(), 80);

    let terrain = scene.terrain();
    let (half_width, half_depth) = terrain.half_extents();
    for cow in scene.herd().cows() {
        assert!(cow.position.x.abs() <= half_width);
        assert!(cow.position.z.abs() <= half_depth);
        assert!((cow.position.y - terrain.height_at(cow.position.x, cow.position.z)).abs() < 1e-5);
    }
}

/// Test: same config, same herd after the same number of frames.
#[test]
fn test_scene_is_deterministic() {
    let mut a = bundled_scene();
    let mut b = bundled_scene();
    for _ in 0..500 {
        a.update();
        b.update();
    }

    assert_eq!(a.terrain().mesh(), b.terrain().mesh());
    assert_eq!(a.instance_bytes(), b.instance_bytes());
}

/// Test: a steered camera walks the terrain at eye height.
#[test]
fn test_steered_camera() {
    let mut scene = bundled_scene();
    *scene.camera_mut() = Camera {
        velocity: 1.0,
        angular_velocity: 0.1,
        ..*scene.camera()
    };

    for _ in 0..600 {
        scene.update();
    }

    let camera = scene.camera();
    let ground = scene.terrain().height_at(camera.position.x, camera.position.z);
    assert!((camera.position.y - ground - camera.height).abs() < 1e-5);
    assert!((camera.heading - 1.0).abs() < 1e-3);

    let uniforms = scene.frame_uniforms(16.0 / 9.0);
    assert!(uniforms.view_projection.iter().flatten().all(|v| v.is_finite()));
}

/// Test: a missing model file surfaces as an import error.
#[test]
fn test_missing_model() {
    let result = Scene::load(SceneConfig::default(), asset("no_such_cow.obj"));
    assert!(matches!(result, Err(SceneError::Import(_))));
}
