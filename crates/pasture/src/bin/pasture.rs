//! # Pasture Headless Demo
//!
//! Builds the scene, runs it for a number of frames without a window and
//! logs what a renderer would upload.
//!
//! ```bash
//! pasture [--config assets/pasture.toml] [--model assets/cow.obj] [--frames 600]
//!
//! # more detail
//! RUST_LOG=pasture=debug pasture
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use pasture::{Scene, SceneConfig, SceneResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_MODEL: &str = "assets/cow.obj";
const DEFAULT_FRAMES: u64 = 600;
const ASPECT: f32 = 16.0 / 9.0;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    model: PathBuf,
    frames: u64,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Self {
            config: None,
            model: PathBuf::from(DEFAULT_MODEL),
            frames: DEFAULT_FRAMES,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let mut value = || iter.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--model" => args.model = PathBuf::from(value()?),
                "--frames" => {
                    let raw = value()?;
                    args.frames = raw.parse().map_err(|_| format!("invalid frame count `{raw}`"))?;
                }
                other => return Err(format!("unknown argument `{other}`")),
            }
        }

        Ok(args)
    }
}

fn run(args: &Args) -> SceneResult<()> {
    let config = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };

    let mut scene = Scene::load(config, &args.model)?;
    let report_every = scene.config().herd.retarget_interval.max(1);

    for frame in 0..args.frames {
        scene.update();

        if frame % report_every == 0 {
            let camera = scene.camera();
            tracing::debug!(
                frame,
                camera_x = camera.position.x,
                camera_z = camera.position.z,
                heading = camera.heading,
                "Frame"
            );
        }
    }

    let frame = scene.frame_uniforms(ASPECT);
    let centroid = scene
        .herd()
        .cows()
        .iter()
        .fold(glam::Vec3::ZERO, |sum, cow| sum + cow.position)
        / scene.herd().cows().len().max(1) as f32;

    tracing::info!(
        frames = scene.herd().frame_count(),
        instance_bytes = scene.instance_bytes().len(),
        frame_bytes = bytemuck::bytes_of(&frame).len(),
        terrain_index_bytes = scene.terrain().mesh().index_bytes().len(),
        cow_index_bytes = scene.cow_mesh().index_bytes().len(),
        herd_x = centroid.x,
        herd_z = centroid.z,
        "Run complete"
    );

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: pasture [--config PATH] [--model PATH] [--frames N]");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Pasture failed");
            ExitCode::FAILURE
        }
    }
}
