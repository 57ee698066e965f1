//! # Herd Simulation
//!
//! Cows wander by easing their heading toward a target heading that is
//! re-drawn for the whole herd at a fixed tick interval. After each step a
//! cow is clamped into the terrain and placed on the ground.

use std::f32::consts::TAU;

use glam::Vec3;
use pasture_core::HeightQuery;
use pasture_procedural::WorldSeed;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::HerdConfig;

/// One wandering cow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cow {
    /// World position; `y` sits on the ground.
    pub position: Vec3,
    /// Facing, in radians about +Y. Zero faces +Z.
    pub heading: f32,
    /// Heading the cow is turning toward.
    pub target_heading: f32,
}

impl Cow {
    /// Advances the cow by one tick.
    pub fn step<H: HeightQuery + ?Sized>(&mut self, config: &HerdConfig, dt: f32, ground: &H) {
        let damping = config.turn_damping;
        self.heading = damping * self.heading + (1.0 - damping) * self.target_heading;

        let (sin, cos) = self.heading.sin_cos();
        let distance = config.speed * dt;
        self.position.x += sin * distance;
        self.position.z += cos * distance;

        self.position = ground.constrain(self.position);
    }
}

/// All cows plus the random stream that steers them.
#[derive(Clone, Debug)]
pub struct Herd {
    config: HerdConfig,
    cows: Vec<Cow>,
    rng: ChaCha8Rng,
    frame_count: u64,
}

impl Herd {
    /// Spawns `config.count` cows inside the central `spawn_fraction` of the
    /// patch, each facing a random direction.
    pub fn spawn<H: HeightQuery + ?Sized>(config: HerdConfig, ground: &H, mut rng: ChaCha8Rng) -> Self {
        let (half_width, half_depth) = ground.half_extents();
        let spread_x = 2.0 * half_width * config.spawn_fraction;
        let spread_z = 2.0 * half_depth * config.spawn_fraction;

        let cows = (0..config.count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * spread_x;
                let z = (rng.gen::<f32>() - 0.5) * spread_z;
                let heading = TAU * rng.gen::<f32>();
                Cow {
                    position: ground.constrain(Vec3::new(x, 0.0, z)),
                    heading,
                    target_heading: heading,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = cows.len(), "Spawned herd");

        Self {
            config,
            cows,
            rng,
            frame_count: 0,
        }
    }

    /// Spawns a herd from the herd stream of a world seed.
    pub fn from_seed<H: HeightQuery + ?Sized>(config: HerdConfig, ground: &H, seed: WorldSeed) -> Self {
        Self::spawn(config, ground, seed.derive(WorldSeed::HERD).rng())
    }

    /// Advances every cow by one tick.
    ///
    /// Targets are re-drawn on tick 0 and every `retarget_interval` ticks
    /// after that, before anyone moves.
    pub fn tick<H: HeightQuery + ?Sized>(&mut self, dt: f32, ground: &H) {
        if self.frame_count % self.config.retarget_interval.max(1) == 0 {
            self.retarget();
        }

        for cow in &mut self.cows {
            cow.step(&self.config, dt, ground);
        }

        self.frame_count += 1;
    }

    fn retarget(&mut self) {
        tracing::trace!(frame = self.frame_count, "Herd retargeting");
        for cow in &mut self.cows {
            cow.target_heading = TAU * self.rng.gen::<f32>();
        }
    }

    /// The cows.
    #[inline]
    #[must_use]
    pub fn cows(&self) -> &[Cow] {
        &self.cows
    }

    /// Ticks run so far.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Behaviour the herd was spawned with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &HerdConfig {
        &self.config
    }
}
