//! Particle burst engine: radial bursts of short-lived particles with linear
//! motion and lifetime-based fade. All active particles live in one pool
//! advanced once per frame; each expires independently when its lifetime
//! counter runs out, there is no bulk clear.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Monotonic id, stable for the particle's lifetime. The presentation
    /// layer keys its DOM elements on it.
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks; the particle is dropped when this reaches zero.
    pub life: u32,
}

impl Particle {
    /// Linear fade: 1.0 at spawn, exactly 0.0 on the final tick.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life as f32 / PARTICLE_LIFETIME_TICKS as f32
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
    next_id: u64,
}

impl ParticleField {
    /// Seeded so particle speeds are reproducible on the host.
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Spawn one burst of `BURST_COUNT` particles at `origin`. Velocity
    /// angles are evenly spaced around the full circle; speeds are uniform
    /// in `[PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX)`.
    pub fn spawn_burst(&mut self, origin: Vec2) {
        for i in 0..BURST_COUNT {
            let angle = TAU * i as f32 / BURST_COUNT as f32;
            let speed = self.rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
            let id = self.next_id;
            self.next_id += 1;
            self.particles.push(Particle {
                id,
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: PARTICLE_LIFETIME_TICKS,
            });
        }
    }

    /// Advance every particle one tick and drop the ones whose lifetime just
    /// ran out. Off-screen positions are allowed; nothing clamps them.
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.life -= 1;
            p.life > 0
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
