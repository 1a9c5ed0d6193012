//! Decorative particle stream and bubble field.
//!
//! DESIGN
//! ======
//! Positions come from a seeded `StdRng`, so one seed lays out the same
//! field on the server and in the browser. The particle stream only runs
//! after hydration; the bubble field is rendered on both sides and must
//! match.
//!
//! A particle lives through three steps: spawned at rest, launched a moment
//! later (which starts its CSS transition), then expired once the transition
//! has had time to finish.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Pause between spawning and launching so the browser paints the resting
/// position first.
pub const LAUNCH_DELAY_MS: u64 = 10;
/// Length of the launch transition; a particle expires after this.
pub const FADE_MS: u64 = 1500;
pub const TRAVEL_PX: f64 = 300.0;
/// Oldest particles are dropped beyond this.
pub const MAX_LIVE: usize = 16;
const DRIFT_PX: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub left_pct: f64,
    pub drift_px: f64,
    pub launched: bool,
}

impl Particle {
    pub fn style(&self) -> String {
        if self.launched {
            format!(
                "left: {:.1}%; transform: translateX({TRAVEL_PX}px) translateY({:.1}px); opacity: 0; transition: all {FADE_MS}ms ease-out;",
                self.left_pct, self.drift_px
            )
        } else {
            format!("left: {:.1}%; opacity: 0.7;", self.left_pct)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleStream {
    rng: StdRng,
    next_id: u64,
    live: Vec<Particle>,
}

impl ParticleStream {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), next_id: 0, live: Vec::new() }
    }

    /// Add a resting particle and return its id.
    pub fn spawn(&mut self) -> u64 {
        if self.live.len() >= MAX_LIVE {
            self.live.remove(0);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(Particle {
            id,
            left_pct: self.rng.random_range(0.0..100.0),
            drift_px: self.rng.random_range(-DRIFT_PX..DRIFT_PX),
            launched: false,
        });
        id
    }

    /// Start the travel transition. `false` if the particle is gone.
    pub fn launch(&mut self, id: u64) -> bool {
        match self.live.iter_mut().find(|p| p.id == id) {
            Some(particle) => {
                particle.launched = true;
                true
            }
            None => false,
        }
    }

    /// Remove a finished particle. `false` if it was already dropped.
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|p| p.id != id);
        self.live.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Particle> {
        self.live.iter().find(|p| p.id == id)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.live
    }
}

/// One floating bubble behind the platform grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Bubble {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; animation-duration: {:.2}s; animation-delay: {:.1}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Lay out `count` bubbles. Delays are staggered by 0.3s in order.
pub fn bubble_field(count: usize, seed: u64) -> Vec<Bubble> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0_u32..)
        .take(count)
        .map(|i| Bubble {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(3.0..5.0),
            delay_s: f64::from(i) * 0.3,
        })
        .collect()
}
