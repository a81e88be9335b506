//! Confetti burst shown when the player wins.

use derive_new::new;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;
use tracing::{debug, instrument};

use crate::config::{CelebrationSettings, ConfigError};

/// Downward acceleration per tick, in screen heights.
const GRAVITY: f32 = 0.004;

/// One piece of confetti in normalized screen coordinates (0..1, y down).
#[derive(Debug, Clone, PartialEq, new)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    vx: f32,
    vy: f32,
    /// Fill color.
    pub color: Color,
    ttl: u16,
}

/// Active confetti, advanced once per UI tick.
#[derive(Debug)]
pub struct Celebration {
    settings: CelebrationSettings,
    palette: Vec<Color>,
    rng: StdRng,
    particles: Vec<Particle>,
}

impl Celebration {
    /// Creates an idle celebration.
    ///
    /// # Errors
    ///
    /// Fails if a configured color does not parse or the launch geometry is
    /// out of range.
    pub fn new(settings: CelebrationSettings, rng: StdRng) -> Result<Self, ConfigError> {
        let palette = settings.validate()?;
        Ok(Self {
            settings,
            palette,
            rng,
            particles: Vec::new(),
        })
    }

    /// Idle celebration with a fixed seed.
    pub fn seeded(settings: CelebrationSettings, seed: u64) -> Result<Self, ConfigError> {
        Self::new(settings, StdRng::seed_from_u64(seed))
    }

    /// Launches a burst from the configured origin.
    #[instrument(skip(self))]
    pub fn burst(&mut self) {
        let half_spread = self.settings.spread().to_radians() / 2.0;
        let origin_y = *self.settings.origin_y();
        let ttl = *self.settings.frames();

        for _ in 0..*self.settings.particle_count() {
            let angle = std::f32::consts::FRAC_PI_2 + self.rng.random_range(-half_spread..=half_spread);
            let speed = self.rng.random_range(0.02..0.05);
            let color = self.palette.choose(&mut self.rng).copied().unwrap_or(Color::White);
            self.particles.push(Particle::new(
                0.5,
                origin_y,
                speed * angle.cos(),
                -speed * angle.sin(),
                color,
                ttl,
            ));
        }
        debug!(particles = self.particles.len(), "Confetti launched");
    }

    /// Advances every particle one tick and drops expired ones.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
            p.ttl = p.ttl.saturating_sub(1);
        }
        self.particles.retain(|p| p.ttl > 0);
    }

    /// Stops the animation immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Whether any confetti is on screen.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Particles to draw.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
