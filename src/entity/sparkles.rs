//! The sparkle trail drawn behind Pac-Man while powered up.

use glam::IVec2;
use rand::Rng;

use crate::constants::{animation::SPARKLE_DELAY, odds, N_SPARKLE_PARTICLES, STANDARD_SPRITE_SIZE};
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::sprite::{Flip, Role, Sprite};
use crate::texture::{atlas, SheetId};

pub const CLIPS: [&str; 3] = ["sparkle/small", "sparkle/medium", "sparkle/big"];

/// Half the side of the square particles respawn in.
const SPREAD: i32 = 50;

#[derive(Debug, Clone)]
pub struct Sparkles {
    particles: Vec<Sprite>,
}

impl Sparkles {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, TextureError> {
        Ok(Self::build(atlas::clips(&CLIPS)?, rng))
    }

    pub fn build<R: Rng + ?Sized>(clips: Vec<Rect>, rng: &mut R) -> Self {
        let clip_count = clips.len().max(1) as u32;
        let particles = (0..N_SPARKLE_PARTICLES)
            .map(|_| {
                let mut particle = Sprite::new(Role::Sparkle, SheetId::Sparkles, IVec2::ZERO).with_clips(clips.clone());
                particle.frame = rng.random_range(0..clip_count);
                particle
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Sprite] {
        &self.particles
    }

    /// Respawns stray or unlucky particles around `origin` and advances their animation.
    pub fn update<R: Rng + ?Sized>(&mut self, origin: IVec2, rng: &mut R) {
        for particle in self.particles.iter_mut() {
            let distance = (particle.pos - origin).abs();
            let stray = distance.x > STANDARD_SPRITE_SIZE || distance.y > STANDARD_SPRITE_SIZE;
            if stray || rng.random_ratio(1, odds::SPARKLE_RESPAWN) {
                let jitter = IVec2::new(rng.random_range(0..SPREAD * 2), rng.random_range(0..SPREAD * 2));
                particle.move_to(origin - IVec2::splat(SPREAD) + jitter);
                particle.frame = rng.random_range(0..particle.clip_count().max(1) as u32);
            }

            particle.animate(SPARKLE_DELAY);
            particle.frame = particle.frame.wrapping_add(1);
        }
    }
}

/// The point behind Pac-Man's mouth where the trail starts.
pub fn trail_origin(pac: &Sprite) -> IVec2 {
    let size = pac.size();
    let offset = if pac.flip.contains(Flip::HORIZONTAL) {
        IVec2::new(size.x, size.y / 2)
    } else if pac.angle == -90.0 {
        IVec2::new(size.x / 2, size.y)
    } else if pac.angle == 90.0 {
        IVec2::new(size.x / 2, 0)
    } else {
        IVec2::new(0, size.y / 2)
    };
    pac.pos + offset
}
