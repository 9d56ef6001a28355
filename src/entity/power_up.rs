//! The power pellet and the powered-up timer.

use std::time::{Duration, Instant};

use glam::IVec2;
use rand::Rng;
use tracing::debug;

use crate::constants::{LEVEL_SIZE, POWER_UP_DURATION};
use crate::geometry::{intersects, Rect};
use crate::sprite::{Role, Sprite};
use crate::texture::SheetId;

/// What happened to the power-up during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpEvent {
    None,
    Collected,
    Expired,
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub sprite: Sprite,
    powered_since: Option<Instant>,
    duration: Duration,
}

impl PowerUp {
    /// Places the pellet (sized by `clip`) somewhere random inside the level.
    pub fn new<R: Rng + ?Sized>(clip: Rect, rng: &mut R) -> Self {
        let mut sprite = Sprite::new(Role::PowerUp, SheetId::PowerUp, IVec2::ZERO)
            .with_clips([clip])
            .with_default_collider();
        let pos = random_position(sprite.size(), rng);
        sprite.move_to(pos);

        Self {
            sprite,
            powered_since: None,
            duration: POWER_UP_DURATION,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_powered(&self) -> bool {
        self.powered_since.is_some()
    }

    /// Collects the pellet when Pac-Man's box overlaps it, and once the powered
    /// period is over moves it to a new random spot.
    pub fn update<R: Rng + ?Sized>(&mut self, pac_bounds: Option<Rect>, now: Instant, rng: &mut R) -> PowerUpEvent {
        match self.powered_since {
            None => {
                let touched = pac_bounds
                    .zip(self.sprite.colliders().bounds())
                    .is_some_and(|(pac, pellet)| intersects(pac, pellet));
                if touched {
                    debug!(pos = ?self.sprite.pos, "Power-up collected");
                    self.powered_since = Some(now);
                    return PowerUpEvent::Collected;
                }
                PowerUpEvent::None
            }
            Some(since) if now.saturating_duration_since(since) > self.duration => {
                self.powered_since = None;
                let pos = random_position(self.sprite.size(), rng);
                self.sprite.move_to(pos);
                debug!(?pos, "Power-up expired and respawned");
                PowerUpEvent::Expired
            }
            Some(_) => PowerUpEvent::None,
        }
    }
}

/// A random top-left corner keeping a sprite of `size` inside the level.
pub fn random_position<R: Rng + ?Sized>(size: IVec2, rng: &mut R) -> IVec2 {
    let max = (LEVEL_SIZE - size).max(IVec2::ZERO);
    IVec2::new(rng.random_range(0..=max.x), rng.random_range(0..=max.y))
}
