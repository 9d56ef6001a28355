//! Constant-step movement with provisional translation and rollback.

use glam::IVec2;
use tracing::trace;

use crate::entity::Reactions;
use crate::map::{Tile, TileMap};

use super::{Role, Sprite};

/// Invoked once per blocked move with the party that stopped the sprite.
///
/// Callbacks never touch the world directly; they queue [`crate::entity::Reaction`]s
/// which the world applies after every sprite has moved.
pub type CollisionCallback = fn(&Contact, &mut Reactions);

/// The other side of a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Party {
    Tile { index: usize, tile: Tile },
    Sprite(Role),
}

/// Everything a collision callback learns about a blocked move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Role of the sprite that was moving.
    pub role: Role,
    /// Animation frame of the moving sprite at the time of the hit.
    pub frame: u32,
    pub other: Party,
}

/// What stopped a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    LevelBounds,
    Tile(usize),
    Sprite(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Blocked(Obstacle),
}

impl Step {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Step::Blocked(_))
    }
}

impl Sprite {
    /// Attempts to advance the sprite by its velocity.
    ///
    /// Collider-less sprites always move. Otherwise the colliders are moved
    /// first and tested against the level bounds, then the first solid tile
    /// under the outer box, then each candidate in order. `None` entries and
    /// the sprite itself are skipped. On the first hit the
    /// colliders are moved back, the position is left alone and the callback
    /// (if any) runs once with the obstacle. Leaving the level never runs it.
    pub fn step(&mut self, map: &TileMap, others: &[Option<&Sprite>], reactions: &mut Reactions) -> Step {
        if !self.has_colliders() {
            self.pos += self.vel;
            return Step::Moved;
        }

        let vel = self.vel;
        self.colliders_mut().translate(vel);

        let Some(obstacle) = self.find_obstacle(map, others) else {
            self.pos += vel;
            return Step::Moved;
        };

        self.colliders_mut().translate(-vel);
        trace!(role = ?self.role, ?obstacle, pos = ?self.pos, "Move blocked");

        let party = match obstacle {
            Obstacle::LevelBounds => None,
            Obstacle::Tile(index) => map.tile(index).map(|&tile| Party::Tile { index, tile }),
            Obstacle::Sprite(role) => Some(Party::Sprite(role)),
        };
        if let (Some(callback), Some(other)) = (self.on_collision, party) {
            let contact = Contact {
                role: self.role,
                frame: self.frame,
                other,
            };
            callback(&contact, reactions);
        }

        Step::Blocked(obstacle)
    }

    fn find_obstacle(&self, map: &TileMap, others: &[Option<&Sprite>]) -> Option<Obstacle> {
        let colliders = self.colliders();

        if !colliders.within(map.level_size()) {
            return Some(Obstacle::LevelBounds);
        }

        if let Some(index) = colliders.bounds().and_then(|bounds| map.first_solid_hit(bounds)) {
            return Some(Obstacle::Tile(index));
        }

        others
            .iter()
            .flatten()
            .filter(|&&other| !std::ptr::eq(other, self))
            .find(|other| colliders.overlaps(other.colliders()))
            .map(|other| Obstacle::Sprite(other.role))
    }

    /// Moves the sprite and every collider to `pos` without any collision test.
    pub fn move_to(&mut self, pos: IVec2) {
        let delta = pos - self.pos;
        self.colliders_mut().translate(delta);
        self.pos = pos;
    }
}
