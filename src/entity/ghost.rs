//! The two wandering ghosts.

use glam::IVec2;
use rand::Rng;
use strum_macros::AsRefStr;

use crate::constants::{odds, PAC_SPEED};
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::sprite::{Role, Sprite};
use crate::texture::{atlas, SheetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum GhostType {
    Blinky,
    Inky,
}

impl GhostType {
    pub const fn role(self) -> Role {
        match self {
            GhostType::Blinky => Role::Blinky,
            GhostType::Inky => Role::Inky,
        }
    }

    pub const fn clip_name(self) -> &'static str {
        match self {
            GhostType::Blinky => "ghost/blinky",
            GhostType::Inky => "ghost/inky",
        }
    }

    pub const fn start(self) -> IVec2 {
        match self {
            GhostType::Blinky => IVec2::new(300, 300),
            GhostType::Inky => IVec2::new(300, 550),
        }
    }

    /// Blinky patrols horizontally, Inky vertically.
    pub const fn initial_velocity(self) -> IVec2 {
        match self {
            GhostType::Blinky => IVec2::new(PAC_SPEED, 0),
            GhostType::Inky => IVec2::new(0, PAC_SPEED),
        }
    }

    /// Fine-grained hit shape relative to the sprite. Inky uses its box only.
    pub const fn sub_boxes(self) -> &'static [Rect] {
        const BLINKY: [Rect; 3] = [
            Rect::new(75, 0, 60, 15),
            Rect::new(15, 45, 180, 45),
            Rect::new(0, 90, 210, 105),
        ];
        match self {
            GhostType::Blinky => &BLINKY,
            GhostType::Inky => &[],
        }
    }
}

pub fn spawn(ghost: GhostType) -> Result<Sprite, TextureError> {
    Ok(build(ghost, atlas::clip(ghost.clip_name())?))
}

pub fn build(ghost: GhostType, clip: Rect) -> Sprite {
    Sprite::new(ghost.role(), SheetId::Characters, ghost.start())
        .with_clips([clip])
        .with_default_collider()
        .with_sub_boxes(ghost.sub_boxes())
        .with_velocity(ghost.initial_velocity())
}

/// Turns the ghost around with a one in [`odds::GHOST_TURN`] chance.
///
/// Returns whether it turned.
pub fn wander<R: Rng + ?Sized>(ghost: &mut Sprite, rng: &mut R) -> bool {
    let turn = rng.random_ratio(1, odds::GHOST_TURN);
    if turn {
        ghost.vel = -ghost.vel;
    }
    turn
}
