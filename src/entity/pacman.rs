//! The player character.

use glam::IVec2;
use tracing::trace;

use crate::constants::prompts::{BLINKY_HIT, INKY_HIT, PAC_HIT};
use crate::constants::{LEVEL_SIZE, PAC_SPEED};
use crate::direction::Direction;
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::map::TileType;
use crate::sprite::{Contact, Party, Role, Sprite};
use crate::texture::{atlas, SheetId};

use super::{Reaction, Reactions, Speaker};

/// Mouth clips, closed to open.
pub const CLIPS: [&str; 3] = ["pac/closed", "pac/half_opened", "pac/opened"];

/// Fine-grained hit shape following the round body, relative to the sprite.
pub const SUB_BOXES: [Rect; 5] = [
    Rect::new(59, 0, 75, 15),
    Rect::new(14, 25, 166, 30),
    Rect::new(0, 50, 195, 75),
    Rect::new(14, 130, 166, 30),
    Rect::new(59, 170, 75, 15),
];

/// Spawn point: the middle of the level.
pub const START: IVec2 = IVec2::new(LEVEL_SIZE.x / 2, LEVEL_SIZE.y / 2);

/// Builds Pac-Man at the level center with its colliders and reactions.
pub fn spawn() -> Result<Sprite, TextureError> {
    Ok(build(atlas::clips(&CLIPS)?))
}

/// Builds Pac-Man from already resolved clips.
pub fn build(clips: impl IntoIterator<Item = Rect>) -> Sprite {
    Sprite::new(Role::Pac, SheetId::Characters, START)
        .with_clips(clips)
        .with_default_collider()
        .with_sub_boxes(&SUB_BOXES)
        .with_callback(on_collision)
}

/// Applies the held arrow key: velocity and facing, or a stop when none is held.
pub fn steer(pac: &mut Sprite, held: Option<Direction>) {
    match held {
        Some(direction) => {
            pac.vel = direction.as_ivec2() * PAC_SPEED;
            (pac.angle, pac.flip) = direction.facing();
        }
        None => pac.vel = IVec2::ZERO,
    }
}

/// Pac-Man's collision reactions.
pub fn on_collision(contact: &Contact, reactions: &mut Reactions) {
    trace!(other = ?contact.other, "Pac-Man collided");
    match contact.other {
        Party::Sprite(Role::Inky) => reactions.extend([
            Reaction::Say {
                speaker: Speaker::Pac,
                text: PAC_HIT,
            },
            Reaction::Say {
                speaker: Speaker::Inky,
                text: INKY_HIT,
            },
        ]),
        Party::Sprite(Role::Blinky) => reactions.extend([
            Reaction::Say {
                speaker: Speaker::Pac,
                text: PAC_HIT,
            },
            Reaction::Say {
                speaker: Speaker::Blinky,
                text: BLINKY_HIT,
            },
        ]),
        Party::Tile { tile, .. } if tile.kind == TileType::STANDARD_BLOCK => {
            reactions.push(Reaction::Ripple { phase: contact.frame })
        }
        _ => {}
    }
}
