//! The concrete actors of the level and how they react to collisions.
//!
//! Every actor is a [`Sprite`](crate::sprite::Sprite) configured by one of the
//! constructors here. Collision callbacks only queue [`Reaction`]s; the world
//! applies them once all sprites have moved.

use smallvec::SmallVec;

pub mod ghost;
pub mod pacman;
pub mod power_up;
pub mod sparkles;
pub mod widgets;

/// Owner of a dialogue text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter, strum_macros::AsRefStr)]
pub enum Speaker {
    Pac,
    Blinky,
    Inky,
}

/// A side effect requested by a collision callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Replace a speaker's prompt.
    Say { speaker: Speaker, text: &'static str },
    /// Repaint the wave on the tile sheet at the given phase.
    Ripple { phase: u32 },
}

pub type Reactions = SmallVec<[Reaction; 4]>;
