use glam::IVec2;
use strum_macros::AsRefStr;

use crate::sprite::Flip;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// All directions, in the order held arrow keys take precedence.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the unit vector for this direction. Y grows downwards.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Display rotation and mirroring of a sprite facing this way.
    ///
    /// Sprites are drawn facing right; left is a mirror rather than a half turn
    /// so they stay upright.
    pub const fn facing(self) -> (f64, Flip) {
        match self {
            Direction::Up => (-90.0, Flip::empty()),
            Direction::Down => (90.0, Flip::empty()),
            Direction::Left => (0.0, Flip::HORIZONTAL),
            Direction::Right => (0.0, Flip::empty()),
        }
    }

    /// Picks the highest-precedence held direction.
    pub fn from_held(mut held: impl FnMut(Direction) -> bool) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|&direction| held(direction))
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        dir.as_ivec2()
    }
}
