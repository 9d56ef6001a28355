//! The viewport following Pac-Man through the level.

use glam::IVec2;

use crate::constants::STANDARD_SPRITE_SIZE;
use crate::geometry::Rect;

/// Centers a viewport of `size` on the sprite at `target`, then clamps it
/// inside `[0, level.x] x [0, level.y]` one axis at a time.
///
/// A viewport larger than the level sticks to the origin.
pub fn follow(target: IVec2, size: IVec2, level: IVec2) -> Rect {
    let center = target + IVec2::splat(STANDARD_SPRITE_SIZE / 2);
    let naive = center - size / 2;
    let pos = IVec2::new(clamp_axis(naive.x, size.x, level.x), clamp_axis(naive.y, size.y, level.y));
    Rect::from_pos_size(pos, size)
}

fn clamp_axis(pos: i32, extent: i32, level: i32) -> i32 {
    pos.min(level - extent).max(0)
}

/// Limits a requested viewport size to the level.
pub fn fit_viewport(requested: IVec2, level: IVec2) -> IVec2 {
    requested.clamp(IVec2::ZERO, level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    pub view: Rect,
    level: IVec2,
}

impl Camera {
    pub fn new(size: IVec2, level: IVec2) -> Self {
        Self {
            view: Rect::from_pos_size(IVec2::ZERO, fit_viewport(size, level)),
            level,
        }
    }

    /// Applies a window size change.
    pub fn resize(&mut self, size: IVec2) {
        let size = fit_viewport(size, self.level);
        self.view.w = size.x;
        self.view.h = size.y;
    }

    pub fn follow(&mut self, target: IVec2) {
        self.view = follow(target, self.view.size(), self.level);
    }

    /// Converts a level position to a screen position.
    pub fn to_screen(&self, pos: IVec2) -> IVec2 {
        pos - self.view.pos()
    }

    /// Converts a screen position (e.g. the mouse) to a level position.
    pub fn to_level(&self, pos: IVec2) -> IVec2 {
        pos + self.view.pos()
    }
}
