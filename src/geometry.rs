//! Integer collision primitives shared by sprites, tiles and the camera.
//!
//! All tests treat shapes as open sets: two boxes that only share an edge do
//! not collide, and a circle merely touching a box does not either.

use glam::IVec2;

/// An axis-aligned rectangle in level pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle, clamping negative sizes to zero.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: if w < 0 { 0 } else { w },
            h: if h < 0 { 0 } else { h },
        }
    }

    pub const fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub const fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub const fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// A rectangle with no area. Zero-sized boxes mark an absent collider.
    pub const fn is_empty(&self) -> bool {
        self.w == 0 && self.h == 0
    }

    /// Returns the same rectangle moved by `delta`.
    #[must_use]
    pub fn translated(self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Returns true when `point` lies strictly inside the rectangle.
    pub fn contains_strict(&self, point: IVec2) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }

    /// Returns true when the rectangle lies entirely within `[0, bounds.x] x [0, bounds.y]`.
    pub fn within(&self, bounds: IVec2) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= bounds.x && self.bottom() <= bounds.y
    }
}

impl From<Rect> for sdl2::rect::Rect {
    fn from(rect: Rect) -> Self {
        sdl2::rect::Rect::new(rect.x, rect.y, rect.w as u32, rect.h as u32)
    }
}

/// A circular collider. A radius of zero means "no circle".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    pub center: IVec2,
    pub r: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, r: i32) -> Self {
        Self {
            center: IVec2::new(x, y),
            r,
        }
    }

    pub const fn is_present(&self) -> bool {
        self.r != 0
    }

    #[must_use]
    pub fn translated(self, delta: IVec2) -> Self {
        Self {
            center: self.center + delta,
            ..self
        }
    }

    /// The box the circle is inscribed in.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.center.x - self.r, self.center.y - self.r, self.r * 2, self.r * 2)
    }
}

/// Tests two boxes for overlap. Sharing an edge is not an overlap.
pub fn intersects(a: Rect, b: Rect) -> bool {
    !(a.right() <= b.x || a.x >= b.right() || a.bottom() <= b.y || a.y >= b.bottom())
}

/// Returns true as soon as any box of `a` overlaps any box of `b`.
///
/// An empty set never collides.
pub fn any_intersects(a: &[Rect], b: &[Rect]) -> bool {
    a.iter().any(|&box_a| b.iter().any(|&box_b| intersects(box_a, box_b)))
}

/// Squared euclidean distance between two points.
pub fn distance_squared(a: IVec2, b: IVec2) -> i32 {
    (a - b).length_squared()
}

pub fn circles_intersect(a: Circle, b: Circle) -> bool {
    let radii = a.r + b.r;
    distance_squared(a.center, b.center) < radii * radii
}

/// Tests a circle against a box using the box point closest to the circle's center.
pub fn circle_intersects_rect(circle: Circle, rect: Rect) -> bool {
    let closest = IVec2::new(
        circle.center.x.clamp(rect.x, rect.right()),
        circle.center.y.clamp(rect.y, rect.bottom()),
    );
    distance_squared(circle.center, closest) < circle.r * circle.r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_are_clamped() {
        assert_eq!(Rect::new(3, 4, -5, 2), Rect::new(3, 4, 0, 2));
    }

    #[test]
    fn circle_touching_box_edge_is_not_a_hit() {
        let rect = Rect::new(10, 0, 10, 10);
        assert!(!circle_intersects_rect(Circle::new(5, 5, 5), rect));
        assert!(circle_intersects_rect(Circle::new(6, 5, 5), rect));
    }
}
