use glam::IVec2;
use smallvec::SmallVec;

use crate::geometry::{any_intersects, circle_intersects_rect, circles_intersect, intersects, Circle, Rect};

/// The three optional collider shapes of a sprite.
///
/// Shapes are stored in absolute level coordinates and are only ever moved
/// together through [`Colliders::translate`], so their offsets from the
/// owning sprite stay fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colliders {
    bounds: Option<Rect>,
    parts: SmallVec<[Rect; 5]>,
    circle: Option<Circle>,
}

impl Colliders {
    /// Sets the outer box. A zero-sized box removes it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = (!bounds.is_empty()).then_some(bounds);
    }

    pub fn push_part(&mut self, part: Rect) {
        self.parts.push(part);
    }

    /// Sets the circle. A zero radius removes it.
    pub fn set_circle(&mut self, circle: Circle) {
        self.circle = circle.is_present().then_some(circle);
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn parts(&self) -> &[Rect] {
        &self.parts
    }

    pub fn circle(&self) -> Option<Circle> {
        self.circle
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none() && self.parts.is_empty() && self.circle.is_none()
    }

    /// Moves every present shape by `delta`.
    pub fn translate(&mut self, delta: IVec2) {
        if let Some(bounds) = self.bounds.as_mut() {
            *bounds = bounds.translated(delta);
        }
        for part in self.parts.iter_mut() {
            *part = part.translated(delta);
        }
        if let Some(circle) = self.circle.as_mut() {
            *circle = circle.translated(delta);
        }
    }

    /// Returns true when every present shape lies inside `[0, size.x] x [0, size.y]`.
    pub fn within(&self, size: IVec2) -> bool {
        self.bounds.is_none_or(|bounds| bounds.within(size))
            && self.parts.iter().all(|part| part.within(size))
            && self.circle.is_none_or(|circle| circle.bounds().within(size))
    }

    /// Tests two collider sets against each other.
    ///
    /// When either side has a circle, the circle test alone decides: circle
    /// against circle, or circle against the other side's outer box. Otherwise
    /// the outer boxes must overlap, and if both sides also carry sub-boxes at
    /// least one pair of those must overlap too. A side without an outer box
    /// is tested by its sub-boxes alone.
    pub fn overlaps(&self, other: &Colliders) -> bool {
        match (self.circle, other.circle) {
            (Some(a), Some(b)) => circles_intersect(a, b),
            (Some(circle), None) => other.bounds.is_some_and(|bounds| circle_intersects_rect(circle, bounds)),
            (None, Some(circle)) => self.bounds.is_some_and(|bounds| circle_intersects_rect(circle, bounds)),
            (None, None) => match (self.bounds, other.bounds) {
                (Some(a), Some(b)) => {
                    intersects(a, b)
                        && (self.parts.is_empty() || other.parts.is_empty() || any_intersects(&self.parts, &other.parts))
                }
                _ => any_intersects(&self.parts, &other.parts),
            },
        }
    }
}
