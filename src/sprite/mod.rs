//! Movable, animatable game entities.
//!
//! A [`Sprite`] couples a position and velocity with an ordered list of clips
//! on one of the shared sheets, up to three independent collider shapes and an
//! optional collision callback. Movement and collision resolution live in
//! [`movement`], clip cycling in [`animation`].

use bitflags::bitflags;
use glam::IVec2;
use smallvec::SmallVec;
use tracing::warn;

use crate::geometry::Rect;
use crate::texture::SheetId;

pub mod animation;
pub mod collider;
pub mod movement;

pub use collider::Colliders;
pub use movement::{CollisionCallback, Contact, Obstacle, Party, Step};

bitflags! {
    /// Mirroring applied when the sprite is drawn. Has no effect on colliders.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flip: u8 {
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
    }
}

/// Identifies what a sprite is within the world.
///
/// Collision callbacks receive roles rather than references, so reactions can
/// be dispatched (and tested) without caring where the sprite lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::IntoStaticStr)]
pub enum Role {
    Pac,
    Blinky,
    Inky,
    PowerUp,
    Sparkle,
    RecorderButton,
    SoundWave,
    TextCursor,
    TextPanel,
}

#[derive(Debug, Clone)]
pub struct Sprite {
    pub role: Role,
    pub sheet: SheetId,
    /// Top-left corner in level coordinates.
    pub pos: IVec2,
    /// Displacement applied by each successful [`Sprite::step`].
    pub vel: IVec2,
    /// Display rotation in degrees.
    pub angle: f64,
    pub flip: Flip,
    /// Animation counter, advanced by the owner once per drawn frame.
    pub frame: u32,
    pub on_collision: Option<CollisionCallback>,
    clips: SmallVec<[Rect; 3]>,
    current_clip: usize,
    scale: Option<IVec2>,
    colliders: Colliders,
}

impl Sprite {
    pub fn new(role: Role, sheet: SheetId, pos: IVec2) -> Self {
        Self {
            role,
            sheet,
            pos,
            vel: IVec2::ZERO,
            angle: 0.0,
            flip: Flip::empty(),
            frame: 0,
            on_collision: None,
            clips: SmallVec::new(),
            current_clip: 0,
            scale: None,
            colliders: Colliders::default(),
        }
    }

    /// Replaces the clip list. The first clip becomes the active one.
    #[must_use]
    pub fn with_clips(mut self, clips: impl IntoIterator<Item = Rect>) -> Self {
        self.clips = clips.into_iter().collect();
        self.current_clip = 0;
        self
    }

    /// Overrides the drawn size regardless of the active clip.
    #[must_use]
    pub fn with_scale(mut self, size: IVec2) -> Self {
        self.set_scale(size);
        self
    }

    /// Gives the sprite an outer box collider covering its current size.
    #[must_use]
    pub fn with_default_collider(mut self) -> Self {
        self.colliders.set_bounds(Rect::from_pos_size(self.pos, self.size()));
        self
    }

    /// Adds fine-grained boxes, given relative to the sprite's position.
    #[must_use]
    pub fn with_sub_boxes(mut self, offsets: &[Rect]) -> Self {
        for offset in offsets {
            self.colliders.push_part(offset.translated(self.pos));
        }
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, vel: IVec2) -> Self {
        self.vel = vel;
        self
    }

    #[must_use]
    pub fn with_callback(mut self, callback: CollisionCallback) -> Self {
        self.on_collision = Some(callback);
        self
    }

    pub fn clips(&self) -> &[Rect] {
        &self.clips
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn current_clip_index(&self) -> usize {
        self.current_clip
    }

    /// The region of the sheet currently drawn, if the sprite has any clips.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clips.get(self.current_clip).copied()
    }

    /// Selects the active clip. Out-of-range indices are logged and ignored.
    pub fn set_clip(&mut self, index: usize) {
        if index >= self.clips.len() {
            warn!(role = ?self.role, index, clip_count = self.clips.len(), "Clip index out of range");
            return;
        }
        self.current_clip = index;
    }

    pub fn set_scale(&mut self, size: IVec2) {
        self.scale = Some(size.max(IVec2::ZERO));
    }

    /// Drawn size: the scale override if set, otherwise the active clip's size.
    pub fn size(&self) -> IVec2 {
        self.scale
            .or_else(|| self.current_clip().map(|clip| clip.size()))
            .unwrap_or(IVec2::ZERO)
    }

    /// The area covered on screen, in level coordinates.
    pub fn render_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size())
    }

    pub fn colliders(&self) -> &Colliders {
        &self.colliders
    }

    pub fn colliders_mut(&mut self) -> &mut Colliders {
        &mut self.colliders
    }

    pub fn has_colliders(&self) -> bool {
        !self.colliders.is_empty()
    }
}
