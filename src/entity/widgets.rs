//! Decorations anchored to Pac-Man: the recorder button, the playback sound
//! wave and the text cursor.

use glam::IVec2;

use crate::constants::animation::{CURSOR_DELAY, SOUND_WAVE_DELAY};
use crate::constants::{STANDARD_SPRITE_SIZE, TEXT_BOX_PADDING};
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::recorder::Toggle;
use crate::sprite::{Role, Sprite};
use crate::texture::{atlas, SheetId};

const HALF_SPRITE: i32 = STANDARD_SPRITE_SIZE / 2;

/// The clickable recording switch below Pac-Man's back.
#[derive(Debug, Clone)]
pub struct RecorderButton {
    pub sprite: Sprite,
}

impl RecorderButton {
    pub const CLIPS: [&'static str; 2] = ["recorder/off", "recorder/on"];

    pub fn spawn() -> Result<Self, TextureError> {
        Ok(Self::build(atlas::clips(&Self::CLIPS)?))
    }

    /// `clips` are the Off and On clips, in that order. Drawn at half size.
    pub fn build(clips: Vec<Rect>) -> Self {
        let size = clips.first().map(|clip| clip.size() / 2).unwrap_or(IVec2::ZERO);
        let sprite = Sprite::new(Role::RecorderButton, SheetId::RecorderButton, IVec2::ZERO)
            .with_clips(clips)
            .with_scale(size);
        Self { sprite }
    }

    pub fn toggle(&self) -> Toggle {
        match self.sprite.current_clip_index() {
            0 => Toggle::Off,
            _ => Toggle::On,
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle) {
        self.sprite.set_clip(match toggle {
            Toggle::Off => 0,
            Toggle::On => 1,
        });
    }

    /// Keeps the button beside Pac-Man's lower back.
    pub fn anchor(&mut self, pac: &Sprite) {
        let size = self.sprite.size();
        self.sprite.move_to(pac.pos + IVec2::new(-HALF_SPRITE, STANDARD_SPRITE_SIZE - size.y));
    }

    /// Whether a level-space point lies strictly inside the button.
    pub fn contains(&self, point: IVec2) -> bool {
        self.sprite.render_rect().contains_strict(point)
    }
}

/// The sound wave shown in front of Pac-Man while a recording plays back.
#[derive(Debug, Clone)]
pub struct SoundWave {
    pub sprite: Sprite,
}

impl SoundWave {
    pub const CLIPS: [&'static str; 3] = ["soundwave/first", "soundwave/second", "soundwave/full"];

    pub fn spawn() -> Result<Self, TextureError> {
        Ok(Self::build(atlas::clips(&Self::CLIPS)?))
    }

    pub fn build(clips: Vec<Rect>) -> Self {
        let size = clips.first().map(|clip| clip.size() / 2).unwrap_or(IVec2::ZERO);
        let sprite = Sprite::new(Role::SoundWave, SheetId::SoundWave, IVec2::ZERO)
            .with_clips(clips)
            .with_scale(size);
        Self { sprite }
    }

    /// Animates next to Pac-Man during playback, otherwise rewinds to the first clip.
    pub fn update(&mut self, pac: &Sprite, playing: bool) {
        if !playing {
            self.sprite.frame = 0;
            self.sprite.set_clip(0);
            return;
        }

        let size = self.sprite.size();
        self.sprite
            .move_to(pac.pos + IVec2::new(STANDARD_SPRITE_SIZE, HALF_SPRITE - size.y / 2));
        self.sprite.animate(SOUND_WAVE_DELAY);
        self.sprite.frame = self.sprite.frame.wrapping_add(1);
    }
}

/// The blinking underscore after the last character of Pac-Man's prompt.
#[derive(Debug, Clone)]
pub struct TextCursor {
    pub sprite: Sprite,
}

impl TextCursor {
    /// `glyph` is the size of the rendered underscore. The second clip is blank.
    pub fn new(glyph: IVec2) -> Self {
        let sprite = Sprite::new(Role::TextCursor, SheetId::TextCursor, IVec2::ZERO)
            .with_clips([Rect::from_pos_size(IVec2::ZERO, glyph), Rect::default()]);
        Self { sprite }
    }

    /// Places the cursor after the text of the box at `box_pos`.
    ///
    /// `line_width` is the rendered width of the last, partially filled line,
    /// or zero when that line is full or empty. The vertical position follows
    /// Pac-Man, not the grown box.
    pub fn update(&mut self, box_pos: IVec2, pac: &Sprite, line_width: i32) {
        let pos = IVec2::new(
            box_pos.x + TEXT_BOX_PADDING + line_width,
            pac.pos.y - HALF_SPRITE + TEXT_BOX_PADDING + 1,
        );
        self.sprite.move_to(pos);
        self.sprite.animate(CURSOR_DELAY);
        self.sprite.frame = self.sprite.frame.wrapping_add(1);
    }
}
