//! Everything that lives in the level, advanced once per frame.

use std::time::Instant;

use glam::IVec2;
use rand::rngs::SmallRng;
use sdl2::pixels::Color;
use tracing::{debug, trace};

use crate::camera::Camera;
use crate::constants::{colors, prompts, SAVED_PROMPT, STANDARD_SPRITE_SIZE, TEXT_BOX_PADDING};
use crate::direction::Direction;
use crate::entity::ghost::{self, GhostType};
use crate::entity::power_up::{PowerUp, PowerUpEvent};
use crate::entity::sparkles::{trail_origin, Sparkles};
use crate::entity::widgets::{RecorderButton, SoundWave, TextCursor};
use crate::entity::{pacman, Reaction, Reactions, Speaker};
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::map::ripple::{ripple, PixelBuffer};
use crate::map::TileMap;
use crate::prompts::PROMPT_SLOTS;
use crate::recorder::{Recorder, RecorderState, Toggle};
use crate::sprite::{Flip, Sprite, Step};
use crate::texture::atlas;
use crate::textbox::{Edit, TextBox, PANEL_CLIP};

/// Text measurements the layout needs from the font.
pub trait TextMetrics {
    fn line_height(&self) -> i32;
    fn text_width(&self, text: &str) -> i32;
}

/// The recorder, or the reason it could not be opened.
pub enum RecorderSlot {
    Ready(Recorder),
    Unavailable(&'static str),
}

impl RecorderSlot {
    pub fn state(&self) -> Option<RecorderState> {
        match self {
            RecorderSlot::Ready(recorder) => Some(recorder.state()),
            RecorderSlot::Unavailable(_) => None,
        }
    }
}

/// Per-frame input sampled from the keyboard state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: Option<Direction>,
}

/// What happened during a tick, for the sound effects and the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub pac: Step,
    pub power_up: PowerUpEvent,
    pub recorder: Option<RecorderState>,
}

/// Pixel value written by the ripple, in ARGB8888.
pub fn argb(color: Color) -> u32 {
    (color.a as u32) << 24 | (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}

/// The level, its actors, the dialogue boxes and the recorder.
pub struct World {
    pub map: TileMap,
    tile_pixels: PixelBuffer,
    tile_pristine: PixelBuffer,
    /// Region of the tile sheet changed since the last upload.
    dirty_tiles: Option<Rect>,

    pub pac: Sprite,
    pub blinky: Sprite,
    pub inky: Sprite,
    pub power_up: PowerUp,
    pub sparkles: Sparkles,

    pub button: RecorderButton,
    pub sound_wave: SoundWave,
    pub cursor: TextCursor,

    pub pac_box: TextBox,
    pub blinky_box: TextBox,
    pub inky_box: TextBox,
    pub saved_box: TextBox,

    pub recorder: RecorderSlot,
    pub camera: Camera,
    rng: SmallRng,
}

impl World {
    /// Spawns every actor. `power_up_clip` and `cursor_glyph` come from
    /// textures whose size is only known once loaded.
    pub fn new(
        map: TileMap,
        tile_pixels: PixelBuffer,
        power_up_clip: Rect,
        cursor_glyph: IVec2,
        recorder: RecorderSlot,
        viewport: IVec2,
        mut rng: SmallRng,
    ) -> Result<Self, TextureError> {
        let panel = atlas::clip(PANEL_CLIP)?;
        let level = map.level_size();

        let mut saved_box = TextBox::new(SAVED_PROMPT, colors::GREEN, panel);
        saved_box.panel.flip = Flip::HORIZONTAL;

        let mut world = Self {
            tile_pristine: tile_pixels.clone(),
            tile_pixels,
            dirty_tiles: None,
            pac: pacman::spawn()?,
            blinky: ghost::spawn(GhostType::Blinky)?,
            inky: ghost::spawn(GhostType::Inky)?,
            power_up: PowerUp::new(power_up_clip, &mut rng),
            sparkles: Sparkles::spawn(&mut rng)?,
            button: RecorderButton::spawn()?,
            sound_wave: SoundWave::spawn()?,
            cursor: TextCursor::new(cursor_glyph),
            pac_box: TextBox::new(prompts::PAC_DEFAULT, colors::BLACK, panel),
            blinky_box: TextBox::new(prompts::BLINKY_DEFAULT, colors::BLACK, panel),
            inky_box: TextBox::new(prompts::INKY_DEFAULT, colors::BLACK, panel),
            saved_box,
            recorder,
            camera: Camera::new(viewport, level),
            map,
            rng,
        };
        world.apply_ripple(0);
        Ok(world)
    }

    /// Fills the prompt slots (Pac-Man, Blinky, Inky) that have a saved record.
    pub fn apply_prompts(&mut self, picked: [Option<String>; PROMPT_SLOTS]) {
        let [pac, blinky, inky] = picked;
        for (text_box, text) in [
            (&mut self.pac_box, pac),
            (&mut self.blinky_box, blinky),
            (&mut self.inky_box, inky),
        ] {
            if let Some(text) = text {
                text_box.set_text(&text);
            }
        }
    }

    pub fn text_box(&mut self, speaker: Speaker) -> &mut TextBox {
        match speaker {
            Speaker::Pac => &mut self.pac_box,
            Speaker::Blinky => &mut self.blinky_box,
            Speaker::Inky => &mut self.inky_box,
        }
    }

    pub fn tile_pixels(&self) -> &PixelBuffer {
        &self.tile_pixels
    }

    /// The tile sheet region changed since the last call, if any.
    pub fn take_dirty_tiles(&mut self) -> Option<Rect> {
        self.dirty_tiles.take()
    }

    /// Advances the whole world by one frame.
    pub fn tick(&mut self, input: FrameInput, now: Instant) -> TickReport {
        let recorder = self.update_recorder();

        pacman::steer(&mut self.pac, input.held);
        ghost::wander(&mut self.blinky, &mut self.rng);
        ghost::wander(&mut self.inky, &mut self.rng);
        self.camera.follow(self.pac.pos);

        let mut reactions = Reactions::new();
        let pac = self
            .pac
            .step(&self.map, &[Some(&self.blinky), Some(&self.inky)], &mut reactions);
        self.pac.animate(crate::constants::animation::PAC_DELAY);
        self.blinky
            .step(&self.map, &[Some(&self.pac), Some(&self.inky)], &mut reactions);
        self.inky
            .step(&self.map, &[Some(&self.pac), Some(&self.blinky)], &mut reactions);
        self.pac.frame = self.pac.frame.wrapping_add(1);

        for reaction in reactions {
            self.apply(reaction);
        }

        let power_up = self
            .power_up
            .update(self.pac.colliders().bounds(), now, &mut self.rng);
        if self.power_up.is_powered() {
            self.sparkles.update(trail_origin(&self.pac), &mut self.rng);
        }

        let playing = recorder == Some(RecorderState::Playback);
        self.sound_wave.update(&self.pac, playing);
        self.button.anchor(&self.pac);

        TickReport { pac, power_up, recorder }
    }

    fn update_recorder(&mut self) -> Option<RecorderState> {
        match &mut self.recorder {
            RecorderSlot::Ready(recorder) => {
                let mut toggle = self.button.toggle();
                let state = recorder.update(&mut toggle, &mut self.pac_box.saved);
                self.button.set_toggle(toggle);
                Some(state)
            }
            RecorderSlot::Unavailable(reason) => {
                let reason = *reason;
                self.pac_box.set_text(reason);
                None
            }
        }
    }

    fn apply(&mut self, reaction: Reaction) {
        trace!(?reaction, "Applying reaction");
        match reaction {
            Reaction::Say { speaker, text } => self.text_box(speaker).set_text(text),
            Reaction::Ripple { phase } => self.apply_ripple(phase),
        }
    }

    fn apply_ripple(&mut self, phase: u32) {
        let region = ripple(&mut self.tile_pixels, &self.tile_pristine, phase, argb(colors::GREEN));
        if region.is_empty() {
            return;
        }
        self.dirty_tiles = Some(match self.dirty_tiles {
            Some(dirty) => union(dirty, region),
            None => region,
        });
    }

    /// Lays out the dialogue boxes and the text cursor around their owners.
    pub fn layout(&mut self, metrics: &impl TextMetrics) {
        let line_height = metrics.line_height();

        self.pac_box.color = if self.pac_box.saved {
            colors::BLACK
        } else {
            colors::LIGHT_BLACK
        };
        self.pac_box.anchor(self.pac.pos, line_height);
        self.blinky_box.anchor(self.blinky.pos, line_height);
        self.inky_box.anchor(self.inky.pos, line_height);

        let half = STANDARD_SPRITE_SIZE / 2;
        let saved_width = metrics.text_width(SAVED_PROMPT) + TEXT_BOX_PADDING * 2;
        self.saved_box
            .panel
            .set_scale(IVec2::new(saved_width, self.saved_box.panel.size().y));
        self.saved_box.place(self.pac.pos - IVec2::splat(half), line_height);

        let line_width = match self.pac_box.lines().last() {
            Some(line) if !line.is_empty() => metrics.text_width(line),
            _ => 0,
        };
        let box_pos = IVec2::new(self.pac.pos.x + half, self.pac.pos.y - half);
        self.cursor.update(box_pos, &self.pac, line_width);
    }

    /// Typed text for Pac-Man's prompt.
    pub fn text_input(&mut self, typed: &str) -> Edit {
        self.pac_box.input(typed)
    }

    pub fn backspace(&mut self) -> Edit {
        self.pac_box.backspace()
    }

    /// Enter: marks the prompt saved and returns the record to persist.
    pub fn submit(&mut self) -> Edit {
        let edit = self.pac_box.submit();
        if let Edit::Submitted(text) = &edit {
            debug!(text, "Prompt submitted");
        }
        edit
    }

    /// A mouse click at a window position. Switches the recorder on when the
    /// button is hit, unless a recording is playing.
    pub fn click(&mut self, screen: IVec2) -> bool {
        if self.recorder.state() == Some(RecorderState::Playback) {
            return false;
        }
        let hit = self.button.contains(self.camera.to_level(screen));
        if hit {
            debug!("Recorder button pressed");
            self.button.set_toggle(Toggle::On);
        }
        hit
    }

    pub fn resize(&mut self, size: IVec2) {
        self.camera.resize(size);
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    Rect::new(x, y, a.right().max(b.right()) - x, a.bottom().max(b.bottom()) - y)
}
