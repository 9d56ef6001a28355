#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;
use pac_dialog::constants::LEVEL_SIZE;
use pac_dialog::geometry::Rect;
use pac_dialog::map::ripple::PixelBuffer;
use pac_dialog::map::{parser, TileMap};
use pac_dialog::recorder::{AudioChannel, Recorder, SharedTape, Tape};
use pac_dialog::sprite::{Role, Sprite};
use pac_dialog::texture::SheetId;
use pac_dialog::world::{RecorderSlot, TextMetrics, World};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Monospace metrics: every byte is `advance` pixels wide.
pub struct FixedMetrics {
    pub line_height: i32,
    pub advance: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            line_height: 40,
            advance: 10,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn text_width(&self, text: &str) -> i32 {
        text.len() as i32 * self.advance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCall {
    Resume,
    Pause,
}

/// An audio channel that only remembers how it was driven.
#[derive(Clone, Default)]
pub struct FakeChannel {
    pub calls: Rc<RefCell<Vec<ChannelCall>>>,
}

impl FakeChannel {
    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.borrow().clone()
    }
}

impl AudioChannel for FakeChannel {
    fn resume(&mut self) {
        self.calls.borrow_mut().push(ChannelCall::Resume);
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().push(ChannelCall::Pause);
    }
}

/// A recorder on a tiny tape, with handles on both fake channels.
pub fn fake_recorder(capacity: usize, max: usize) -> (Recorder, SharedTape, FakeChannel, FakeChannel) {
    let tape = Tape::new(capacity, max).shared();
    let capture = FakeChannel::default();
    let playback = FakeChannel::default();
    let recorder = Recorder::new(tape.clone(), Box::new(capture.clone()), Box::new(playback.clone()));
    (recorder, tape, capture, playback)
}

/// A sprite with only an outer box collider, sized `size` at `pos`.
pub fn boxed_sprite(role: Role, pos: IVec2, size: IVec2) -> Sprite {
    Sprite::new(role, SheetId::Characters, pos)
        .with_clips([Rect::from_pos_size(IVec2::ZERO, size)])
        .with_default_collider()
}

/// Parses `rows` with square tiles of side `tile` for types 0 and 1.
pub fn tile_map(rows: &str, tile: i32, level: IVec2) -> TileMap {
    let clips = [Rect::new(0, 0, tile, tile), Rect::new(0, 0, tile, tile)];
    parser::load(rows.as_bytes(), &clips, rows.len(), level).unwrap()
}

pub fn test_world(recorder: RecorderSlot) -> World {
    World::new(
        TileMap::empty(LEVEL_SIZE),
        PixelBuffer::new(90, 90, 0xFF00_0000),
        Rect::new(0, 0, 50, 50),
        IVec2::new(20, 30),
        recorder,
        IVec2::new(600, 600),
        SmallRng::seed_from_u64(7),
    )
    .unwrap()
}
