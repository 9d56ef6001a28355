use std::time::Instant;

use glam::IVec2;
use pac_dialog::constants::prompts::{BLINKY_DEFAULT, INKY_DEFAULT, NO_RECORDING_DEVICE, PAC_DEFAULT};
use pac_dialog::constants::{colors, PAC_SPEED};
use pac_dialog::direction::Direction;
use pac_dialog::entity::Speaker;
use pac_dialog::recorder::{RecorderState, Toggle};
use pac_dialog::sprite::Step;
use pac_dialog::textbox::Edit;
use pac_dialog::world::{FrameInput, RecorderSlot};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{fake_recorder, test_world, FixedMetrics};

fn held(direction: Direction) -> FrameInput {
    FrameInput { held: Some(direction) }
}

#[test]
fn test_prompts_start_with_defaults() {
    let mut world = test_world(RecorderSlot::Unavailable(NO_RECORDING_DEVICE));
    assert_eq!(world.text_box(Speaker::Pac).text(), PAC_DEFAULT);
    assert_eq!(world.text_box(Speaker::Blinky).text(), BLINKY_DEFAULT);
    assert_eq!(world.text_box(Speaker::Inky).text(), INKY_DEFAULT);
}

#[test]
fn test_saved_prompts_replace_defaults_per_slot() {
    let mut world = test_world(RecorderSlot::Unavailable(NO_RECORDING_DEVICE));
    world.apply_prompts([Some("first".to_string()), Some("second".to_string()), None]);

    assert_eq!(world.pac_box.text(), "first");
    assert_eq!(world.blinky_box.text(), "second");
    assert_eq!(world.inky_box.text(), INKY_DEFAULT);
}

#[test]
fn test_missing_recorder_replaces_pac_prompt() {
    let mut world = test_world(RecorderSlot::Unavailable(NO_RECORDING_DEVICE));
    let report = world.tick(FrameInput::default(), Instant::now());

    assert_that(&report.recorder).is_none();
    assert_eq!(world.pac_box.text(), NO_RECORDING_DEVICE);
}

#[test]
fn test_held_arrow_moves_pac() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    let start = world.pac.pos;

    let report = world.tick(held(Direction::Right), Instant::now());

    assert_eq!(report.pac, Step::Moved);
    assert_eq!(world.pac.pos, start + IVec2::new(PAC_SPEED, 0));

    let report = world.tick(FrameInput::default(), Instant::now());
    assert_eq!(report.pac, Step::Moved);
    assert_eq!(world.pac.vel, IVec2::ZERO);
    assert_eq!(world.pac.pos, start + IVec2::new(PAC_SPEED, 0));
}

#[test]
fn test_camera_follows_pac() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));

    world.tick(held(Direction::Down), Instant::now());

    let view = world.camera.view;
    assert!(view.x > 0 && view.y > 0);
    assert_eq!(view.size(), IVec2::new(600, 600));
}

#[test]
fn test_pac_stops_at_the_level_edge() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    world.pac.move_to(IVec2::new(1980 - 194, 0));
    world.pac.angle = 0.0;

    let report = world.tick(held(Direction::Right), Instant::now());

    assert!(report.pac.is_blocked());
    assert_eq!(world.pac.pos, IVec2::new(1980 - 194, 0));
}

#[test]
fn test_ghost_collision_changes_both_prompts() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    let inky = world.inky.pos;
    world.inky.vel = IVec2::ZERO;
    // Right below Inky, overlapping once moved up
    world.pac.move_to(inky + IVec2::new(0, 212));

    let report = world.tick(held(Direction::Up), Instant::now());

    assert!(report.pac.is_blocked());
    assert_eq!(world.pac_box.text(), pac_dialog::constants::prompts::PAC_HIT);
    assert_eq!(world.inky_box.text(), pac_dialog::constants::prompts::INKY_HIT);
}

#[test]
fn test_typing_submitting_and_saved_color() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    let metrics = FixedMetrics::default();

    world.backspace();
    world.backspace();
    world.backspace();
    assert_eq!(world.text_input("yo"), Edit::Changed);
    world.layout(&metrics);
    assert_eq!(world.pac_box.color, colors::LIGHT_BLACK);

    assert_eq!(world.submit(), Edit::Submitted("yo".to_string()));
    world.layout(&metrics);
    assert_eq!(world.pac_box.color, colors::BLACK);
    assert!(world.pac_box.saved);
}

#[test]
fn test_layout_places_cursor_after_the_last_line() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    let metrics = FixedMetrics::default();
    world.pac_box.set_text("abcdefghijkl");

    world.layout(&metrics);

    let box_x = world.pac.pos.x + 97;
    // Two bytes on the last line, ten pixels each
    assert_eq!(world.cursor.sprite.pos.x, box_x + 10 + 20);
    assert_eq!(world.pac_box.rect().h, 97 + metrics.line_height);
}

#[test]
fn test_layout_measures_a_last_line_after_a_multibyte_character() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    let metrics = FixedMetrics::default();
    world.pac_box.set_text("");
    assert_eq!(world.text_input("aaaaaaaaaé"), Edit::Changed);

    world.tick(FrameInput::default(), Instant::now());
    world.layout(&metrics);

    // "é" is alone on the second line, two bytes at ten pixels each
    let box_x = world.pac.pos.x + 97;
    assert_eq!(world.cursor.sprite.pos.x, box_x + 10 + 20);
    assert_eq!(world.pac_box.rect().h, 97 + metrics.line_height);
}

#[test]
fn test_click_on_the_button_starts_recording() {
    let (recorder, _, capture, _) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    world.tick(FrameInput::default(), Instant::now());

    let rect = world.button.sprite.render_rect();
    let screen = world.camera.to_screen(rect.pos() + rect.size() / 2);
    assert!(!world.click(IVec2::new(-5, -5)));
    assert!(world.click(screen));
    assert_eq!(world.button.toggle(), Toggle::On);

    let report = world.tick(FrameInput::default(), Instant::now());
    assert_eq!(report.recorder, Some(RecorderState::Recording));
    assert_eq!(capture.calls().len(), 1);
}

#[test]
fn test_saved_prompt_plays_the_recording() {
    let (recorder, tape, _, playback) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));

    world.button.set_toggle(Toggle::On);
    world.tick(FrameInput::default(), Instant::now());
    tape.lock().record(&[0.25; 5]);
    let report = world.tick(FrameInput::default(), Instant::now());
    assert_eq!(report.recorder, Some(RecorderState::Recorded));
    assert_eq!(world.button.toggle(), Toggle::Off);

    world.submit();
    let report = world.tick(FrameInput::default(), Instant::now());
    assert_eq!(report.recorder, Some(RecorderState::Playback));
    assert_eq!(playback.calls().len(), 1);

    // Clicks are ignored during playback
    let rect = world.button.sprite.render_rect();
    assert!(!world.click(world.camera.to_screen(rect.pos() + rect.size() / 2)));

    let mut out = [0.0; 5];
    tape.lock().play(&mut out);
    world.tick(FrameInput::default(), Instant::now());
    assert!(!world.pac_box.saved);
}

#[test]
fn test_ripple_marks_tiles_dirty() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));

    // Construction paints the initial wave
    let region = world.take_dirty_tiles();
    assert_that(&region).is_some();
    assert_that(&world.take_dirty_tiles()).is_none();
}

#[test]
fn test_resize_is_limited_to_the_level() {
    let (recorder, ..) = fake_recorder(8, 4);
    let mut world = test_world(RecorderSlot::Ready(recorder));
    world.resize(IVec2::new(4000, 300));
    assert_eq!(world.camera.view.size(), IVec2::new(1980, 300));
}
