use std::time::{Duration, Instant};

use glam::IVec2;
use pac_dialog::constants::prompts::{BLINKY_HIT, INKY_HIT, PAC_HIT};
use pac_dialog::constants::{LEVEL_SIZE, PAC_SPEED};
use pac_dialog::direction::Direction;
use pac_dialog::entity::ghost::{self, GhostType};
use pac_dialog::entity::power_up::{random_position, PowerUp, PowerUpEvent};
use pac_dialog::entity::sparkles::{trail_origin, Sparkles};
use pac_dialog::entity::widgets::{RecorderButton, SoundWave, TextCursor};
use pac_dialog::entity::{pacman, Reaction, Reactions, Speaker};
use pac_dialog::geometry::Rect;
use pac_dialog::map::{Tile, TileType};
use pac_dialog::recorder::Toggle;
use pac_dialog::sprite::{Contact, Flip, Party, Role};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

fn contact(other: Party, frame: u32) -> Contact {
    Contact {
        role: Role::Pac,
        frame,
        other,
    }
}

fn react(other: Party, frame: u32) -> Vec<Reaction> {
    let mut reactions = Reactions::new();
    pacman::on_collision(&contact(other, frame), &mut reactions);
    reactions.to_vec()
}

#[test]
fn test_pac_and_inky_exchange_words() {
    assert_eq!(
        react(Party::Sprite(Role::Inky), 0),
        vec![
            Reaction::Say {
                speaker: Speaker::Pac,
                text: PAC_HIT
            },
            Reaction::Say {
                speaker: Speaker::Inky,
                text: INKY_HIT
            },
        ]
    );
}

#[test]
fn test_pac_and_blinky_exchange_words() {
    assert_eq!(
        react(Party::Sprite(Role::Blinky), 0),
        vec![
            Reaction::Say {
                speaker: Speaker::Pac,
                text: PAC_HIT
            },
            Reaction::Say {
                speaker: Speaker::Blinky,
                text: BLINKY_HIT
            },
        ]
    );
}

#[test]
fn test_standard_block_ripples_at_the_current_frame() {
    let tile = Tile::new(TileType::STANDARD_BLOCK, Rect::new(0, 0, 90, 90), true, true);
    assert_eq!(react(Party::Tile { index: 3, tile }, 27), vec![Reaction::Ripple { phase: 27 }]);
}

#[test]
fn test_other_obstacles_have_no_reaction() {
    let tile = Tile::new(TileType::Block(2), Rect::new(0, 0, 90, 90), true, true);
    assert_that(&react(Party::Tile { index: 0, tile }, 0)).is_empty();
    assert_that(&react(Party::Sprite(Role::PowerUp), 0)).is_empty();
}

#[test]
fn test_pac_spawns_in_the_middle_with_sub_boxes() {
    let pac = pacman::spawn().unwrap();
    assert_eq!(pac.pos, pacman::START);
    assert_eq!(pac.clip_count(), pacman::CLIPS.len());
    assert_eq!(pac.colliders().bounds(), Some(Rect::from_pos_size(pacman::START, pac.size())));
    assert_eq!(pac.colliders().parts().len(), pacman::SUB_BOXES.len());
    assert!(pac.on_collision.is_some());
}

#[test]
fn test_steering_sets_velocity_and_facing() {
    let mut pac = pacman::spawn().unwrap();

    pacman::steer(&mut pac, Some(Direction::Left));
    assert_eq!(pac.vel, IVec2::new(-PAC_SPEED, 0));
    assert_eq!(pac.flip, Flip::HORIZONTAL);

    pacman::steer(&mut pac, Some(Direction::Up));
    assert_eq!(pac.vel, IVec2::new(0, -PAC_SPEED));
    assert_eq!(pac.angle, -90.0);
    assert_eq!(pac.flip, Flip::empty());

    pacman::steer(&mut pac, None);
    assert_eq!(pac.vel, IVec2::ZERO);
    // Facing is kept while stopped
    assert_eq!(pac.angle, -90.0);
}

#[test]
fn test_held_direction_precedence() {
    let held = [Direction::Right, Direction::Down];
    assert_eq!(Direction::from_held(|d| held.contains(&d)), Some(Direction::Down));
    assert_eq!(Direction::from_held(|_| false), None);
}

#[test]
fn test_ghosts_patrol_their_axis() {
    let blinky = ghost::spawn(GhostType::Blinky).unwrap();
    let inky = ghost::spawn(GhostType::Inky).unwrap();

    assert_eq!(blinky.vel, IVec2::new(PAC_SPEED, 0));
    assert_eq!(inky.vel, IVec2::new(0, PAC_SPEED));
    assert_eq!(blinky.colliders().parts().len(), 3);
    assert!(inky.colliders().parts().is_empty());
    assert!(inky.colliders().bounds().is_some());
}

#[test]
fn test_ghosts_turn_around_occasionally() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut blinky = ghost::build(GhostType::Blinky, Rect::new(0, 0, 212, 208));

    let turns = (0..6000).filter(|_| ghost::wander(&mut blinky, &mut rng)).count();

    // One in sixty on average
    assert!((50..=150).contains(&turns), "turned {turns} times");
    let expected = if turns % 2 == 0 { PAC_SPEED } else { -PAC_SPEED };
    assert_eq!(blinky.vel.x, expected);
}

#[test]
fn test_power_up_lifecycle() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut power_up = PowerUp::new(Rect::new(0, 0, 50, 50), &mut rng).with_duration(Duration::from_secs(10));
    let pellet = power_up.sprite.colliders().bounds().unwrap();
    assert!(pellet.within(LEVEL_SIZE));

    let start = Instant::now();
    let far = Rect::new(pellet.x + 500, pellet.y + 500, 10, 10);
    assert_eq!(power_up.update(Some(far), start, &mut rng), PowerUpEvent::None);
    assert_eq!(power_up.update(None, start, &mut rng), PowerUpEvent::None);

    assert_eq!(power_up.update(Some(pellet), start, &mut rng), PowerUpEvent::Collected);
    assert!(power_up.is_powered());

    let later = start + Duration::from_secs(5);
    assert_eq!(power_up.update(Some(pellet), later, &mut rng), PowerUpEvent::None);

    let expired = start + Duration::from_secs(11);
    assert_eq!(power_up.update(None, expired, &mut rng), PowerUpEvent::Expired);
    assert!(!power_up.is_powered());
    assert!(power_up.sprite.colliders().bounds().unwrap().within(LEVEL_SIZE));
}

#[test]
fn test_random_positions_stay_inside_the_level() {
    let mut rng = SmallRng::seed_from_u64(11);
    let size = IVec2::new(194, 194);
    for _ in 0..500 {
        let pos = random_position(size, &mut rng);
        assert!(Rect::from_pos_size(pos, size).within(LEVEL_SIZE));
    }
}

#[test]
fn test_sparkles_gather_around_the_trail() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut sparkles = Sparkles::spawn(&mut rng).unwrap();
    let origin = IVec2::new(1000, 500);

    sparkles.update(origin, &mut rng);

    for particle in sparkles.particles() {
        let distance = (particle.pos - origin).abs();
        assert!(distance.x <= 50 && distance.y <= 50, "{:?}", particle.pos);
    }
}

#[test]
fn test_trail_starts_behind_the_mouth() {
    let mut pac = pacman::spawn().unwrap();
    let size = pac.size();

    assert_eq!(trail_origin(&pac), pac.pos + IVec2::new(0, size.y / 2));

    pac.flip = Flip::HORIZONTAL;
    assert_eq!(trail_origin(&pac), pac.pos + IVec2::new(size.x, size.y / 2));

    pac.flip = Flip::empty();
    pac.angle = 90.0;
    assert_eq!(trail_origin(&pac), pac.pos + IVec2::new(size.x / 2, 0));
}

#[test]
fn test_recorder_button_toggle_and_hit_test() {
    let mut button = RecorderButton::spawn().unwrap();
    assert_eq!(button.toggle(), Toggle::Off);
    button.set_toggle(Toggle::On);
    assert_eq!(button.toggle(), Toggle::On);

    let pac = pacman::spawn().unwrap();
    button.anchor(&pac);
    let rect = button.sprite.render_rect();
    assert!(button.contains(rect.pos() + rect.size() / 2));
    assert!(!button.contains(rect.pos()));
}

#[test]
fn test_sound_wave_rewinds_when_idle() {
    let pac = pacman::spawn().unwrap();
    let mut wave = SoundWave::spawn().unwrap();
    for _ in 0..40 {
        wave.update(&pac, true);
    }
    assert_ne!(wave.sprite.current_clip_index(), 0);

    wave.update(&pac, false);
    assert_eq!(wave.sprite.current_clip_index(), 0);
    assert_eq!(wave.sprite.frame, 0);
}

#[test]
fn test_text_cursor_follows_the_line() {
    let pac = pacman::spawn().unwrap();
    let mut cursor = TextCursor::new(IVec2::new(20, 30));

    cursor.update(IVec2::new(100, 200), &pac, 60);

    assert_eq!(cursor.sprite.pos.x, 100 + 10 + 60);
    assert_eq!(cursor.sprite.pos.y, pac.pos.y - 97 + 10 + 1);
}
