use glam::IVec2;
use pac_dialog::geometry::Rect;
use pac_dialog::sprite::animation::clip_index;
use pac_dialog::sprite::{Role, Sprite};
use pac_dialog::texture::SheetId;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn three_clips() -> Sprite {
    Sprite::new(Role::Pac, SheetId::Characters, IVec2::ZERO).with_clips([
        Rect::new(0, 0, 10, 10),
        Rect::new(10, 0, 12, 10),
        Rect::new(22, 0, 14, 10),
    ])
}

#[test]
fn test_size_follows_the_active_clip() {
    let mut sprite = three_clips();
    assert_eq!(sprite.size(), IVec2::new(10, 10));
    sprite.set_clip(2);
    assert_eq!(sprite.size(), IVec2::new(14, 10));
}

#[test]
fn test_scale_overrides_clip_size() {
    let sprite = three_clips().with_scale(IVec2::new(40, 20));
    assert_eq!(sprite.size(), IVec2::new(40, 20));
    assert_eq!(sprite.render_rect(), Rect::new(0, 0, 40, 20));
}

#[test]
fn test_out_of_range_clip_is_ignored() {
    let mut sprite = three_clips();
    sprite.set_clip(1);
    sprite.set_clip(3);
    assert_that(&sprite.current_clip_index()).is_equal_to(1);
}

#[test]
fn test_default_collider_covers_the_sprite() {
    let sprite = three_clips().with_default_collider();
    assert_that(&sprite.colliders().bounds()).is_equal_to(Some(Rect::new(0, 0, 10, 10)));
    assert!(sprite.has_colliders());
    assert!(!three_clips().has_colliders());
}

#[test]
fn test_animation_cycles_then_resets() {
    let mut sprite = three_clips();
    let delay = 2;
    let mut seen = Vec::new();

    // Each clip is held for 3 * 2 frames; the 19th call wraps
    for _ in 0..19 {
        sprite.animate(delay);
        seen.push(sprite.current_clip_index());
        sprite.frame += 1;
    }

    let mut expected = vec![0; 6];
    expected.extend([1; 6]);
    expected.extend([2; 6]);
    expected.push(2);
    assert_eq!(seen, expected);
    assert_that(&sprite.frame).is_equal_to(1);
}

#[test]
fn test_animation_without_clips_is_a_no_op() {
    let mut sprite = Sprite::new(Role::Sparkle, SheetId::Sparkles, IVec2::ZERO);
    sprite.frame = 9;
    sprite.animate(2);
    assert_that(&sprite.frame).is_equal_to(9);
    assert_that(&sprite.current_clip()).is_none();
}

#[test]
fn test_zero_delay_keeps_the_current_clip() {
    let mut sprite = three_clips();
    sprite.set_clip(1);
    sprite.frame = 100;
    sprite.animate(0);
    assert_that(&sprite.current_clip_index()).is_equal_to(1);
}

#[test]
fn test_tick_animation_advances_first() {
    let mut sprite = three_clips();
    sprite.frame = 5;
    sprite.tick_animation(2);
    assert_that(&sprite.frame).is_equal_to(6);
    assert_that(&sprite.current_clip_index()).is_equal_to(1);
}

#[test]
fn test_single_clip_wraps_every_delay() {
    assert_eq!(clip_index(0, 1, 8), (0, false));
    assert_eq!(clip_index(7, 1, 8), (0, false));
    assert_eq!(clip_index(8, 1, 8), (0, true));
}
