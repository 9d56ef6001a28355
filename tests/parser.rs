use glam::IVec2;
use pac_dialog::asset::Asset;
use pac_dialog::constants::{LEVEL_SIZE, TILE_MAP_CAPACITY, TILE_TYPE_COUNT};
use pac_dialog::error::MapError;
use pac_dialog::geometry::Rect;
use pac_dialog::map::{parser, Tile, TileType};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

const CLIPS: [Rect; 2] = [Rect::new(0, 0, 90, 90), Rect::new(0, 0, 90, 90)];

#[test]
fn test_tiles_wrap_at_the_level_edge() {
    let level = IVec2::new(270, 270);
    let map = parser::load(&b"010\n101"[..], &CLIPS, 9, level).unwrap();

    let rects: Vec<Rect> = map.tiles().iter().map(|tile| tile.rect).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(0, 0, 90, 90),
            Rect::new(90, 0, 90, 90),
            Rect::new(180, 0, 90, 90),
            Rect::new(0, 90, 90, 90),
            Rect::new(90, 90, 90, 90),
            Rect::new(180, 90, 90, 90),
        ]
    );
}

#[test]
fn test_tile_kinds_and_flags() {
    let map = parser::load(&b"01x"[..], &CLIPS, 3, IVec2::new(900, 900)).unwrap();

    let empty = map.tile(0).unwrap();
    assert_eq!(empty.kind, TileType::Empty);
    assert!(!empty.solid && !empty.visible);

    let block = map.tile(1).unwrap();
    assert_eq!(block.kind, TileType::STANDARD_BLOCK);
    assert!(block.solid && block.visible);

    assert_eq!(map.tile(2), Some(&Tile::undefined()));
}

#[test]
fn test_digits_past_the_type_count_are_undefined() {
    let map = parser::load(&b"9"[..], &CLIPS, 1, IVec2::new(900, 900)).unwrap();
    assert_that(&map.tile(0).map(|tile| tile.kind)).is_equal_to(Some(TileType::Undefined));
}

#[test]
fn test_stops_at_capacity() {
    let map = parser::load(&b"1111111111"[..], &CLIPS, 4, IVec2::new(900, 900)).unwrap();
    assert_that(&map.len()).is_equal_to(4);
}

#[test]
fn test_short_input_yields_fewer_tiles() {
    let map = parser::load(&b"11"[..], &CLIPS, 40, IVec2::new(900, 900)).unwrap();
    assert_that(&map.len()).is_equal_to(2);
}

#[test]
fn test_missing_clips_is_an_error() {
    let result = parser::load(&b"1"[..], &[], 1, IVec2::new(900, 900));
    assert!(matches!(result, Err(MapError::InvalidConfig(_))));
}

#[test]
fn test_first_solid_hit_is_in_map_order() {
    let map = parser::load(&b"0110"[..], &CLIPS, 4, IVec2::new(900, 900)).unwrap();
    assert_that(&map.first_solid_hit(Rect::new(100, 10, 200, 10))).is_equal_to(Some(1));
    assert_that(&map.first_solid_hit(Rect::new(0, 0, 90, 90))).is_none();
}

#[test]
fn test_visible_in_skips_hidden_and_offscreen_tiles() {
    let map = parser::load(&b"0110"[..], &CLIPS, 4, IVec2::new(900, 900)).unwrap();
    let indices: Vec<usize> = map.visible_in(Rect::new(0, 0, 150, 150)).map(|(index, _)| index).collect();
    assert_eq!(indices, vec![1]);
}

#[test]
fn test_bundled_level_loads_the_same_every_time() {
    let bytes = Asset::LevelMap.get_bytes().unwrap();
    let clips = vec![Rect::new(0, 0, 90, 90); TILE_TYPE_COUNT as usize];

    let first = parser::load(&bytes[..], &clips, TILE_MAP_CAPACITY, LEVEL_SIZE).unwrap();
    let second = parser::load(&bytes[..], &clips, TILE_MAP_CAPACITY, LEVEL_SIZE).unwrap();

    assert_eq!(first.tiles(), second.tiles());
    assert_that(&first.len()).is_equal_to(TILE_MAP_CAPACITY);
    assert!(first.tiles().iter().all(|tile| tile.rect.within(LEVEL_SIZE)));
}
