//! Loading the level grid from its text encoding.
//!
//! Each byte is one tile: `0` is empty, `1..TILE_TYPE_COUNT` are solid blocks
//! and anything else is undefined. Line breaks are skipped. Tiles are laid
//! out left to right using their own size as the cell size, wrapping to the
//! next row once a tile reaches the level's right edge.

use std::io::{BufReader, Read};

use glam::IVec2;
use tracing::{debug, warn};

use crate::error::MapError;
use crate::geometry::Rect;

use super::{Tile, TileMap, TileType};

/// Reads tiles from `reader` until `capacity` tiles are placed or input ends.
///
/// `clips` holds one sheet region per configured tile type; its length is the
/// type count. At least the empty type's clip must be present.
///
/// # Errors
///
/// Returns `MapError::InvalidConfig` when no clips are given and
/// `MapError::Io` when reading fails.
pub fn load<R: Read>(reader: R, clips: &[Rect], capacity: usize, level_size: IVec2) -> Result<TileMap, MapError> {
    let Some(empty_clip) = clips.first().copied() else {
        return Err(MapError::InvalidConfig("at least one tile clip is required".to_string()));
    };

    let mut tiles = Vec::with_capacity(capacity);
    let mut cursor = IVec2::ZERO;
    let mut undefined = 0usize;

    for byte in BufReader::new(reader).bytes() {
        if tiles.len() >= capacity {
            break;
        }

        let byte = byte?;
        if byte == b'\n' || byte == b'\r' {
            continue;
        }

        let tile = parse_tile(byte, cursor, clips, empty_clip);
        if tile.kind == TileType::Undefined {
            undefined += 1;
        }

        if cursor.x + tile.rect.w >= level_size.x {
            cursor.x = 0;
            cursor.y += tile.rect.h;
        } else {
            cursor.x += tile.rect.w;
        }

        tiles.push(tile);
    }

    if undefined > 0 {
        warn!(undefined, "Tile map contains undefined tiles");
    }
    debug!(tile_count = tiles.len(), capacity, "Tile map loaded");

    Ok(TileMap::from_parts(tiles, clips.to_vec(), level_size))
}

/// Builds the tile for one map byte placed at `at`.
fn parse_tile(byte: u8, at: IVec2, clips: &[Rect], empty_clip: Rect) -> Tile {
    let code = byte.is_ascii_digit().then(|| byte - b'0');
    match code {
        Some(0) => Tile::new(
            TileType::Empty,
            Rect::new(at.x, at.y, empty_clip.w, empty_clip.w),
            false,
            false,
        ),
        Some(code) if (code as usize) < clips.len() => {
            let clip = clips[code as usize];
            Tile::new(TileType::Block(code), Rect::new(at.x, at.y, clip.w, clip.h), true, true)
        }
        _ => Tile::undefined(),
    }
}
