//! The static level grid and the queries sprites run against it.

use glam::IVec2;

use crate::geometry::{intersects, Rect};

pub mod parser;
pub mod render;
pub mod ripple;

/// Kind of a level tile, as encoded by a digit in the map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Digit `0`: an invisible, walkable cell.
    Empty,
    /// A solid block. The payload is the digit it was read from.
    Block(u8),
    /// Any character without a configured type. Placed as a zero-sized tile.
    Undefined,
}

impl TileType {
    /// Tile type colliding with which makes Pac-Man ripple the tile sheet.
    pub const STANDARD_BLOCK: TileType = TileType::Block(1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileType,
    /// Both the render destination and the collider.
    pub rect: Rect,
    pub solid: bool,
    pub visible: bool,
}

impl Tile {
    pub const fn new(kind: TileType, rect: Rect, solid: bool, visible: bool) -> Self {
        Self {
            kind,
            rect,
            solid,
            visible,
        }
    }

    pub const fn undefined() -> Self {
        Self::new(TileType::Undefined, Rect::new(0, 0, 0, 0), false, false)
    }
}

/// An ordered, fixed-capacity list of tiles covering the level.
///
/// Built once by [`parser::load`]; never resized afterwards.
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Tile>,
    /// Sheet region per tile type code, `0` included.
    clips: Vec<Rect>,
    level_size: IVec2,
}

impl TileMap {
    /// A map with no tiles. Only the level bounds apply.
    pub fn empty(level_size: IVec2) -> Self {
        Self {
            tiles: Vec::new(),
            clips: Vec::new(),
            level_size,
        }
    }

    /// A map from already placed tiles and the sheet clip of each type code.
    pub fn from_parts(tiles: Vec<Tile>, clips: Vec<Rect>, level_size: IVec2) -> Self {
        Self {
            tiles,
            clips,
            level_size,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn level_size(&self) -> IVec2 {
        self.level_size
    }

    /// The sheet region drawn for a tile type, if one is configured.
    pub fn clip_for(&self, kind: TileType) -> Option<Rect> {
        match kind {
            TileType::Empty => self.clips.first().copied(),
            TileType::Block(code) => self.clips.get(code as usize).copied(),
            TileType::Undefined => None,
        }
    }

    /// Index of the first solid tile overlapping `rect`, in map order.
    pub fn first_solid_hit(&self, rect: Rect) -> Option<usize> {
        self.tiles
            .iter()
            .position(|tile| tile.solid && intersects(tile.rect, rect))
    }

    /// Tiles that should be drawn for the given viewport, with their indices.
    pub fn visible_in(&self, camera: Rect) -> impl Iterator<Item = (usize, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, tile)| tile.visible && intersects(tile.rect, camera))
    }
}
