//! Loaded sprite sheets and the clips defined on them.

use glam::IVec2;
use sdl2::render::Texture;
use strum::EnumCount;
use strum_macros::{AsRefStr, EnumCount, EnumIter};
use tracing::warn;

pub mod atlas;
pub mod text;

/// One loaded image every sprite clip refers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
pub enum SheetId {
    /// Pac-Man and the ghosts.
    Characters,
    TextBox,
    Background,
    RecorderButton,
    SoundWave,
    Sparkles,
    PowerUp,
    /// The level tiles. A streaming texture patched by the ripple effect.
    Tiles,
    /// The rendered underscore of the text cursor.
    TextCursor,
}

const MAX_SHEETS: usize = SheetId::COUNT;

/// Statically sized registry of sheet textures.
pub struct Sheets {
    textures: micromap::Map<SheetId, Texture, MAX_SHEETS>,
}

impl Default for Sheets {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheets {
    pub fn new() -> Self {
        Self {
            textures: micromap::Map::new(),
        }
    }

    /// Registers a sheet, replacing any previous texture for `id`.
    pub fn insert(&mut self, id: SheetId, texture: Texture) {
        self.textures.insert(id, texture);
    }

    pub fn get(&self, id: SheetId) -> Option<&Texture> {
        let texture = self.textures.get(&id);
        if texture.is_none() {
            warn!(sheet = id.as_ref(), "Sheet not loaded");
        }
        texture
    }

    pub fn get_mut(&mut self, id: SheetId) -> Option<&mut Texture> {
        self.textures.get_mut(&id)
    }

    /// Pixel size of a loaded sheet.
    pub fn size(&self, id: SheetId) -> Option<IVec2> {
        self.get(id).map(|texture| {
            let query = texture.query();
            IVec2::new(query.width as i32, query.height as i32)
        })
    }
}
