//! Embedded game assets.
//!
//! Everything under `assets/` is compiled into the binary; `Asset` names the
//! files the game needs.

use std::borrow::Cow;

use rust_embed::RustEmbed;
use strum_macros::EnumIter;
use tracing::trace;

use crate::error::AssetError;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Embedded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    /// Pac-Man and the ghosts.
    CharacterSheet,
    TextBoxSheet,
    Background,
    RecorderButton,
    SoundWave,
    Sparkles,
    PowerPellet,
    TileSheet,
    TitleFont,
    TextBoxFont,
    Waka,
    LevelMap,
}

impl Asset {
    /// Path relative to the `assets/` folder.
    pub const fn path(self) -> &'static str {
        match self {
            Asset::CharacterSheet => "images/sheet.png",
            Asset::TextBoxSheet => "images/textbox.png",
            Asset::Background => "images/background.png",
            Asset::RecorderButton => "images/recorder.png",
            Asset::SoundWave => "images/soundwave.png",
            Asset::Sparkles => "images/sparkles.png",
            Asset::PowerPellet => "images/power_pellet.png",
            Asset::TileSheet => "images/tiles.png",
            Asset::TitleFont => "fonts/title.ttf",
            Asset::TextBoxFont => "fonts/textbox.ttf",
            Asset::Waka => "sounds/waka.wav",
            Asset::LevelMap => "level.map",
        }
    }

    /// Returns the raw bytes of the asset.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotFound` if the file was not embedded.
    pub fn get_bytes(self) -> Result<Cow<'static, [u8]>, AssetError> {
        let file = Embedded::get(self.path()).ok_or(AssetError::NotFound(self.path()))?;
        trace!(asset = ?self, bytes = file.data.len(), "Asset loaded");
        Ok(file.data)
    }
}
