//! Centralized error types for the game.
//!
//! Startup failures bubble up as [`GameError`] and end the process before the
//! frame loop begins. Everything past startup either cannot fail or is logged
//! and skipped where it happens.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(&'static str),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Clip not found in atlas: {0}")]
    ClipNotFound(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors related to the level tile map.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("IO error while reading the tile map: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid map configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to audio devices and sound effects.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Failed to open {kind} device: {reason}")]
    DeviceOpen { kind: &'static str, reason: String },

    #[error("Failed to load sound: {0}")]
    LoadFailed(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
