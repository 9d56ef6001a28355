//! Named clip regions on the shared sprite sheets.
//!
//! The table is generated by `build.rs` from `assets/atlas.json`.

include!(concat!(env!("OUT_DIR"), "/atlas_data.rs"));

use tracing::debug;

use crate::error::TextureError;
use crate::geometry::Rect;

/// A clip as stored in the atlas metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClipFrame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<ClipFrame> for Rect {
    fn from(frame: ClipFrame) -> Self {
        Rect::new(frame.x, frame.y, frame.width, frame.height)
    }
}

/// Looks up a clip by name, e.g. `"pac/closed"`.
pub fn clip(name: &str) -> Result<Rect, TextureError> {
    ATLAS_FRAMES.get(name).copied().map(Rect::from).ok_or_else(|| {
        debug!(clip_name = name, "Atlas clip not found");
        TextureError::ClipNotFound(name.to_string())
    })
}

/// Looks up several clips at once, preserving order.
pub fn clips(names: &[&str]) -> Result<Vec<Rect>, TextureError> {
    names.iter().map(|name| clip(name)).collect()
}
