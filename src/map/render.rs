//! Tile map rendering and tile sheet uploads.

use sdl2::render::{Canvas, RenderTarget, Texture};
use tracing::warn;

use crate::camera::Camera;
use crate::error::TextureError;
use crate::geometry::Rect;

use super::ripple::PixelBuffer;
use super::TileMap;

/// Draws every visible tile that intersects the camera.
pub fn render_tile_map<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    sheet: &Texture,
    map: &TileMap,
    camera: &Camera,
) -> Result<(), TextureError> {
    for (index, tile) in map.visible_in(camera.view) {
        let Some(clip) = map.clip_for(tile.kind) else {
            warn!(index, kind = ?tile.kind, "No clip for visible tile");
            continue;
        };
        let dest = Rect::from_pos_size(camera.to_screen(tile.rect.pos()), tile.rect.size());
        canvas
            .copy(sheet, Some(clip.into()), Some(dest.into()))
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
    }
    Ok(())
}

/// Uploads `region` of the CPU copy into the streaming tile sheet.
pub fn upload_region(sheet: &mut Texture, pixels: &PixelBuffer, region: Rect) -> Result<(), TextureError> {
    let bytes = pixels.region_bytes(region);
    let pitch = region.w as usize * 4;
    sheet
        .update(Some(region.into()), &bytes, pitch)
        .map_err(|e| TextureError::RenderFailed(e.to_string()))
}
