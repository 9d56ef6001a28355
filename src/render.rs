//! Drawing the world back to front.

use glam::IVec2;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, RenderTarget, TextureCreator};
use sdl2::video::WindowContext;
use tracing::warn;

use crate::camera::Camera;
use crate::constants::{colors, TEXT_BOX_PADDING};
use crate::error::TextureError;
use crate::geometry::Rect;
use crate::map::render::{render_tile_map, upload_region};
use crate::sprite::{Flip, Sprite};
use crate::textbox::TextBox;
use crate::texture::text::{RenderedText, TextRenderer};
use crate::texture::{SheetId, Sheets};
use crate::world::World;

const BOUNDS_ALPHA: u8 = 30;
const PARTS_ALPHA: u8 = 150;

/// Draws a sprite at its size, rotation and mirroring, relative to the camera.
pub fn render_sprite<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    sheets: &Sheets,
    sprite: &Sprite,
    camera: &Camera,
) -> Result<(), TextureError> {
    let Some(clip) = sprite.current_clip() else {
        return Ok(());
    };
    let size = sprite.size();
    if clip.is_empty() || size.x <= 0 || size.y <= 0 {
        return Ok(());
    }
    let Some(texture) = sheets.get(sprite.sheet) else {
        return Ok(());
    };

    let dest = Rect::from_pos_size(camera.to_screen(sprite.pos), size);
    canvas
        .copy_ex(
            texture,
            Some(clip.into()),
            Some(dest.into()),
            sprite.angle,
            None,
            sprite.flip.contains(Flip::HORIZONTAL),
            sprite.flip.contains(Flip::VERTICAL),
        )
        .map_err(|e| TextureError::RenderFailed(e.to_string()))
}

/// Debug overlay of a sprite's colliders.
pub fn render_colliders<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    sprite: &Sprite,
    camera: &Camera,
    color: Color,
) -> Result<(), TextureError> {
    let colliders = sprite.colliders();
    let to_screen = |rect: Rect| -> sdl2::rect::Rect { Rect::from_pos_size(camera.to_screen(rect.pos()), rect.size()).into() };
    canvas.set_blend_mode(BlendMode::Blend);

    if let Some(bounds) = colliders.bounds() {
        canvas.set_draw_color(Color::RGBA(color.r, color.g, color.b, BOUNDS_ALPHA));
        canvas
            .fill_rect(to_screen(bounds))
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
    }

    canvas.set_draw_color(Color::RGBA(color.r, color.g, color.b, PARTS_ALPHA));
    let parts: Vec<sdl2::rect::Rect> = colliders.parts().iter().map(|&part| to_screen(part)).collect();
    canvas
        .fill_rects(&parts)
        .map_err(|e| TextureError::RenderFailed(e.to_string()))?;

    if let Some(circle) = colliders.circle() {
        let center = camera.to_screen(circle.center);
        canvas
            .draw_line((center.x, center.y), (center.x + circle.r, center.y))
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
    }

    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}

/// Holds everything needed to turn a [`World`] into pixels.
pub struct Renderer {
    pub creator: &'static TextureCreator<WindowContext>,
    pub sheets: Sheets,
    pub box_font: TextRenderer,
    title: RenderedText,
    pub show_colliders: bool,
}

impl Renderer {
    pub fn new(
        creator: &'static TextureCreator<WindowContext>,
        sheets: Sheets,
        box_font: TextRenderer,
        title: RenderedText,
    ) -> Self {
        Self {
            creator,
            sheets,
            box_font,
            title,
            show_colliders: true,
        }
    }

    fn draw_text_box<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        text_box: &TextBox,
        camera: &Camera,
    ) -> Result<(), TextureError> {
        render_sprite(canvas, &self.sheets, &text_box.panel, camera)?;

        let origin = camera.to_screen(text_box.rect().pos()) + IVec2::splat(TEXT_BOX_PADDING);
        let line_height = self.box_font.line_height();
        for (index, line) in text_box.lines().into_iter().enumerate() {
            let Some(rendered) = self.box_font.render(self.creator, line, text_box.color)? else {
                continue;
            };
            let dest = Rect::from_pos_size(origin + IVec2::new(0, index as i32 * line_height), rendered.size);
            canvas
                .copy(&rendered.texture, None, Some(dest.into()))
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            // SAFETY: the texture was created by `self.creator`, which outlives the renderer.
            unsafe { rendered.texture.destroy() };
        }
        Ok(())
    }

    /// Draws one frame: background, tiles, title, dialogue, widgets,
    /// power-up or sparkles, ghosts, Pac-Man and the collider overlay.
    pub fn draw<T: RenderTarget>(&mut self, canvas: &mut Canvas<T>, world: &mut World) -> Result<(), TextureError> {
        if let Some(region) = world.take_dirty_tiles() {
            match self.sheets.get_mut(SheetId::Tiles) {
                Some(sheet) => upload_region(sheet, world.tile_pixels(), region)?,
                None => warn!("Tile sheet missing, ripple not uploaded"),
            }
        }

        let camera = world.camera;
        canvas.set_draw_color(colors::BLACK);
        canvas.clear();

        if let Some(background) = self.sheets.get(SheetId::Background) {
            let query = background.query();
            let dest = Rect::new(-camera.view.x, -camera.view.y, query.width as i32, query.height as i32);
            canvas
                .copy(background, None, Some(dest.into()))
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        }

        if let Some(tiles) = self.sheets.get(SheetId::Tiles) {
            render_tile_map(canvas, tiles, &world.map, &camera)?;
        }

        let title = Rect::from_pos_size(camera.to_screen(IVec2::ZERO), self.title.size);
        canvas
            .copy(&self.title.texture, None, Some(title.into()))
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;

        self.draw_text_box(canvas, &world.pac_box, &camera)?;
        render_sprite(canvas, &self.sheets, &world.cursor.sprite, &camera)?;
        if world.pac_box.saved {
            self.draw_text_box(canvas, &world.saved_box, &camera)?;
        }
        self.draw_text_box(canvas, &world.blinky_box, &camera)?;
        self.draw_text_box(canvas, &world.inky_box, &camera)?;
        render_sprite(canvas, &self.sheets, &world.button.sprite, &camera)?;
        if world.recorder.state() == Some(crate::recorder::RecorderState::Playback) {
            render_sprite(canvas, &self.sheets, &world.sound_wave.sprite, &camera)?;
        }

        if world.power_up.is_powered() {
            for particle in world.sparkles.particles() {
                render_sprite(canvas, &self.sheets, particle, &camera)?;
            }
        } else {
            render_sprite(canvas, &self.sheets, &world.power_up.sprite, &camera)?;
        }

        for sprite in [&world.blinky, &world.inky, &world.pac] {
            render_sprite(canvas, &self.sheets, sprite, &camera)?;
        }

        if self.show_colliders {
            for sprite in [&world.pac, &world.blinky, &world.inky] {
                render_colliders(canvas, sprite, &camera, colors::COLLIDER)?;
            }
        }

        canvas.present();
        Ok(())
    }
}
