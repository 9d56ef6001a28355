//! TTF text rendering for the title and the dialogue boxes.

use glam::IVec2;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

use crate::error::TextureError;
use crate::world::TextMetrics;

/// A rendered piece of text and its pixel size.
pub struct RenderedText {
    pub texture: Texture,
    pub size: IVec2,
}

/// Renders strings with one font into fresh textures.
pub struct TextRenderer {
    font: Font<'static, 'static>,
    line_height: i32,
}

impl TextRenderer {
    pub fn new(font: Font<'static, 'static>) -> Self {
        let line_height = font.height();
        Self { font, line_height }
    }

    /// Height of one rendered line.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Width and height `text` would render at.
    pub fn measure(&self, text: &str) -> Result<IVec2, TextureError> {
        if text.is_empty() {
            return Ok(IVec2::new(0, self.line_height));
        }
        let (w, h) = self
            .font
            .size_of(text)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        Ok(IVec2::new(w as i32, h as i32))
    }

    /// Renders `text`. Empty text renders nothing.
    pub fn render(
        &self,
        creator: &TextureCreator<WindowContext>,
        text: &str,
        color: Color,
    ) -> Result<Option<RenderedText>, TextureError> {
        if text.is_empty() {
            return Ok(None);
        }

        let surface = self
            .font
            .render(text)
            .blended(color)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let size = IVec2::new(surface.width() as i32, surface.height() as i32);
        let texture = creator
            .create_texture_from_surface(&surface)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;

        Ok(Some(RenderedText { texture, size }))
    }
}

impl TextMetrics for TextRenderer {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn text_width(&self, text: &str) -> i32 {
        self.measure(text).map(|size| size.x).unwrap_or_default()
    }
}
