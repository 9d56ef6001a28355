//! Dialogue text boxes.

use glam::IVec2;
use sdl2::pixels::Color;
use smallvec::SmallVec;

use crate::constants::{
    STANDARD_SPRITE_SIZE, TEXT_BOX_HEIGHT, TEXT_BOX_LINE_SIZE, TEXT_BOX_MAX_LEN, TEXT_BOX_WIDTH,
};
use crate::geometry::Rect;
use crate::sprite::{Role, Sprite};
use crate::texture::SheetId;

/// Panel region on the text box sheet.
pub const PANEL_CLIP: &str = "textbox/panel";

/// Outcome of a key press on an editable text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Unchanged,
    Changed,
    /// Enter on a non-empty buffer. The record to persist, delimiter excluded.
    Submitted(String),
}

/// A panel with a short text, drawn above its owner.
///
/// The buffer never exceeds [`TEXT_BOX_MAX_LEN`] bytes.
#[derive(Debug, Clone)]
pub struct TextBox {
    text: String,
    pub color: Color,
    pub saved: bool,
    pub panel: Sprite,
}

impl TextBox {
    pub fn new(text: &str, color: Color, panel_clip: Rect) -> Self {
        let panel = Sprite::new(Role::TextPanel, SheetId::TextBox, IVec2::ZERO)
            .with_clips([panel_clip])
            .with_scale(IVec2::new(TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT));
        let mut text_box = Self {
            text: String::new(),
            color,
            saved: false,
            panel,
        };
        text_box.set_text(text);
        text_box
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text, cut to the buffer size on a character boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncate(text, TEXT_BOX_MAX_LEN).to_string();
    }

    pub fn is_full(&self) -> bool {
        self.text.len() >= TEXT_BOX_MAX_LEN
    }

    /// Appends typed text while it fits. Clears the saved mark.
    pub fn input(&mut self, typed: &str) -> Edit {
        if self.is_full() {
            return Edit::Unchanged;
        }
        let room = TEXT_BOX_MAX_LEN - self.text.len();
        self.text.push_str(truncate(typed, room));
        self.saved = false;
        Edit::Changed
    }

    /// Removes the last character. Clears the saved mark.
    pub fn backspace(&mut self) -> Edit {
        match self.text.pop() {
            Some(_) => {
                self.saved = false;
                Edit::Changed
            }
            None => Edit::Unchanged,
        }
    }

    /// Marks a non-empty buffer as saved and hands back the record to store.
    pub fn submit(&mut self) -> Edit {
        if self.text.is_empty() {
            return Edit::Unchanged;
        }
        self.saved = true;
        Edit::Submitted(self.text.clone())
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// The text split into rendered lines of at most [`TEXT_BOX_LINE_SIZE`] bytes.
    pub fn lines(&self) -> SmallVec<[&str; 3]> {
        split_lines(&self.text)
    }

    /// Places the panel above and right of `owner`, grown upwards by one
    /// `line_height` per extra line.
    pub fn anchor(&mut self, owner: IVec2, line_height: i32) {
        let half = STANDARD_SPRITE_SIZE / 2;
        self.place(IVec2::new(owner.x + half, owner.y - half), line_height);
    }

    /// Places the panel with its unexpanded top-left corner at `pos`.
    pub fn place(&mut self, pos: IVec2, line_height: i32) {
        let grow = line_height * (self.line_count() as i32 - 1);
        let width = self.panel.size().x;
        self.panel.move_to(IVec2::new(pos.x, pos.y - grow));
        self.panel.set_scale(IVec2::new(width, TEXT_BOX_HEIGHT + grow));
    }

    pub fn rect(&self) -> Rect {
        self.panel.render_rect()
    }
}

/// Splits `text` into lines of at most [`TEXT_BOX_LINE_SIZE`] bytes, cut on
/// character boundaries. A full last line opens an empty one for the cursor.
pub fn split_lines(text: &str) -> SmallVec<[&str; 3]> {
    let mut lines = SmallVec::new();
    let mut rest = text;
    loop {
        let line = truncate(rest, TEXT_BOX_LINE_SIZE);
        lines.push(line);
        if line.len() == rest.len() && line.len() < TEXT_BOX_LINE_SIZE {
            return lines;
        }
        rest = &rest[line.len()..];
    }
}

/// The longest prefix of `text` no longer than `max` bytes ending on a character boundary.
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
