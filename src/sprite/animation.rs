//! Frame-counter driven clip cycling.

use tracing::warn;

use super::Sprite;

/// Picks the clip for `frame` given `clip_count` clips each held for
/// `clip_count * delay` frames.
///
/// Returns the clip index and whether the counter has run past the end of the
/// cycle, in which case the caller resets it and shows the last clip.
pub fn clip_index(frame: u32, clip_count: usize, delay: u32) -> (usize, bool) {
    let count = clip_count as u32;
    let index = (frame / (count * delay)) as usize;
    if index >= clip_count {
        (clip_count - 1, true)
    } else {
        (index, false)
    }
}

impl Sprite {
    /// Selects the clip for the current frame counter.
    ///
    /// The counter is owned by the caller and must be advanced separately.
    /// It is reset to zero when the cycle wraps.
    pub fn animate(&mut self, delay: u32) {
        let clip_count = self.clip_count();
        if clip_count == 0 || delay == 0 {
            warn!(role = ?self.role, clip_count, delay, "Cannot animate without clips or delay");
            return;
        }

        let (index, wrapped) = clip_index(self.frame, clip_count, delay);
        if wrapped {
            self.frame = 0;
        }
        self.set_clip(index);
    }

    /// Advances the frame counter and then animates.
    pub fn tick_animation(&mut self, delay: u32) {
        self.frame = self.frame.wrapping_add(1);
        self.animate(delay);
    }
}
