//! The wave painted across the tile sheet when Pac-Man bumps into a block.

use tracing::warn;

use crate::geometry::Rect;

/// A CPU copy of a 32-bit image, one `u32` per pixel, rows packed tightly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wraps raw pixels. Returns `None` if the length does not match the size.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self { width, height, pixels })
    }

    /// Builds a buffer from native-endian bytes with the given row pitch.
    pub fn from_bytes(width: usize, height: usize, pitch: usize, bytes: &[u8]) -> Option<Self> {
        if pitch < width * 4 || bytes.len() < pitch * height {
            return None;
        }
        let pixels = bytes
            .chunks(pitch)
            .take(height)
            .flat_map(|row| row[..width * 4].chunks_exact(4))
            .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    fn set(&mut self, x: usize, y: isize, value: u32) -> bool {
        if y < 0 || y as usize >= self.height || x >= self.width {
            return false;
        }
        self.pixels[y as usize * self.width + x] = value;
        true
    }

    fn copy_from(&mut self, other: &PixelBuffer, x: usize, y: isize) -> bool {
        match (y >= 0).then(|| other.get(x, y as usize)).flatten() {
            Some(value) => self.set(x, y, value),
            None => false,
        }
    }

    /// Native-endian bytes of the rows covered by `region`, tightly packed.
    pub fn region_bytes(&self, region: Rect) -> Vec<u8> {
        let (x, w) = (region.x.max(0) as usize, region.w as usize);
        (region.y.max(0) as usize..region.bottom().max(0) as usize)
            .filter(|&row| row < self.height)
            .flat_map(|row| {
                let start = row * self.width + x.min(self.width);
                let end = row * self.width + (x + w).min(self.width);
                self.pixels[start..end].iter().flat_map(|px| px.to_ne_bytes())
            })
            .collect()
    }
}

/// Vertical displacement of the wave at column `x`.
pub fn wave_offset(x: usize, phase: u32) -> isize {
    let step = (x as u64 + phase as u64) / 5;
    ((step as f64).sin() * 5.0) as isize
}

/// Paints a five pixel thick sine band across the middle of `pixels`.
///
/// The rows the band can reach are first restored from `pristine`, so
/// repeated calls never compound. Returns the region that changed, which is
/// empty when nothing could be written.
pub fn ripple(pixels: &mut PixelBuffer, pristine: &PixelBuffer, phase: u32, color: u32) -> Rect {
    if pixels.width != pristine.width || pixels.height != pristine.height {
        warn!(
            patched = ?(pixels.width, pixels.height),
            pristine = ?(pristine.width, pristine.height),
            "Pixel buffers differ in size, skipping ripple"
        );
        return Rect::default();
    }

    let mid = (pixels.height / 2) as isize;
    let mut top = isize::MAX;
    let mut bottom = isize::MIN;

    for x in 0..pixels.width {
        let offset = wave_offset(x, phase);

        for row in (mid - 4)..=(mid + 8) {
            if pixels.copy_from(pristine, x, row) {
                top = top.min(row);
                bottom = bottom.max(row);
            }
        }

        for row in (mid - offset)..(mid - offset + 5) {
            if pixels.set(x, row, color) {
                top = top.min(row);
                bottom = bottom.max(row);
            }
        }
    }

    if top > bottom {
        return Rect::default();
    }
    Rect::new(0, top as i32, pixels.width as i32, (bottom - top + 1) as i32)
}
