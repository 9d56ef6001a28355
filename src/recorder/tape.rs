//! The sample buffer shared between the main loop and the audio callbacks.

use std::sync::Arc;

use parking_lot::Mutex;
use sdl2::audio::AudioCallback;

/// A fixed-size recording with a single read/write cursor.
///
/// The buffer has one second of slack past `max`, so a block that starts at or
/// below `max` always fits. Copies are still clamped to the buffer end.
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    samples: Vec<f32>,
    cursor: usize,
    max: usize,
}

pub type SharedTape = Arc<Mutex<Tape>>;

impl Tape {
    /// A tape holding `seconds` of audio at `frequency` with `channels` interleaved channels.
    pub fn for_duration(seconds: usize, frequency: i32, channels: u8) -> Self {
        let per_second = frequency.max(0) as usize * channels as usize;
        Self::new((seconds + 1) * per_second, seconds * per_second)
    }

    pub fn new(capacity: usize, max: usize) -> Self {
        Self {
            samples: vec![0.0; capacity],
            cursor: 0,
            max,
        }
    }

    pub fn shared(self) -> SharedTape {
        Arc::new(Mutex::new(self))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Whether the cursor has run past the recording length.
    pub fn is_past_end(&self) -> bool {
        self.cursor > self.max
    }

    /// Copies a captured block in at the cursor and advances it by the block length.
    pub fn record(&mut self, block: &[f32]) {
        let start = self.cursor.min(self.samples.len());
        let end = (start + block.len()).min(self.samples.len());
        self.samples[start..end].copy_from_slice(&block[..end - start]);
        self.cursor = self.cursor.saturating_add(block.len());
    }

    /// Fills `out` from the cursor and advances it by the block length.
    ///
    /// Anything past the buffer end plays as silence.
    pub fn play(&mut self, out: &mut [f32]) {
        let start = self.cursor.min(self.samples.len());
        let end = (start + out.len()).min(self.samples.len());
        let (filled, silent) = out.split_at_mut(end - start);
        filled.copy_from_slice(&self.samples[start..end]);
        silent.fill(0.0);
        self.cursor = self.cursor.saturating_add(out.len());
    }
}

/// Hardware callback storing microphone input on the tape.
pub struct CaptureCallback {
    pub tape: SharedTape,
}

impl AudioCallback for CaptureCallback {
    type Channel = f32;

    fn callback(&mut self, input: &mut [f32]) {
        self.tape.lock().record(input);
    }
}

/// Hardware callback feeding the tape to the speakers.
pub struct PlaybackCallback {
    pub tape: SharedTape,
}

impl AudioCallback for PlaybackCallback {
    type Channel = f32;

    fn callback(&mut self, output: &mut [f32]) {
        self.tape.lock().play(output);
    }
}
