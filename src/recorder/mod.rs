//! Pac-Man's voice recorder.
//!
//! A four state machine driven once per frame by the recorder button and the
//! saved mark of Pac-Man's prompt:
//!
//! ```text
//! Paused --button on--> Recording --tape full--> Recorded --prompt saved--> Playback
//!   ^                                               |  ^                        |
//!   +------------------button on--------------------+  +-------tape played------+
//! ```

use strum_macros::AsRefStr;
use tracing::{debug, info};

pub mod device;
pub mod tape;

pub use tape::{SharedTape, Tape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
pub enum RecorderState {
    #[default]
    Paused,
    Recording,
    Recorded,
    Playback,
}

/// Position of the recorder button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Toggle {
    #[default]
    Off,
    On,
}

/// One direction of an audio device that can be started and stopped.
pub trait AudioChannel {
    fn resume(&mut self);
    fn pause(&mut self);
}

impl<CB: sdl2::audio::AudioCallback> AudioChannel for sdl2::audio::AudioDevice<CB> {
    fn resume(&mut self) {
        sdl2::audio::AudioDevice::resume(self);
    }

    fn pause(&mut self) {
        sdl2::audio::AudioDevice::pause(self);
    }
}

pub struct Recorder {
    state: RecorderState,
    tape: SharedTape,
    capture: Box<dyn AudioChannel>,
    playback: Box<dyn AudioChannel>,
}

impl Recorder {
    /// Both channels must already be wired to `tape` and start paused.
    pub fn new(tape: SharedTape, capture: Box<dyn AudioChannel>, playback: Box<dyn AudioChannel>) -> Self {
        Self {
            state: RecorderState::Paused,
            tape,
            capture,
            playback,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn tape(&self) -> &SharedTape {
        &self.tape
    }

    /// Advances the state machine by at most one transition.
    ///
    /// Finishing a recording switches the button off; finishing a playback
    /// clears the saved mark so it does not play again.
    pub fn update(&mut self, toggle: &mut Toggle, saved: &mut bool) -> RecorderState {
        let next = match self.state {
            RecorderState::Paused if *toggle == Toggle::On => {
                self.tape.lock().rewind();
                self.capture.resume();
                RecorderState::Recording
            }
            RecorderState::Recording => {
                let (past_end, samples) = self.cursor_status();
                if past_end {
                    self.capture.pause();
                    *toggle = Toggle::Off;
                    info!(samples, "Recording finished");
                    RecorderState::Recorded
                } else {
                    RecorderState::Recording
                }
            }
            RecorderState::Recorded if *toggle == Toggle::On => RecorderState::Paused,
            RecorderState::Recorded if *saved => {
                self.tape.lock().rewind();
                self.playback.resume();
                RecorderState::Playback
            }
            RecorderState::Playback => {
                if self.cursor_status().0 {
                    self.playback.pause();
                    *saved = false;
                    info!("Playback finished");
                    RecorderState::Recorded
                } else {
                    RecorderState::Playback
                }
            }
            state => state,
        };

        if next != self.state {
            debug!(from = self.state.as_ref(), to = next.as_ref(), "Recorder transition");
            self.state = next;
        }
        self.state
    }

    /// Reads the cursor under the tape lock, released before any device call.
    /// The device callbacks take the same lock while SDL holds the device's own.
    fn cursor_status(&self) -> (bool, usize) {
        let tape = self.tape.lock();
        (tape.is_past_end(), tape.cursor())
    }
}
