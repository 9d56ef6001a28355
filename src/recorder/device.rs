//! Opening the capture and playback devices behind the recorder.

use sdl2::audio::AudioSpecDesired;
use sdl2::AudioSubsystem;
use tracing::{debug, info, warn};

use crate::constants::prompts::{NO_PLAYBACK_DEVICE, NO_RECORDING_DEVICE};
use crate::constants::{
    MAX_RECORDING_SECONDS, PREFERRED_DEVICE_NAME, RECORDING_CHANNELS, RECORDING_FREQUENCY, RECORDING_SAMPLES,
};
use crate::error::AudioError;

use super::tape::{CaptureCallback, PlaybackCallback};
use super::{Recorder, Tape};

/// Picks the first device name containing [`PREFERRED_DEVICE_NAME`].
///
/// `None` means the system default device.
pub fn preferred_device<I: IntoIterator<Item = String>>(names: I) -> Option<String> {
    names.into_iter().find(|name| name.contains(PREFERRED_DEVICE_NAME))
}

fn device_names(audio: &AudioSubsystem, capture: bool) -> Vec<String> {
    let count = if capture {
        audio.num_audio_capture_devices()
    } else {
        audio.num_audio_playback_devices()
    };

    (0..count.unwrap_or(0))
        .filter_map(|index| {
            let name = if capture {
                audio.audio_capture_device_name(index)
            } else {
                audio.audio_playback_device_name(index)
            };
            name.inspect_err(|error| warn!(index, capture, %error, "Could not read audio device name"))
                .ok()
        })
        .collect()
}

/// Opens both recorder devices on a fresh tape.
///
/// # Errors
///
/// Returns `AudioError::DeviceOpen` naming the direction that failed. Its
/// [`AudioError::prompt`] is what Pac-Man says instead of his prompt.
pub fn open(audio: &AudioSubsystem) -> Result<Recorder, AudioError> {
    let desired = AudioSpecDesired {
        freq: Some(RECORDING_FREQUENCY),
        channels: Some(RECORDING_CHANNELS),
        samples: Some(RECORDING_SAMPLES),
    };

    let capture_name = preferred_device(device_names(audio, true));
    let playback_name = preferred_device(device_names(audio, false));
    debug!(capture = ?capture_name, playback = ?playback_name, "Selected recorder devices");

    let tape = Tape::for_duration(MAX_RECORDING_SECONDS, RECORDING_FREQUENCY, RECORDING_CHANNELS).shared();

    let capture = audio
        .open_capture(capture_name.as_deref(), &desired, |spec| {
            let mut tape_ref = tape.lock();
            if spec.freq != RECORDING_FREQUENCY || spec.channels != RECORDING_CHANNELS {
                *tape_ref = Tape::for_duration(MAX_RECORDING_SECONDS, spec.freq, spec.channels);
            }
            debug!(freq = spec.freq, channels = spec.channels, samples = spec.samples, "Capture device opened");
            CaptureCallback { tape: tape.clone() }
        })
        .map_err(|reason| AudioError::DeviceOpen {
            kind: "recording",
            reason,
        })?;

    let playback = audio
        .open_playback(playback_name.as_deref(), &desired, |spec| {
            debug!(freq = spec.freq, channels = spec.channels, samples = spec.samples, "Playback device opened");
            PlaybackCallback { tape: tape.clone() }
        })
        .map_err(|reason| AudioError::DeviceOpen {
            kind: "playback",
            reason,
        })?;

    info!(capacity = tape.lock().capacity(), "Recorder ready");
    Ok(Recorder::new(tape, Box::new(capture), Box::new(playback)))
}

impl AudioError {
    /// The short message shown in place of Pac-Man's prompt for a device failure.
    pub fn prompt(&self) -> &'static str {
        match self {
            AudioError::DeviceOpen { kind: "playback", .. } => NO_PLAYBACK_DEVICE,
            _ => NO_RECORDING_DEVICE,
        }
    }
}
