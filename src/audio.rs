//! Sound effects played through SDL2_mixer.

use sdl2::mixer::{self, Chunk, LoaderRWops, AUDIO_S16LSB};
use sdl2::rwops::RWops;
use tracing::{debug, info, trace, warn};

use crate::asset::Asset;
use crate::error::AudioError;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 4;
const CHUNK_SIZE: i32 = 1024;
const DEFAULT_VOLUME: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SfxState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

/// The effects player.
///
/// If the mixer cannot be opened, effects are disabled and every call is a
/// no-op. A waka sound that fails to decode on a working mixer is an error.
pub struct Sfx {
    waka: Option<Chunk>,
    state: SfxState,
}

impl Sfx {
    /// # Errors
    ///
    /// Returns `AudioError::LoadFailed` if the mixer opened but the waka
    /// sound could not be loaded.
    pub fn new() -> Result<Self, AudioError> {
        if let Err(e) = mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, AUDIO_CHANNELS, CHUNK_SIZE) {
            warn!("Failed to open audio: {}. Sound effects will be disabled.", e);
            return Ok(Self {
                waka: None,
                state: SfxState::Disabled,
            });
        }

        mixer::allocate_channels(AUDIO_CHANNELS);
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let waka = Self::load(Asset::Waka)?;
        info!("Sound effects ready");

        Ok(Self {
            waka: Some(waka),
            state: SfxState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load(asset: Asset) -> Result<Chunk, AudioError> {
        let data = asset
            .get_bytes()
            .map_err(|e| AudioError::LoadFailed(format!("{asset:?}: {e}")))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| AudioError::LoadFailed(format!("{asset:?}: {e}")))?;
        rwops
            .load_wav()
            .map_err(|e| AudioError::LoadFailed(format!("{asset:?}: {e}")))
    }

    /// Plays the waka sound unless something is already playing.
    pub fn waka(&mut self) {
        if !matches!(self.state, SfxState::Enabled { .. }) {
            return;
        }
        if mixer::Channel::all().is_playing() {
            return;
        }
        if let Some(chunk) = &self.waka {
            match mixer::Channel::all().play(chunk, 0) {
                Ok(channel) => trace!(?channel, "Playing waka"),
                Err(e) => warn!("Could not play waka: {}", e),
            }
        }
    }

    pub fn toggle_mute(&mut self) {
        self.set_mute(!self.is_muted());
    }

    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, SfxState::Enabled { volume }) => {
                self.state = SfxState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                debug!("Sound effects muted");
            }
            (false, SfxState::Muted { previous_volume }) => {
                self.state = SfxState::Enabled {
                    volume: previous_volume,
                };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                debug!("Sound effects unmuted");
            }
            _ => {}
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.state, SfxState::Muted { .. })
    }
}
