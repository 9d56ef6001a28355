//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::IVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the whole level, in pixels. The origin is the level's top-left corner.
pub const LEVEL_SIZE: IVec2 = IVec2::new(1980, 990);
/// The initial (and minimum) size of the window, in pixels.
pub const SCREEN_SIZE: IVec2 = IVec2::new(600, 600);

/// The edge length of the standard character clip on the sprite sheet.
pub const STANDARD_SPRITE_SIZE: i32 = 194;

/// Pixels travelled per frame by Pac-Man and the ghosts.
pub const PAC_SPEED: i32 = 10;

/// Upper bound on the number of tiles in the level grid (22 x 11 cells of 90px).
pub const TILE_MAP_CAPACITY: usize = ((LEVEL_SIZE.x / 90) * (LEVEL_SIZE.y / 90)) as usize;
/// Number of configured tile types, `0` (empty) included.
pub const TILE_TYPE_COUNT: u8 = 2;

/// Size of a text box buffer in bytes, terminator included.
pub const TEXT_BOX_BUFFER_SIZE: usize = 20;
/// Longest text a text box accepts.
pub const TEXT_BOX_MAX_LEN: usize = TEXT_BOX_BUFFER_SIZE - 1;
/// Characters per rendered text box line.
pub const TEXT_BOX_LINE_SIZE: usize = 10;
pub const TEXT_BOX_WIDTH: i32 = STANDARD_SPRITE_SIZE + 100;
pub const TEXT_BOX_HEIGHT: i32 = STANDARD_SPRITE_SIZE / 2;
/// Padding between a text box panel edge and its text.
pub const TEXT_BOX_PADDING: i32 = 10;

pub const TITLE_FONT_SIZE: u16 = 48;
pub const TEXT_BOX_FONT_SIZE: u16 = 36;

pub const N_SPARKLE_PARTICLES: usize = 40;
pub const POWER_UP_DURATION: Duration = Duration::from_secs(10);

pub const MAX_RECORDING_SECONDS: usize = 3;
pub const RECORDING_FREQUENCY: i32 = 44_100;
pub const RECORDING_CHANNELS: u8 = 2;
pub const RECORDING_SAMPLES: u16 = 4096;
/// Substring used to prefer a specific audio device over the system default.
pub const PREFERRED_DEVICE_NAME: &str = "High Definition";

pub const SAVE_FILE_PATH: &str = "data/pac_dialog_sf.txt";
pub const SAVE_FILE_DELIMITER: u8 = b'\n';
pub const SAVED_PROMPT: &str = "SAVED!";

pub mod prompts {
    pub const PAC_DEFAULT: &str = "hey";
    pub const BLINKY_DEFAULT: &str = "yoo";
    pub const INKY_DEFAULT: &str = "ronaldinho soccer";

    pub const PAC_HIT: &str = "OHSNAP :(";
    pub const INKY_HIT: &str = ">:)";
    pub const BLINKY_HIT: &str = "DUCK YOU";

    pub const NO_RECORDING_DEVICE: &str = "No recording devices :(";
    pub const NO_PLAYBACK_DEVICE: &str = "No playback devices :(";
}

pub mod colors {
    use sdl2::pixels::Color;

    pub const BLACK: Color = Color::RGB(0, 0, 0);
    pub const YELLOW: Color = Color::RGB(255, 255, 0);
    pub const GREEN: Color = Color::RGB(25, 102, 25);
    pub const LIGHT_BLACK: Color = Color::RGB(80, 80, 80);
    pub const COLLIDER: Color = Color::RGB(0, 255, 0);
}

pub mod animation {
    /// Frames each Pac-Man mouth clip is held for, per clip in the cycle.
    pub const PAC_DELAY: u32 = 2;
    pub const SPARKLE_DELAY: u32 = 2;
    pub const SOUND_WAVE_DELAY: u32 = 8;
    pub const CURSOR_DELAY: u32 = 8;
}

/// Odds (one in N) that something random happens on a given frame.
pub mod odds {
    pub const GHOST_TURN: u32 = 60;
    pub const SPARKLE_RESPAWN: u32 = 10;
}
