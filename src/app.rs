use std::borrow::Cow;
use std::time::{Duration, Instant};

use circular_buffer::CircularBuffer;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::image::{ImageRWops, Sdl2ImageContext};
use sdl2::keyboard::Scancode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::surface::Surface;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::{debug, info, trace, warn};

use crate::asset::Asset;
use crate::audio::Sfx;
use crate::constants::{
    colors, LEVEL_SIZE, LOOP_TIME, SAVE_FILE_PATH, SCREEN_SIZE, TEXT_BOX_FONT_SIZE, TILE_MAP_CAPACITY, TILE_TYPE_COUNT,
    TITLE_FONT_SIZE,
};
use crate::direction::Direction;
use crate::error::{GameError, GameResult, TextureError};
use crate::events::GameCommand;
use crate::formatter;
use crate::geometry::Rect;
use crate::map::parser;
use crate::map::render::upload_region;
use crate::map::ripple::PixelBuffer;
use crate::platform;
use crate::prompts::SaveFile;
use crate::recorder;
use crate::render::Renderer;
use crate::sprite::Step;
use crate::texture::text::TextRenderer;
use crate::texture::{SheetId, Sheets};
use crate::textbox::Edit;
use crate::world::{FrameInput, RecorderSlot, World};

/// Frames averaged for the frame time report.
const FRAME_WINDOW: usize = 60;
/// Frames between two frame time reports.
const REPORT_PERIOD: u64 = 60 * 60;

fn sdl_err(e: impl ToString) -> GameError {
    GameError::Sdl(e.to_string())
}

/// Owns SDL, the window and the world, and runs one frame per [`App::run`] call.
pub struct App {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    renderer: Renderer,
    world: World,
    sfx: Sfx,
    save_file: SaveFile,
    frame_times: CircularBuffer<FRAME_WINDOW, Duration>,
    frame: u64,
    focused: bool,
    // Dropping these shuts the matching SDL subsystem down
    _image_context: Sdl2ImageContext,
    _audio_subsystem: AudioSubsystem,
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, loads every asset and builds the world.
    ///
    /// # Errors
    ///
    /// Any SDL initialization failure, missing or undecodable asset, or an
    /// unreadable save file.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(sdl_err)?;
        let video = sdl_context.video().map_err(sdl_err)?;
        let audio = sdl_context.audio().map_err(sdl_err)?;
        let event_pump = sdl_context.event_pump().map_err(sdl_err)?;
        let image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(sdl_err)?;
        let ttf: &'static Sdl2TtfContext = Box::leak(Box::new(sdl2::ttf::init().map_err(sdl_err)?));

        trace!(width = SCREEN_SIZE.x, height = SCREEN_SIZE.y, "Creating game window");
        let mut window = video
            .window("Pac Dialog", SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)
            .resizable()
            .position_centered()
            .build()
            .map_err(sdl_err)?;
        window
            .set_minimum_size(SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)
            .map_err(sdl_err)?;
        window
            .set_maximum_size(LEVEL_SIZE.x as u32, LEVEL_SIZE.y as u32)
            .map_err(sdl_err)?;

        let canvas = window.into_canvas().accelerated().present_vsync().build().map_err(sdl_err)?;
        debug!(renderer = canvas.info().name, "Canvas renderer initialized");
        let creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));

        video.text_input().start();

        let mut sheets = Sheets::new();
        for (id, asset, color_key) in [
            (SheetId::Characters, Asset::CharacterSheet, Some(colors::BLACK)),
            (SheetId::TextBox, Asset::TextBoxSheet, None),
            (SheetId::Background, Asset::Background, None),
            (SheetId::RecorderButton, Asset::RecorderButton, None),
            (SheetId::SoundWave, Asset::SoundWave, None),
            (SheetId::Sparkles, Asset::Sparkles, None),
            (SheetId::PowerUp, Asset::PowerPellet, None),
        ] {
            sheets.insert(id, load_texture(creator, asset, color_key)?);
        }

        let (tile_sheet, tile_pixels) = load_tile_sheet(creator)?;
        let tile_size = IVec2::new(tile_pixels.width() as i32, tile_pixels.height() as i32);
        sheets.insert(SheetId::Tiles, tile_sheet);

        let title_font = TextRenderer::new(load_font(ttf, Asset::TitleFont, TITLE_FONT_SIZE)?);
        let box_font = TextRenderer::new(load_font(ttf, Asset::TextBoxFont, TEXT_BOX_FONT_SIZE)?);
        let title = title_font
            .render(creator, "pacman", colors::YELLOW)?
            .ok_or_else(|| TextureError::RenderFailed("empty title".to_string()))?;
        let underscore = box_font
            .render(creator, "_", colors::BLACK)?
            .ok_or_else(|| TextureError::RenderFailed("empty cursor".to_string()))?;
        let cursor_glyph = underscore.size;
        sheets.insert(SheetId::TextCursor, underscore.texture);

        let map_bytes = Asset::LevelMap.get_bytes()?;
        let tile_clips = vec![Rect::from_pos_size(IVec2::ZERO, tile_size); TILE_TYPE_COUNT as usize];
        let map = parser::load(&map_bytes[..], &tile_clips, TILE_MAP_CAPACITY, LEVEL_SIZE)?;

        let power_up_clip = Rect::from_pos_size(IVec2::ZERO, sheets.size(SheetId::PowerUp).unwrap_or(IVec2::ZERO));

        let sfx = Sfx::new()?;
        let recorder = match recorder::device::open(&audio) {
            Ok(recorder) => RecorderSlot::Ready(recorder),
            Err(e) => {
                warn!("Recorder unavailable: {}", e);
                RecorderSlot::Unavailable(e.prompt())
            }
        };

        let mut rng = SmallRng::from_rng(&mut rand::rng());
        let mut save_file = SaveFile::open(SAVE_FILE_PATH)?;
        let prompts = save_file.load_prompts(&mut rng)?;

        let mut world = World::new(map, tile_pixels, power_up_clip, cursor_glyph, recorder, SCREEN_SIZE, rng)?;
        world.apply_prompts(prompts);

        info!("Application initialization completed successfully");
        Ok(Self {
            canvas,
            event_pump,
            renderer: Renderer::new(creator, sheets, box_font, title),
            world,
            sfx,
            save_file,
            frame_times: CircularBuffer::new(),
            frame: 0,
            focused: true,
            _image_context: image_context,
            _audio_subsystem: audio,
            _sdl_context: sdl_context,
        })
    }

    /// Applies one command. Returns `false` when the game should exit.
    fn handle(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Exit => {
                info!("Exit requested. Exiting...");
                return false;
            }
            GameCommand::TextInput(text) => {
                self.world.text_input(&text);
            }
            GameCommand::Backspace => {
                self.world.backspace();
            }
            GameCommand::Submit => {
                if let Edit::Submitted(text) = self.world.submit() {
                    if let Err(e) = self.save_file.append(&text) {
                        warn!(path = %self.save_file.path().display(), "Failed to save prompt: {}", e);
                    }
                }
            }
            GameCommand::Click(pos) => {
                self.world.click(pos);
            }
            GameCommand::Resize(size) => {
                debug!(?size, "Window resized");
                self.world.resize(size);
            }
            GameCommand::ToggleMute => self.sfx.toggle_mute(),
            GameCommand::ToggleColliders => self.renderer.show_colliders = !self.renderer.show_colliders,
            GameCommand::Focus(focused) => self.focused = focused,
        }
        true
    }

    /// Runs a single frame and sleeps out the rest of the frame budget.
    ///
    /// Returns `false` once the game should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_frame();

        let commands: Vec<GameCommand> = self.event_pump.poll_iter().filter_map(|e| GameCommand::from_event(&e)).collect();
        for command in commands {
            if !self.handle(command) {
                return false;
            }
        }

        let keyboard = self.event_pump.keyboard_state();
        let held = Direction::from_held(|direction| keyboard.is_scancode_pressed(scancode(direction)));

        let report = self.world.tick(FrameInput { held }, start);
        if report.pac == Step::Moved && self.world.pac.vel != IVec2::ZERO {
            self.sfx.waka();
        }

        self.world.layout(&self.renderer.box_font);
        if let Err(e) = self.renderer.draw(&mut self.canvas, &mut self.world) {
            warn!("Frame render failed: {}", e);
        }

        self.record_frame_time(start.elapsed());

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        }

        true
    }

    fn record_frame_time(&mut self, elapsed: Duration) {
        self.frame_times.push_back(elapsed);
        self.frame += 1;

        if self.frame % REPORT_PERIOD == 0 {
            let average = self.frame_times.iter().sum::<Duration>() / self.frame_times.len().max(1) as u32;
            debug!(frame = self.frame, ?average, budget = ?LOOP_TIME, "Average frame time");
        }
    }
}

fn scancode(direction: Direction) -> Scancode {
    match direction {
        Direction::Up => Scancode::Up,
        Direction::Down => Scancode::Down,
        Direction::Left => Scancode::Left,
        Direction::Right => Scancode::Right,
    }
}

/// Leaks asset bytes so fonts and surfaces can borrow them for the whole run.
fn leak_bytes(bytes: Cow<'static, [u8]>) -> &'static [u8] {
    match bytes {
        Cow::Borrowed(bytes) => bytes,
        Cow::Owned(bytes) => Box::leak(bytes.into_boxed_slice()),
    }
}

fn load_surface(asset: Asset) -> GameResult<Surface<'static>> {
    let bytes = leak_bytes(asset.get_bytes()?);
    let rwops = RWops::from_bytes(bytes).map_err(sdl_err)?;
    rwops
        .load()
        .map_err(|e| TextureError::LoadFailed(format!("{asset:?}: {e}")).into())
}

fn load_texture(
    creator: &TextureCreator<WindowContext>,
    asset: Asset,
    color_key: Option<Color>,
) -> GameResult<Texture> {
    let mut surface = load_surface(asset)?;
    if let Some(color) = color_key {
        surface.set_color_key(true, color).map_err(sdl_err)?;
    }
    let mut texture = creator
        .create_texture_from_surface(&surface)
        .map_err(|e| TextureError::LoadFailed(format!("{asset:?}: {e}")))?;
    texture.set_blend_mode(BlendMode::Blend);
    trace!(?asset, "Texture loaded");
    Ok(texture)
}

/// Loads the tile sheet as a streaming texture along with its CPU pixels.
fn load_tile_sheet(creator: &TextureCreator<WindowContext>) -> GameResult<(Texture, PixelBuffer)> {
    let surface = load_surface(Asset::TileSheet)?
        .convert_format(PixelFormatEnum::ARGB8888)
        .map_err(sdl_err)?;
    let (width, height, pitch) = (surface.width(), surface.height(), surface.pitch());

    let pixels = surface
        .without_lock()
        .and_then(|bytes| PixelBuffer::from_bytes(width as usize, height as usize, pitch as usize, bytes))
        .ok_or_else(|| TextureError::LoadFailed("tile sheet pixels unavailable".to_string()))?;

    let mut texture = creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
        .map_err(|e| TextureError::LoadFailed(e.to_string()))?;
    texture.set_blend_mode(BlendMode::Blend);
    upload_region(&mut texture, &pixels, Rect::new(0, 0, width as i32, height as i32))?;

    Ok((texture, pixels))
}

fn load_font(ttf: &'static Sdl2TtfContext, asset: Asset, size: u16) -> GameResult<sdl2::ttf::Font<'static, 'static>> {
    let bytes = leak_bytes(asset.get_bytes()?);
    let rwops = RWops::from_bytes(bytes).map_err(sdl_err)?;
    ttf.load_font_from_rwops(rwops, size)
        .map_err(|e| TextureError::LoadFailed(format!("{asset:?}: {e}")).into())
}
