use glam::IVec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};

/// What a polled SDL event asks the game to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    TextInput(String),
    Backspace,
    Submit,
    /// A mouse press at a window position.
    Click(IVec2),
    Resize(IVec2),
    ToggleMute,
    ToggleColliders,
    Focus(bool),
}

impl GameCommand {
    /// Maps an event to a command. Arrow keys are not events here; they are
    /// read from the keyboard state every frame.
    pub fn from_event(event: &Event) -> Option<GameCommand> {
        match event {
            Event::Quit { .. } => Some(GameCommand::Exit),
            Event::KeyDown {
                keycode: Some(keycode),
                keymod,
                repeat,
                ..
            } => Self::from_key(*keycode, *keymod, *repeat),
            Event::TextInput { text, .. } => Some(GameCommand::TextInput(text.clone())),
            Event::MouseButtonDown { x, y, .. } => Some(GameCommand::Click(IVec2::new(*x, *y))),
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::SizeChanged(w, h) => Some(GameCommand::Resize(IVec2::new(*w, *h))),
                WindowEvent::FocusGained => Some(GameCommand::Focus(true)),
                WindowEvent::FocusLost => Some(GameCommand::Focus(false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Maps a key press. Toggles ignore key repeat; editing keys do not.
    pub fn from_key(keycode: Keycode, keymod: Mod, repeat: bool) -> Option<GameCommand> {
        match keycode {
            Keycode::Escape => Some(GameCommand::Exit),
            Keycode::Backspace => Some(GameCommand::Backspace),
            Keycode::Return | Keycode::KpEnter => Some(GameCommand::Submit),
            Keycode::F1 if !repeat => Some(GameCommand::ToggleColliders),
            // Plain `M` is text for the prompt
            Keycode::M if !repeat && keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD) => Some(GameCommand::ToggleMute),
            _ => None,
        }
    }
}
