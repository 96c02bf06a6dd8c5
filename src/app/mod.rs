use ggez::conf::{FullscreenType, NumSamples, WindowMode, WindowSetup};

pub use game::Game;
pub use palette::Palette;
pub use prefs::Prefs;

pub mod control;
mod game;
pub mod keyboard_control;
pub mod palette;
pub mod prefs;
pub mod session;

pub fn window_mode(prefs: &Prefs) -> WindowMode {
    WindowMode {
        width: prefs.window_width as f32,
        height: prefs.window_height as f32,
        maximized: false,
        fullscreen_type: FullscreenType::Windowed,
        borderless: false,
        resizable: false,
        ..WindowMode::default()
    }
}

pub fn window_setup() -> WindowSetup {
    WindowSetup {
        title: "Snake Game".to_string(),
        samples: NumSamples::One,
        vsync: true,
        icon: "".to_string(),
        srgb: true,
    }
}
