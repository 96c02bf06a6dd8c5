#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate static_assertions;

use ggez::event::run;
use ggez::ContextBuilder;

use crate::app::{Game, Palette, Prefs};
use crate::error::{ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod error;
mod rendering;
mod snake;

fn main() -> Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let prefs = Prefs::default();
    prefs.validate().with_trace_step("main")?;

    let board_dim = prefs.board_dim();
    log::info!(
        "starting on a {}x{} board ({}x{}px)",
        board_dim.x,
        board_dim.y,
        prefs.window_width,
        prefs.window_height,
    );

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(app::window_mode(&prefs))
        .window_setup(app::window_setup())
        .build()
        .map_err(error::Error::from)
        .with_trace_step("main")?;

    let game = Game::new(prefs, Palette::default());
    run(ctx, event_loop, game)
}
