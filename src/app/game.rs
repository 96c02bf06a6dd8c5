use ggez::{
    event::EventHandler,
    graphics::{Canvas, DrawParam, Mesh},
    input::keyboard::KeyInput,
    Context, GameError, GameResult,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::app::keyboard_control::{Controls, Input, InputQueue};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::session::Session;
use crate::error::ErrorConversion;
use crate::rendering;

pub struct Game {
    session: Session<ThreadRng>,
    inputs: InputQueue,
    controls: Controls,

    prefs: Prefs,
    palette: Palette,

    /// The grid never changes, built on the first frame and reused
    grid_mesh: Option<Mesh>,
}

impl Game {
    pub fn new(prefs: Prefs, palette: Palette) -> Self {
        Self {
            session: Session::new(&prefs, thread_rng()),
            inputs: InputQueue::default(),
            controls: Controls::default(),

            prefs,
            palette,

            grid_mesh: None,
        }
    }
}

impl EventHandler<GameError> for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f32();
        self.session.update(&mut self.inputs, dt);

        if self.session.quit_requested() {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        if self.grid_mesh.is_none() {
            let mesh = rendering::grid_mesh(&self.prefs, &self.palette, ctx)
                .with_trace_step("Game::draw")?;
            self.grid_mesh = Some(mesh);
        }
        if let Some(grid_mesh) = &self.grid_mesh {
            canvas.draw(grid_mesh, DrawParam::default());
        }

        let cell_mesh = rendering::cell_mesh(&self.session, &self.prefs, &self.palette, ctx)
            .with_trace_step("Game::draw")?;
        canvas.draw(&cell_mesh, DrawParam::default());

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if let Some(input) = input.keycode.and_then(|key| self.controls.input_for(key)) {
            self.inputs.push(input);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        if !self.session.quit_requested() {
            self.session.apply_input(Input::Quit);
        }
        log::info!("closing, final score: {}", self.session.score());
        // let the window close
        Ok(false)
    }
}
