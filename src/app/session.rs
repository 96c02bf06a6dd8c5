use rand::Rng;

use crate::app::control::{Control, State};
use crate::app::keyboard_control::{Input, InputQueue};
use crate::app::prefs::Prefs;
use crate::apple::{spawn::spawn_apple, Apple};
use crate::basic::{Dir, GridDim, GridPoint, Wrap};
use crate::snake::Snake;

/// Everything that makes up one game, independent of any window
pub struct Session<R: Rng> {
    board_dim: GridDim,
    wrap: Wrap,

    start_head: GridPoint,
    start_apple: GridPoint,
    start_dir: Dir,
    start_move_period: f32,
    move_period_step: f32,
    min_move_period: f32,

    pub snake: Snake,
    pub apple: Apple,
    /// Current velocity
    pub dir: Dir,
    /// Direction of the last step actually taken, steering is
    /// checked against it so the head can't fold back into the neck
    /// when two turns are pressed within one step
    last_step_dir: Dir,

    pub control: Control,
    quit: bool,

    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(prefs: &Prefs, rng: R) -> Self {
        let board_dim = prefs.board_dim();
        Self {
            board_dim,
            wrap: prefs.wrap,

            start_head: prefs.start_head,
            start_apple: prefs.start_apple,
            start_dir: prefs.start_dir,
            start_move_period: prefs.move_period,
            move_period_step: prefs.move_period_step,
            min_move_period: prefs.min_move_period,

            snake: Snake::new(board_dim, prefs.start_head),
            apple: Apple { pos: prefs.start_apple },
            dir: prefs.start_dir,
            last_step_dir: prefs.start_dir,

            control: Control::new(prefs.move_period, prefs.move_period_step, prefs.min_move_period),
            quit: false,

            rng,
        }
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new(self.board_dim, self.start_head);
        self.apple = Apple { pos: self.start_apple };
        self.dir = self.start_dir;
        self.last_step_dir = self.start_dir;
        self.control = Control::new(self.start_move_period, self.move_period_step, self.min_move_period);
    }

    pub fn board_dim(&self) -> GridDim {
        self.board_dim
    }

    /// Live segment count
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn apply_input(&mut self, input: Input) {
        match input {
            Input::Steer(dir) => {
                // deny 180deg turns
                if dir != -self.dir && dir != -self.last_step_dir {
                    self.dir = dir;
                }
            }
            Input::Restart => {
                if self.state() != State::Playing {
                    log::info!("restarting");
                    self.restart();
                }
            }
            Input::Quit => {
                log::info!("quit requested");
                self.quit = true;
            }
        }
    }

    /// Apply everything queued since the last frame, then advance
    /// the game by `dt` seconds
    pub fn update(&mut self, inputs: &mut InputQueue, dt: f32) {
        for input in inputs.drain() {
            self.apply_input(input);
        }

        if self.control.can_update(dt) {
            self.step();
        }
    }

    /// Move the snake by one cell and resolve what it ran into
    pub fn step(&mut self) {
        self.snake.advance(self.dir, self.board_dim, self.wrap);
        self.last_step_dir = self.dir;

        if self.snake.crashed_into_self() {
            log::info!("game over at {:?}, score: {}", self.snake.head(), self.score());
            self.control.game_over();
            return;
        }

        if self.snake.head() == self.apple.pos {
            self.eat_apple();
        }
    }

    fn eat_apple(&mut self) {
        let new_apple = spawn_apple(self.snake.segments(), self.apple, self.board_dim, &mut self.rng);
        self.snake.grow();
        self.control.speed_up();
        log::debug!(
            "ate apple at {:?}, score: {}, move period: {:.2}s",
            self.apple.pos,
            self.score(),
            self.control.move_period(),
        );

        match new_apple {
            Some(apple) => self.apple = apple,
            None => {
                log::warn!("no free cell left for an apple, score: {}", self.score());
                self.control.won();
            }
        }
    }
}
