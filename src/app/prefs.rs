use crate::basic::{Dir, GridDim, GridPoint, Wrap};
use crate::error::{Error, Result};

const WINDOW_WIDTH: u32 = 901;
const WINDOW_HEIGHT: u32 = 601;
const CELL_SIZE: u32 = 15;
const GRID_THICKNESS: u32 = 1;
const START_HEAD: GridPoint = GridPoint { x: 3, y: 3 };
const START_APPLE: GridPoint = GridPoint { x: 0, y: 0 };

const_assert!(GRID_THICKNESS < CELL_SIZE);
const_assert!((START_HEAD.x as u32) < WINDOW_WIDTH / CELL_SIZE);
const_assert!((START_HEAD.y as u32) < WINDOW_HEIGHT / CELL_SIZE);
const_assert!(START_HEAD.x != START_APPLE.x || START_HEAD.y != START_APPLE.y);

pub struct Prefs {
    /// Window size in pixels, the board covers as many
    /// whole cells as fit
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub grid_thickness: u32,

    pub start_head: GridPoint,
    pub start_apple: GridPoint,
    pub start_dir: Dir,

    /// Seconds per step at the start of a game
    pub move_period: f32,
    /// Taken off the period for every apple eaten
    pub move_period_step: f32,
    pub min_move_period: f32,

    pub wrap: Wrap,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            grid_thickness: GRID_THICKNESS,

            start_head: START_HEAD,
            start_apple: START_APPLE,
            start_dir: Dir::R,

            move_period: 0.24,
            move_period_step: 0.01,
            min_move_period: 0.08,

            wrap: Wrap::Toroidal,
        }
    }
}

// builder
impl Prefs {
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn start(mut self, head: GridPoint, apple: GridPoint, dir: Dir) -> Self {
        self.start_head = head;
        self.start_apple = apple;
        self.start_dir = dir;
        self
    }

    /// Let a coordinate equal to the board size survive for one step
    /// before wrapping, as the first version of the game did
    pub fn legacy_wrap(mut self, legacy: bool) -> Self {
        self.wrap = if legacy { Wrap::Legacy } else { Wrap::Toroidal };
        self
    }
}

impl Prefs {
    pub fn board_dim(&self) -> GridDim {
        if self.cell_size == 0 {
            return GridDim { x: 0, y: 0 };
        }
        GridDim {
            x: (self.window_width / self.cell_size) as isize,
            y: (self.window_height / self.cell_size) as isize,
        }
    }

    pub fn validate(&self) -> Result {
        if self.cell_size == 0 {
            return Err(Error::invalid_prefs("cell size is 0"));
        }
        if self.grid_thickness >= self.cell_size {
            return Err(Error::invalid_prefs(format!(
                "grid lines ({}px) leave no room inside {}px cells",
                self.grid_thickness, self.cell_size,
            )));
        }

        let board_dim = self.board_dim();
        if board_dim.area() < 2 {
            return Err(Error::invalid_prefs(format!(
                "a {}x{} window holds {:?} cells, need room for a snake and an apple",
                self.window_width, self.window_height, board_dim,
            )));
        }
        for (what, pos) in [("snake", self.start_head), ("apple", self.start_apple)] {
            if !board_dim.contains(pos) {
                return Err(Error::invalid_prefs(format!(
                    "{} starts at {:?}, outside of the {:?} board",
                    what, pos, board_dim,
                )));
            }
        }
        if self.start_head == self.start_apple {
            return Err(Error::invalid_prefs("snake and apple start on the same cell"));
        }

        let periods = [self.move_period, self.move_period_step, self.min_move_period];
        if periods.iter().any(|p| !p.is_finite() || *p < 0.) || self.min_move_period <= 0. {
            return Err(Error::invalid_prefs(format!(
                "bad move period settings: start {}s, step {}s, min {}s",
                self.move_period, self.move_period_step, self.min_move_period,
            )));
        }

        Ok(())
    }
}
