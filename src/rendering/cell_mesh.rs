use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;
use rand::Rng;

use crate::app::control::State;
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::session::Session;
use crate::basic::{GridPoint, Point};
use crate::error::{Error, ErrorConversion, Result};

/// The square filling a cell, inset by the grid line on the top and
/// left so neighbouring cells stay visibly apart
pub fn cell_rect(pos: GridPoint, prefs: &Prefs) -> Rect {
    let cell_size = prefs.cell_size as f32;
    let grid = prefs.grid_thickness as f32;
    let Point { x, y } = pos.to_point(cell_size) + Point::square(grid);
    Rect::new(x, y, cell_size - grid, cell_size - grid)
}

/// Every cell that needs filling along with its color, snake first
pub fn cell_colors<R: Rng>(session: &Session<R>, palette: &Palette) -> Vec<(GridPoint, Color)> {
    let segments = session.snake.segments();
    let mut cells = Vec::with_capacity(segments.len() + 1);
    cells.extend(segments.iter().map(|&pos| (pos, palette.snake_color)));
    if session.state() == State::GameOver {
        cells[0].1 = palette.crashed_color;
    }
    cells.push((session.apple.pos, palette.apple_color));
    cells
}

/// Snake and apple, rebuilt every frame
pub fn cell_mesh<R: Rng>(session: &Session<R>, prefs: &Prefs, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    for (pos, color) in cell_colors(session, palette) {
        builder
            .rectangle(DrawMode::fill(), cell_rect(pos, prefs), color)
            .map_err(Error::from)
            .with_trace_step("cell_mesh")?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}
