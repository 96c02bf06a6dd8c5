use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::error::{Error, ErrorConversion, Result};

/// One thin rectangle per cell boundary: vertical lines spanning the
/// full window height, then horizontal lines spanning the full width
pub fn grid_line_rects(prefs: &Prefs) -> Vec<Rect> {
    let Prefs {
        window_width: width,
        window_height: height,
        cell_size,
        grid_thickness,
        ..
    } = *prefs;
    let step = cell_size.max(1) as usize;
    let thickness = grid_thickness as f32;

    let columns = (0..width)
        .step_by(step)
        .map(|x| Rect::new(x as f32, 0., thickness, height as f32));
    let rows = (0..height)
        .step_by(step)
        .map(|y| Rect::new(0., y as f32, width as f32, thickness));
    columns.chain(rows).collect()
}

pub fn grid_mesh(prefs: &Prefs, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    for rect in grid_line_rects(prefs) {
        builder
            .rectangle(DrawMode::fill(), rect, palette.grid_color)
            .map_err(Error::from)
            .with_trace_step("grid_mesh")?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}
