pub use cell_mesh::cell_mesh;
pub use grid_mesh::grid_mesh;

mod cell_mesh;
mod grid_mesh;
