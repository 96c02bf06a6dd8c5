use super::dir::Dir;
use crate::basic::Point;
use rand::Rng;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

/// A cell on the board, x is the column and y the row
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Board dimensions, x columns by y rows
pub type GridDim = GridPoint;

/// How a point that stepped off the board is brought back
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Wrap {
    /// Anything outside `0..dim` reappears on the opposite edge
    Toroidal,
    /// Only values strictly greater than `dim` are wrapped on the
    /// high edges, a coordinate equal to `dim` survives for one step
    Legacy,
}

impl GridPoint {
    /// Top-left corner of the cell in pixels
    pub fn to_point(self, cell_size: f32) -> Point {
        Point {
            x: self.x as f32 * cell_size,
            y: self.y as f32 * cell_size,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        self + dir.delta()
    }

    /// Each axis is handled independently
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim, wrap: Wrap) -> Self {
        fn wrap_axis(value: isize, dim: isize, wrap: Wrap) -> isize {
            let past_high_edge = match wrap {
                Wrap::Toroidal => value >= dim,
                Wrap::Legacy => value > dim,
            };
            if value < 0 {
                dim - 1
            } else if past_high_edge {
                0
            } else {
                value
            }
        }

        Self {
            x: wrap_axis(self.x, board_dim.x, wrap),
            y: wrap_axis(self.y, board_dim.y, wrap),
        }
    }

    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, board_dim: GridDim, wrap: Wrap) -> Self {
        self.translate(dir).wrap_around(board_dim, wrap)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    /// Number of cells on a board of these dimensions
    pub fn area(self) -> usize {
        (self.x.max(0) * self.y.max(0)) as usize
    }

    /// Row-major position of the cell on a board of `board_dim`
    pub fn flat_index(self, board_dim: GridDim) -> usize {
        (self.y * board_dim.x + self.x) as usize
    }

    pub fn random_in(board_dim: GridDim, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..board_dim.x),
            y: rng.gen_range(0..board_dim.y),
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major, matches `flat_index`
impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: GridDim = GridDim { x: 60, y: 40 };

    #[test]
    fn test_wrap_low_edges() {
        for wrap in [Wrap::Toroidal, Wrap::Legacy] {
            let left = GridPoint { x: 0, y: 5 }.wrapping_translate(Dir::L, DIM, wrap);
            assert_eq!(left, GridPoint { x: 59, y: 5 });

            let up = GridPoint { x: 7, y: 0 }.wrapping_translate(Dir::U, DIM, wrap);
            assert_eq!(up, GridPoint { x: 7, y: 39 });
        }
    }

    #[test]
    fn test_wrap_high_edges_toroidal() {
        let right = GridPoint { x: 59, y: 0 }.wrapping_translate(Dir::R, DIM, Wrap::Toroidal);
        assert_eq!(right, GridPoint { x: 0, y: 0 });

        let down = GridPoint { x: 3, y: 39 }.wrapping_translate(Dir::D, DIM, Wrap::Toroidal);
        assert_eq!(down, GridPoint { x: 3, y: 0 });
    }

    #[test]
    fn test_wrap_high_edges_legacy() {
        // one step onto the phantom column, the next one wraps
        let phantom = GridPoint { x: 59, y: 0 }.wrapping_translate(Dir::R, DIM, Wrap::Legacy);
        assert_eq!(phantom, GridPoint { x: 60, y: 0 });
        assert!(!DIM.contains(phantom));

        let wrapped = phantom.wrapping_translate(Dir::R, DIM, Wrap::Legacy);
        assert_eq!(wrapped, GridPoint { x: 0, y: 0 });

        let phantom_row = GridPoint { x: 3, y: 39 }.wrapping_translate(Dir::D, DIM, Wrap::Legacy);
        assert_eq!(phantom_row, GridPoint { x: 3, y: 40 });
    }

    #[test]
    fn test_ordering_matches_flat_index() {
        let mut points = vec![
            GridPoint { x: 5, y: 1 },
            GridPoint { x: 59, y: 0 },
            GridPoint { x: 0, y: 1 },
            GridPoint { x: 0, y: 0 },
        ];
        points.sort();
        let indices: Vec<_> = points.iter().map(|p| p.flat_index(DIM)).collect();
        assert_eq!(indices, vec![0, 59, 60, 65]);
    }

    #[test]
    fn test_area() {
        assert_eq!(DIM.area(), 2400);
        assert_eq!(GridDim { x: 0, y: 10 }.area(), 0);
    }
}
