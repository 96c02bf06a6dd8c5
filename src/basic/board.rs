use itertools::Itertools;
use num_integer::Integer;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// Sorted, deduplicated list of every on-board cell that is taken
/// by the snake or the apple
pub fn get_occupied_cells(segments: &[GridPoint], apple: GridPoint, board_dim: GridDim) -> Vec<GridPoint> {
    segments
        .iter()
        .copied()
        .chain(std::iter::once(apple))
        // the legacy wrap can leave the head on a phantom row/column
        .filter(|&pos| board_dim.contains(pos))
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Uniformly pick one of the cells not in `occupied_cells`,
/// `occupied_cells` must be sorted and free of duplicates
pub fn random_free_spot(occupied_cells: &[GridPoint], board_dim: GridDim, rng: &mut impl Rng) -> Option<GridPoint> {
    let free_spaces = board_dim.area() - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    let mut new_idx = (0..free_spaces).sample_single(rng);
    for pos in occupied_cells {
        if pos.flat_index(board_dim) <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < board_dim.area());
    let (y, x) = (new_idx as isize).div_rem(&board_dim.x);
    Some(GridPoint { x, y })
}
