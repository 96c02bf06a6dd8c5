use crate::apple::Apple;
use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{GridDim, GridPoint};
use rand::Rng;

/// Random guesses before falling back to enumerating the free cells
const MAX_RANDOM_ATTEMPTS: usize = 32;

/// Find a place for the next apple that is neither under the snake nor
/// where the current apple is. `None` means the board is full.
pub fn spawn_apple(
    segments: &[GridPoint],
    current: Apple,
    board_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<Apple> {
    let taken = |pos: GridPoint| pos == current.pos || segments.contains(&pos);

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let pos = GridPoint::random_in(board_dim, rng);
        if !taken(pos) {
            return Some(Apple { pos });
        }
    }

    let occupied_cells = get_occupied_cells(segments, current.pos, board_dim);
    random_free_spot(&occupied_cells, board_dim, rng).map(|pos| Apple { pos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_avoids_snake_and_current_apple() {
        let dim = GridDim { x: 5, y: 5 };
        let segments: Vec<_> = (0..5)
            .flat_map(|x| [GridPoint { x, y: 0 }, GridPoint { x, y: 1 }])
            .collect();
        let current = Apple { pos: GridPoint { x: 2, y: 2 } };

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let apple = spawn_apple(&segments, current, dim, &mut rng).unwrap();
            assert!(dim.contains(apple.pos));
            assert_ne!(apple.pos, current.pos);
            assert!(!segments.contains(&apple.pos), "{:?}", apple.pos);
        }
    }

    #[test]
    fn test_spawn_finds_single_free_cell() {
        // too crowded for guessing to be reliable, the fallback has to find it
        let dim = GridDim { x: 20, y: 20 };
        let free = GridPoint { x: 13, y: 17 };
        let current = Apple { pos: GridPoint { x: 0, y: 0 } };
        let segments: Vec<_> = (0..20)
            .flat_map(|y| (0..20).map(move |x| GridPoint { x, y }))
            .filter(|&pos| pos != free && pos != current.pos)
            .collect();

        let mut rng = StdRng::seed_from_u64(3);
        let apple = spawn_apple(&segments, current, dim, &mut rng);
        assert_eq!(apple, Some(Apple { pos: free }));
    }

    #[test]
    fn test_spawn_on_full_board() {
        let dim = GridDim { x: 3, y: 1 };
        let segments = [GridPoint { x: 1, y: 0 }, GridPoint { x: 2, y: 0 }];
        let current = Apple { pos: GridPoint { x: 0, y: 0 } };

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(spawn_apple(&segments, current, dim, &mut rng), None);
    }
}
