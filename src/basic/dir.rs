use std::ops::Neg;

use crate::basic::GridPoint;
use Dir::*;

/// Direction of travel on the grid, one axis at a time
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in grid coordinates, y grows downwards
    pub fn delta(self) -> GridPoint {
        match self {
            U => GridPoint { x: 0, y: -1 },
            D => GridPoint { x: 0, y: 1 },
            L => GridPoint { x: -1, y: 0 },
            R => GridPoint { x: 1, y: 0 },
        }
    }
}

#[test]
fn test_dir_neg() {
    for dir in Dir::iter() {
        assert_ne!(-dir, dir);
        assert_eq!(-(-dir), dir);
        assert_eq!(dir.delta() + (-dir).delta(), GridPoint { x: 0, y: 0 });
    }
}

#[test]
fn test_delta_is_never_diagonal() {
    for dir in Dir::iter() {
        let GridPoint { x, y } = dir.delta();
        assert_eq!(x.abs() + y.abs(), 1, "{:?}", dir);
    }
}
