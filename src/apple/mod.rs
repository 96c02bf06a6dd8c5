use crate::basic::GridPoint;

pub mod spawn;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Apple {
    pub pos: GridPoint,
}
