use serde::{Deserialize, Serialize};

/// A discrete grid coordinate, addressed as (row, column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell reached by applying `delta` to this cell.
    pub fn step(&self, delta: MoveDelta) -> Cell {
        Cell::new(self.row + delta.d_row, self.col + delta.d_col)
    }

    /// The delta that carries this cell onto `other`.
    pub fn displacement_to(&self, other: Cell) -> MoveDelta {
        MoveDelta {
            d_row: other.row - self.row,
            d_col: other.col - self.col,
        }
    }
}

/// A single-step displacement in (row, column) space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MoveDelta {
    pub d_row: i32,
    pub d_col: i32,
}

impl MoveDelta {
    /// The no-op delta recorded when a candidate is seeded.
    pub const HOLD: MoveDelta = MoveDelta { d_row: 0, d_col: 0 };
}

/// The four axis-aligned moves an agent can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Right,
    Left,
}

impl Move {
    /// Fixed order in which expansion attempts the moves. The order is part
    /// of the planner's observable behavior (it decides tie-breaks and which
    /// agent wins a contested cell), so it must not change casually.
    pub const ORDER: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    pub fn delta(self) -> MoveDelta {
        match self {
            Move::Up => MoveDelta { d_row: -1, d_col: 0 },
            Move::Down => MoveDelta { d_row: 1, d_col: 0 },
            Move::Right => MoveDelta { d_row: 0, d_col: 1 },
            Move::Left => MoveDelta { d_row: 0, d_col: -1 },
        }
    }
}
