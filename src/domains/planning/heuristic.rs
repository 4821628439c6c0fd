use crate::domains::grid::Cell;

/// Straight-line distance between two cells. Motion is 4-connected, so this
/// systematically underestimates the true step count; the planner ranks with
/// it as-is. Inherited behavior, not a defect to correct here.
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let d_row = (a.row - b.row) as f64;
    let d_col = (a.col - b.col) as f64;
    (d_row * d_row + d_col * d_col).sqrt()
}

/// A*-style `g + h` ranking cost: one unit per cell accumulated so far plus
/// the straight-line tail estimate.
pub fn estimated_total_cost(cells_so_far: usize, last: Cell, goal: Cell) -> f64 {
    cells_so_far as f64 + euclidean(last, goal)
}
