use super::heuristic::estimated_total_cost;
use crate::domains::grid::{Cell, MoveDelta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partial path under consideration by a frontier.
///
/// While a candidate is in flight, `actions` carries a leading
/// [`MoveDelta::HOLD`] recorded at seeding, so `actions.len() ==
/// cells.len()`. The hold is dropped at commitment, restoring the external
/// one-action-per-transition alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathCandidate {
    pub cells: Vec<Cell>,
    pub actions: Vec<MoveDelta>,
    pub cost: f64,
}

impl PathCandidate {
    /// The initial candidate for an agent: just the start cell, a no-op
    /// action, and cost `1 + h(start, goal)`.
    pub fn seed(start: Cell, goal: Cell) -> Self {
        Self {
            cells: vec![start],
            actions: vec![MoveDelta::HOLD],
            cost: estimated_total_cost(1, start, goal),
        }
    }

    pub fn last_cell(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// A new candidate extended by one accepted move.
    pub fn extend(&self, target: Cell, delta: MoveDelta, goal: Cell) -> Self {
        let mut cells = self.cells.clone();
        cells.push(target);
        let mut actions = self.actions.clone();
        actions.push(delta);
        let cost = estimated_total_cost(cells.len(), target, goal);
        Self {
            cells,
            actions,
            cost,
        }
    }

    /// Freeze this candidate into a committed path. The seeded hold is
    /// dropped and the final action is recomputed as the displacement from
    /// the second-to-last cell onto the goal.
    pub fn commit(&self) -> CommittedPath {
        let mut actions: Vec<MoveDelta> = self.actions[1..].to_vec();
        if let Some(last) = actions.last_mut() {
            let n = self.cells.len();
            *last = self.cells[n - 2].displacement_to(self.cells[n - 1]);
        }
        CommittedPath {
            cells: self.cells.clone(),
            actions,
            computed_at: Utc::now(),
        }
    }
}

/// The final, immutable path for one agent. Invariant:
/// `actions.len() == cells.len() - 1`, and applying `actions[i]` to
/// `cells[i]` yields `cells[i + 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommittedPath {
    pub cells: Vec<Cell>,
    pub actions: Vec<MoveDelta>,
    pub computed_at: DateTime<Utc>,
}
