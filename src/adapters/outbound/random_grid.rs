use crate::common::{DomainError, DomainResult};
use crate::domains::grid::{Cell, GridWorld, Workspace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// How many random cells to try per placement before giving up. Only
/// plausible on a board that is almost entirely occupied.
const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Random obstacle and agent placement for demo and test scenarios. The
/// planner core never depends on this; it is a bootstrapping collaborator.
pub struct RandomScenarioSource {
    rng: StdRng,
}

impl RandomScenarioSource {
    /// Seeded sources produce reproducible scenarios; `None` draws from
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Scatter up to `count` obstacles uniformly over the grid. Draws may
    /// collide, so `count` is an upper bound on the distinct obstacles.
    pub fn scatter_obstacles(&mut self, height: i32, width: i32, count: usize) -> HashSet<Cell> {
        let mut obstacles = HashSet::new();
        for _ in 0..count {
            let row = self.rng.gen_range(0..height);
            let col = self.rng.gen_range(0..width);
            obstacles.insert(Cell::new(row, col));
        }
        obstacles
    }

    /// Build a world with random obstacles.
    pub fn world(&mut self, height: i32, width: i32, obstacles: usize) -> DomainResult<GridWorld> {
        let obstacles = self.scatter_obstacles(height, width, obstacles);
        GridWorld::new(height, width, obstacles)
    }

    /// Place `agents` agent/goal pairs on free cells, ids `agent_1..agent_n`.
    pub fn populate(&mut self, workspace: &mut Workspace, agents: usize) -> DomainResult<()> {
        let height = workspace.world().height();
        let width = workspace.world().width();
        for i in 0..agents {
            let id = format!("agent_{}", i + 1);
            self.place(workspace, &id, height, width, Placement::Agent)?;
            self.place(workspace, &id, height, width, Placement::Goal)?;
        }
        Ok(())
    }

    fn place(
        &mut self,
        workspace: &mut Workspace,
        id: &str,
        height: i32,
        width: i32,
        kind: Placement,
    ) -> DomainResult<()> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = self.rng.gen_range(0..height);
            let col = self.rng.gen_range(0..width);
            let result = match kind {
                Placement::Agent => workspace.create_agent(id, row, col),
                Placement::Goal => workspace.create_goal(id, row, col),
            };
            match result {
                Ok(()) => return Ok(()),
                // Occupied cell: draw again.
                Err(DomainError::InvalidPlacement { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
        Err(DomainError::InvalidCommand {
            reason: format!("no free cell found for '{}' after {} attempts", id, MAX_PLACEMENT_ATTEMPTS),
        })
    }
}

#[derive(Clone, Copy)]
enum Placement {
    Agent,
    Goal,
}
