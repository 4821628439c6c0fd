use super::cell::Cell;
use super::world::GridWorld;
use crate::common::{DomainError, DomainResult, PlacementFault};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An agent record, paired with its goal. Produced by
/// [`Workspace::assignments`] once every placed agent has a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub start: Cell,
    pub goal: Cell,
}

/// What a cell on the board is taken by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Obstacle,
    AgentStart(String),
    Goal(String),
}

/// The placement board: the static world plus the agents and goals placed on
/// it before a planning run. Placement is a one-time assignment per id;
/// rejected calls leave the board untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    world: GridWorld,
    occupancy: HashMap<Cell, Occupant>,
    agent_order: Vec<String>,
    agent_starts: HashMap<String, Cell>,
    goals: HashMap<String, Cell>,
}

impl Workspace {
    pub fn new(world: GridWorld) -> Self {
        let occupancy = world
            .obstacles()
            .iter()
            .map(|c| (*c, Occupant::Obstacle))
            .collect();
        Self {
            world,
            occupancy,
            agent_order: Vec::new(),
            agent_starts: HashMap::new(),
            goals: HashMap::new(),
        }
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn occupant(&self, cell: Cell) -> Option<&Occupant> {
        self.occupancy.get(&cell)
    }

    pub fn agent_count(&self) -> usize {
        self.agent_order.len()
    }

    /// Place an agent's start cell. Rejects out-of-bounds or occupied cells
    /// and duplicate ids without mutating the board.
    pub fn create_agent(&mut self, id: &str, row: i32, col: i32) -> DomainResult<()> {
        if self.agent_starts.contains_key(id) {
            return Err(DomainError::InvalidPlacement {
                id: id.to_string(),
                fault: PlacementFault::DuplicateId,
            });
        }
        let cell = self.claimable(id, row, col)?;
        self.occupancy.insert(cell, Occupant::AgentStart(id.to_string()));
        self.agent_order.push(id.to_string());
        self.agent_starts.insert(id.to_string(), cell);
        Ok(())
    }

    /// Place the goal cell for an agent id. Same rejection rules as
    /// [`Workspace::create_agent`].
    pub fn create_goal(&mut self, id: &str, row: i32, col: i32) -> DomainResult<()> {
        if self.goals.contains_key(id) {
            return Err(DomainError::InvalidPlacement {
                id: id.to_string(),
                fault: PlacementFault::DuplicateId,
            });
        }
        let cell = self.claimable(id, row, col)?;
        self.occupancy.insert(cell, Occupant::Goal(id.to_string()));
        self.goals.insert(id.to_string(), cell);
        Ok(())
    }

    pub fn agent_start(&self, id: &str) -> Option<Cell> {
        self.agent_starts.get(id).copied()
    }

    pub fn goal_of(&self, id: &str) -> Option<Cell> {
        self.goals.get(id).copied()
    }

    /// Pair every agent with its goal, in creation order. Creation order is
    /// the order the coordinator processes agents in, so it is kept as an
    /// explicit sequence rather than read off a map.
    pub fn assignments(&self) -> DomainResult<Vec<Agent>> {
        let mut agents = Vec::with_capacity(self.agent_order.len());
        for id in &self.agent_order {
            let start = self.agent_starts[id];
            let goal = self.goals.get(id).copied().ok_or_else(|| {
                DomainError::InvalidCommand {
                    reason: format!("agent '{}' has no goal placed", id),
                }
            })?;
            agents.push(Agent {
                id: id.clone(),
                start,
                goal,
            });
        }
        Ok(agents)
    }

    fn claimable(&self, id: &str, row: i32, col: i32) -> DomainResult<Cell> {
        let cell = Cell::new(row, col);
        if !self.world.in_bounds(cell) {
            return Err(DomainError::InvalidPlacement {
                id: id.to_string(),
                fault: PlacementFault::OutOfBounds { cell },
            });
        }
        if self.occupancy.contains_key(&cell) {
            return Err(DomainError::InvalidPlacement {
                id: id.to_string(),
                fault: PlacementFault::CellOccupied { cell },
            });
        }
        Ok(cell)
    }
}
