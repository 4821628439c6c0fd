use super::candidate::{CommittedPath, PathCandidate};
use super::frontier::PriorityFrontier;
use crate::common::{DomainError, DomainResult};
use crate::domains::grid::{Agent, Cell, GridWorld, Move};
use std::collections::HashSet;

/// Where a single-agent search currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Expanding,
    GoalFound,
    Exhausted,
    IterationLimitExceeded,
}

/// Result of a successful single-agent search.
#[derive(Debug, Clone)]
pub struct SinglePlanReport {
    pub path: CommittedPath,
    pub visited: HashSet<Cell>,
    pub iterations: u64,
}

/// Best-first search for one agent against static obstacles only. Used when
/// exactly one agent is present; the coordinator generalizes the same loop
/// to N agents.
#[derive(Debug)]
pub struct SingleAgentPlanner {
    world: GridWorld,
    agent: Agent,
    iteration_cap: u64,
    frontier: PriorityFrontier,
    visited: HashSet<Cell>,
    iterations: u64,
    state: SearchState,
}

impl SingleAgentPlanner {
    pub fn new(world: GridWorld, agent: Agent, iteration_cap: u64) -> Self {
        // Obstacles are folded into the visited set up front, so expansion
        // only ever checks bounds and prior visits.
        let mut visited = world.obstacles().clone();
        visited.insert(agent.start);
        let mut frontier = PriorityFrontier::new();
        frontier.push(PathCandidate::seed(agent.start, agent.goal));
        Self {
            world,
            agent,
            iteration_cap,
            frontier,
            visited,
            iterations: 0,
            state: SearchState::Initialized,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn visited(&self) -> &HashSet<Cell> {
        &self.visited
    }

    /// Run the search to one of its terminal states.
    pub fn plan(&mut self) -> DomainResult<SinglePlanReport> {
        loop {
            if self.iterations >= self.iteration_cap {
                self.state = SearchState::IterationLimitExceeded;
                return Err(DomainError::SearchTimeout {
                    iterations: self.iterations,
                    cap: self.iteration_cap,
                });
            }
            let candidate = match self.frontier.pop_min() {
                Ok(candidate) => candidate,
                Err(_) => {
                    // Cannot happen on a connected free region, but an
                    // enclosed goal drains the frontier here.
                    self.state = SearchState::Exhausted;
                    return Err(DomainError::EmptyFrontier);
                }
            };
            self.iterations += 1;
            self.state = SearchState::Expanding;
            if candidate.last_cell() == self.agent.goal {
                self.state = SearchState::GoalFound;
                return Ok(SinglePlanReport {
                    path: candidate.commit(),
                    visited: self.visited.clone(),
                    iterations: self.iterations,
                });
            }
            self.expand(&candidate);
        }
    }

    fn expand(&mut self, candidate: &PathCandidate) {
        let from = candidate.last_cell();
        for mv in Move::ORDER {
            let delta = mv.delta();
            let target = from.step(delta);
            if !self.world.in_bounds(target) || self.visited.contains(&target) {
                continue;
            }
            self.visited.insert(target);
            self.frontier
                .push(candidate.extend(target, delta, self.agent.goal));
        }
    }
}
