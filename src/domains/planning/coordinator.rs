use super::candidate::{CommittedPath, PathCandidate};
use super::frontier::PriorityFrontier;
use super::outcome::PlanningOutcome;
use crate::common::{DomainError, DomainResult};
use crate::domains::grid::{Agent, Cell, GridWorld, Move};
use crate::domains::logger::DynLogger;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgentFlag {
    Active,
    Finished,
}

/// Search state owned by one agent across rounds. Frontiers and visited
/// sets are never shared between agents; only the round-scoped reservation
/// set mediates between them.
#[derive(Debug)]
struct AgentTask {
    agent: Agent,
    frontier: PriorityFrontier,
    visited: HashSet<Cell>,
    flag: AgentFlag,
    last_popped: Option<PathCandidate>,
    committed: Option<CommittedPath>,
    iterations: u64,
}

impl AgentTask {
    fn seed(world: &GridWorld, agent: Agent) -> Self {
        let mut visited = world.obstacles().clone();
        visited.insert(agent.start);
        let mut frontier = PriorityFrontier::new();
        frontier.push(PathCandidate::seed(agent.start, agent.goal));
        Self {
            agent,
            frontier,
            visited,
            flag: AgentFlag::Active,
            last_popped: None,
            committed: None,
            iterations: 0,
        }
    }

    fn is_active(&self) -> bool {
        self.flag == AgentFlag::Active
    }
}

/// Cells claimed during the current expansion round, keyed by agent id.
/// Rebuilt empty at the start of every round and dropped at its end; letting
/// claims leak across rounds would freeze cells for the rest of the run.
#[derive(Debug, Default)]
struct RoundReservations {
    claims: HashMap<String, HashSet<Cell>>,
}

impl RoundReservations {
    fn claimed_by_other(&self, agent_id: &str, cell: Cell) -> bool {
        self.claims
            .iter()
            .any(|(id, cells)| id != agent_id && cells.contains(&cell))
    }

    fn claim(&mut self, agent_id: &str, cell: Cell) {
        self.claims
            .entry(agent_id.to_string())
            .or_default()
            .insert(cell);
    }
}

/// Synchronized multi-agent search: every agent runs the same best-first
/// loop, but rounds are processed in lockstep and a per-round reservation
/// set keeps two agents from claiming the same cell at the same step.
///
/// Agents are processed in creation order, which is the documented policy
/// for who wins a contested cell. The scheme is greedy per round: committed
/// paths are collision-free per round index, but not jointly optimal, and
/// two agents swapping cells in one round goes undetected.
pub struct MultiAgentCoordinator {
    world: GridWorld,
    tasks: Vec<AgentTask>,
    iteration_cap: u64,
    logger: DynLogger,
}

impl MultiAgentCoordinator {
    pub fn new(
        world: GridWorld,
        assignments: Vec<Agent>,
        iteration_cap: u64,
        logger: DynLogger,
    ) -> Self {
        let tasks = assignments
            .into_iter()
            .map(|agent| AgentTask::seed(&world, agent))
            .collect();
        Self {
            world,
            tasks,
            iteration_cap,
            logger,
        }
    }

    /// Drive rounds until every agent is finished or the shared iteration
    /// cap aborts the run. A cap abort fails the whole run; per-agent
    /// exhaustion only finishes that agent.
    pub fn run(&mut self) -> DomainResult<PlanningOutcome> {
        loop {
            if let Some(task) = self
                .tasks
                .iter()
                .find(|t| t.iterations >= self.iteration_cap)
            {
                self.logger.error(&format!(
                    "aborting run: agent '{}' reached the iteration cap of {}",
                    task.agent.id, self.iteration_cap
                ));
                return Err(DomainError::SearchTimeout {
                    iterations: task.iterations,
                    cap: self.iteration_cap,
                });
            }

            self.pop_phase();

            if self.tasks.iter().all(|t| !t.is_active()) {
                return Ok(self.collect_outcome());
            }

            self.expansion_phase();
        }
    }

    /// Pop the cheapest candidate for every active agent, committing any
    /// that reached its goal. An agent whose frontier drained finishes with
    /// no path; the others are unaffected.
    fn pop_phase(&mut self) {
        for task in self.tasks.iter_mut() {
            if !task.is_active() {
                continue;
            }
            if task.frontier.is_empty() {
                task.flag = AgentFlag::Finished;
                task.last_popped = None;
                self.logger.warn(&format!(
                    "agent '{}' exhausted its frontier with no path to goal",
                    task.agent.id
                ));
                continue;
            }
            let candidate = match task.frontier.pop_min() {
                Ok(candidate) => candidate,
                Err(_) => continue,
            };
            task.iterations += 1;
            if candidate.last_cell() == task.agent.goal {
                task.committed = Some(candidate.commit());
                task.flag = AgentFlag::Finished;
                task.last_popped = None;
                self.logger.info(&format!(
                    "goal reached for agent '{}' after {} iterations",
                    task.agent.id, task.iterations
                ));
            } else {
                task.last_popped = Some(candidate);
            }
        }
    }

    /// Extend every active agent's last-popped candidate by each of the four
    /// moves, subject to bounds, that agent's own visited set, and cells
    /// already reserved by another agent this round.
    fn expansion_phase(&mut self) {
        let mut reservations = RoundReservations::default();
        for idx in 0..self.tasks.len() {
            if !self.tasks[idx].is_active() {
                continue;
            }
            let candidate = match self.tasks[idx].last_popped.take() {
                Some(candidate) => candidate,
                None => continue,
            };
            let from = candidate.last_cell();
            for mv in Move::ORDER {
                let delta = mv.delta();
                let target = from.step(delta);
                if !self.world.in_bounds(target) {
                    continue;
                }
                let task = &mut self.tasks[idx];
                if task.visited.contains(&target) {
                    continue;
                }
                if reservations.claimed_by_other(&task.agent.id, target) {
                    continue;
                }
                reservations.claim(&task.agent.id, target);
                task.visited.insert(target);
                task.frontier
                    .push(candidate.extend(target, delta, task.agent.goal));
            }
        }
    }

    fn collect_outcome(&self) -> PlanningOutcome {
        let mut outcome = PlanningOutcome::new();
        for task in &self.tasks {
            outcome
                .visited_sets
                .insert(task.agent.id.clone(), task.visited.clone());
            if let Some(path) = &task.committed {
                outcome
                    .committed_paths
                    .insert(task.agent.id.clone(), path.cells.clone());
                outcome
                    .action_plans
                    .insert(task.agent.id.clone(), path.actions.clone());
            }
        }
        outcome
    }
}
