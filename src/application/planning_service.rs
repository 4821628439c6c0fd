use crate::common::{ApplicationResult, DomainError};
use crate::domains::grid::Workspace;
use crate::domains::logger::DynLogger;
use crate::domains::planning::{MultiAgentCoordinator, PlanningOutcome, SingleAgentPlanner};

/// Application-level entry point for planning runs. Picks the single-agent
/// planner when exactly one agent is placed and the synchronized coordinator
/// otherwise, and normalizes both into a [`PlanningOutcome`].
pub struct PlanningService {
    logger: DynLogger,
}

impl PlanningService {
    pub fn new(logger: DynLogger) -> Self {
        Self { logger }
    }

    pub fn plan_workspace(
        &self,
        workspace: &Workspace,
        iteration_cap: u64,
    ) -> ApplicationResult<PlanningOutcome> {
        let mut assignments = workspace.assignments()?;
        if assignments.is_empty() {
            return Err(DomainError::InvalidCommand {
                reason: "no agents have been placed".to_string(),
            }
            .into());
        }

        if assignments.len() == 1 {
            let agent = assignments.remove(0);
            let agent_id = agent.id.clone();
            let mut planner =
                SingleAgentPlanner::new(workspace.world().clone(), agent, iteration_cap);
            match planner.plan() {
                Ok(report) => {
                    self.logger.info(&format!(
                        "plan committed for agent '{}' ({} cells, {} iterations)",
                        agent_id,
                        report.path.cells.len(),
                        report.iterations
                    ));
                    let mut outcome = PlanningOutcome::new();
                    outcome
                        .committed_paths
                        .insert(agent_id.clone(), report.path.cells);
                    outcome
                        .action_plans
                        .insert(agent_id.clone(), report.path.actions);
                    outcome.visited_sets.insert(agent_id, report.visited);
                    Ok(outcome)
                }
                Err(DomainError::EmptyFrontier) => {
                    // Unreachable goal: same shape the coordinator produces
                    // for an exhausted agent, a diagnostic visited set only.
                    self.logger.warn(&format!(
                        "agent '{}' has no path to its goal",
                        agent_id
                    ));
                    let mut outcome = PlanningOutcome::new();
                    outcome
                        .visited_sets
                        .insert(agent_id, planner.visited().clone());
                    Ok(outcome)
                }
                Err(other) => Err(other.into()),
            }
        } else {
            let mut coordinator = MultiAgentCoordinator::new(
                workspace.world().clone(),
                assignments,
                iteration_cap,
                self.logger.clone(),
            );
            coordinator.run().map_err(Into::into)
        }
    }
}
