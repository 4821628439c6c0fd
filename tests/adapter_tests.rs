use gridlock::adapters::outbound::{init_console_logger, init_noop_logger, RandomScenarioSource};
use gridlock::application::PlanningService;
use gridlock::common::{ApplicationError, DomainError};
use gridlock::domains::grid::{Cell, GridWorld, Workspace};
use gridlock::domains::logger::{DomainLogger, DynLogger};
use gridlock::domains::planning::DEFAULT_ITERATION_CAP;
use gridlock::Config;
use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Captures log lines for assertions, standing in for a real adapter.
struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(Vec::new()),
        })
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DomainLogger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("INFO {}", msg));
    }
    fn warn(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("WARN {}", msg));
    }
    fn error(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("ERROR {}", msg));
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_mirrors_reference_constants() {
        let config = Config::default();
        assert_eq!(config.grid.rows, 100);
        assert_eq!(config.grid.columns, 100);
        assert_eq!(config.grid.obstacles, 50);
        assert_eq!(config.planning.agents, 5);
        assert_eq!(config.planning.iteration_cap, DEFAULT_ITERATION_CAP);
        assert!(config.planning.seed.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_config_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[grid]\nrows = 30\ncolumns = 40\nobstacles = 12\n\n\
             [planning]\nagents = 2\niteration_cap = 5000\nseed = 7\n\n\
             [logging]\nfile = \"planner.log\"\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.grid.rows, 30);
        assert_eq!(config.grid.columns, 40);
        assert_eq!(config.grid.obstacles, 12);
        assert_eq!(config.planning.agents, 2);
        assert_eq!(config.planning.iteration_cap, 5000);
        assert_eq!(config.planning.seed, Some(7));
        assert_eq!(config.logging.file.as_deref(), Some("planner.log"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/gridlock.toml").is_err());
    }
}

#[cfg(test)]
mod random_grid_tests {
    use super::*;

    #[test]
    fn test_scattered_obstacles_stay_in_bounds() {
        let mut source = RandomScenarioSource::new(Some(42));
        let obstacles = source.scatter_obstacles(20, 30, 50);
        assert!(!obstacles.is_empty());
        assert!(obstacles.len() <= 50); // duplicates collapse
        for cell in &obstacles {
            assert!(cell.row >= 0 && cell.row < 20);
            assert!(cell.col >= 0 && cell.col < 30);
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = RandomScenarioSource::new(Some(7)).scatter_obstacles(50, 50, 40);
        let b = RandomScenarioSource::new(Some(7)).scatter_obstacles(50, 50, 40);
        assert_eq!(a, b);
    }

    #[test]
    fn test_populate_places_paired_agents_and_goals_on_free_cells() {
        let mut source = RandomScenarioSource::new(Some(11));
        let world = source.world(20, 20, 30).unwrap();
        let mut workspace = Workspace::new(world);
        source.populate(&mut workspace, 4).unwrap();

        assert_eq!(workspace.agent_count(), 4);
        let agents = workspace.assignments().unwrap();
        assert_eq!(agents.len(), 4);
        for a in &agents {
            assert!(workspace.world().is_free(a.start));
            assert!(workspace.world().is_free(a.goal));
            assert_ne!(a.start, a.goal);
        }
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;

    fn workspace_5x5() -> Workspace {
        Workspace::new(GridWorld::new(5, 5, HashSet::new()).unwrap())
    }

    #[test]
    fn test_single_agent_dispatch() {
        let mut workspace = workspace_5x5();
        workspace.create_agent("agent_1", 0, 0).unwrap();
        workspace.create_goal("agent_1", 4, 4).unwrap();

        let service = PlanningService::new(init_noop_logger());
        let outcome = service
            .plan_workspace(&workspace, DEFAULT_ITERATION_CAP)
            .unwrap();

        assert_eq!(outcome.committed_paths.len(), 1);
        assert_eq!(outcome.committed_paths["agent_1"].len(), 9);
        assert_eq!(outcome.action_plans["agent_1"].len(), 8);
        assert!(outcome.visited_sets.contains_key("agent_1"));
    }

    #[test]
    fn test_multi_agent_dispatch() {
        let mut workspace = workspace_5x5();
        workspace.create_agent("agent_1", 0, 0).unwrap();
        workspace.create_goal("agent_1", 0, 4).unwrap();
        workspace.create_agent("agent_2", 4, 0).unwrap();
        workspace.create_goal("agent_2", 4, 4).unwrap();

        let service = PlanningService::new(init_noop_logger());
        let outcome = service
            .plan_workspace(&workspace, DEFAULT_ITERATION_CAP)
            .unwrap();
        assert_eq!(outcome.committed_paths.len(), 2);
    }

    #[test]
    fn test_empty_workspace_is_rejected() {
        let workspace = workspace_5x5();
        let service = PlanningService::new(init_noop_logger());
        match service.plan_workspace(&workspace, DEFAULT_ITERATION_CAP) {
            Err(ApplicationError::Domain(DomainError::InvalidCommand { reason })) => {
                assert!(reason.contains("no agents"));
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_single_agent_with_unreachable_goal_reports_visited_only() {
        let mut obstacles = HashSet::new();
        obstacles.insert(Cell::new(2, 3));
        obstacles.insert(Cell::new(4, 3));
        obstacles.insert(Cell::new(3, 2));
        obstacles.insert(Cell::new(3, 4));
        let world = GridWorld::new(7, 7, obstacles).unwrap();
        let mut workspace = Workspace::new(world);
        workspace.create_agent("agent_1", 0, 0).unwrap();
        workspace.create_goal("agent_1", 3, 3).unwrap();

        let service = PlanningService::new(init_noop_logger());
        let outcome = service
            .plan_workspace(&workspace, DEFAULT_ITERATION_CAP)
            .unwrap();
        assert!(outcome.committed_paths.is_empty());
        assert!(outcome.action_plans.is_empty());
        assert!(outcome.visited_sets.contains_key("agent_1"));
    }
}

#[cfg(test)]
mod logger_tests {
    use super::*;

    #[test]
    fn test_console_logger_smoke() {
        let logger = init_console_logger();
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
    }

    #[test]
    fn test_injected_logger_sees_planner_milestones() {
        let recorder = RecordingLogger::new();
        let logger: DynLogger = recorder.clone();

        let mut workspace = Workspace::new(GridWorld::new(6, 6, HashSet::new()).unwrap());
        workspace.create_agent("agent_1", 0, 0).unwrap();
        workspace.create_goal("agent_1", 0, 5).unwrap();
        workspace.create_agent("agent_2", 5, 0).unwrap();
        workspace.create_goal("agent_2", 5, 5).unwrap();

        let service = PlanningService::new(logger);
        service
            .plan_workspace(&workspace, DEFAULT_ITERATION_CAP)
            .unwrap();

        let lines = recorder.lines();
        assert!(lines
            .iter()
            .any(|l| l.contains("goal reached for agent 'agent_1'")));
        assert!(lines
            .iter()
            .any(|l| l.contains("goal reached for agent 'agent_2'")));
    }
}
