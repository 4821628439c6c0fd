use gridlock::adapters::outbound::{init_console_logger, RandomScenarioSource};
use gridlock::application::PlanningService;
use gridlock::domains::grid::Workspace;
use gridlock::domains::logger::{DynLogger, FileLogger};
use gridlock::Config;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration, falling back to the built-in defaults.
    let config = match Config::from_file("config.toml") {
        Ok(config) => config,
        Err(_) => {
            eprintln!("config.toml not found, using defaults");
            Config::default()
        }
    };

    let logger: DynLogger = match &config.logging.file {
        Some(path) => {
            FileLogger::init(path)?;
            Arc::new(FileLogger)
        }
        None => {
            tracing_subscriber::fmt::init();
            init_console_logger()
        }
    };

    info!("Starting gridlock planner");
    info!(
        "Grid: {}x{}, {} obstacles, {} agents",
        config.grid.rows, config.grid.columns, config.grid.obstacles, config.planning.agents
    );

    // Build a random scenario.
    let mut source = RandomScenarioSource::new(config.planning.seed);
    let world = source.world(config.grid.rows, config.grid.columns, config.grid.obstacles)?;
    let mut workspace = Workspace::new(world);
    source.populate(&mut workspace, config.planning.agents)?;

    // Plan.
    let service = PlanningService::new(logger);
    match service.plan_workspace(&workspace, config.planning.iteration_cap) {
        Ok(outcome) => {
            info!("Run {} finished", outcome.run_id);
            for (id, cells) in &outcome.committed_paths {
                info!("agent '{}': committed path with {} cells", id, cells.len());
            }
            for id in outcome.visited_sets.keys() {
                if !outcome.committed_paths.contains_key(id) {
                    info!("agent '{}': no path found", id);
                }
            }
            // Dump the full outcome for downstream rendering.
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
        Err(e) => {
            error!("Planning run failed: {}", e);
            Err(e.into())
        }
    }
}
