pub mod console_logger;
pub mod noop_logger;
pub mod random_grid;

pub use console_logger::init_console_logger;
pub use noop_logger::init_noop_logger;
pub use random_grid::RandomScenarioSource;
