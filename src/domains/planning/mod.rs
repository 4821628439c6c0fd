pub mod candidate;
pub mod coordinator;
pub mod frontier;
pub mod heuristic;
pub mod outcome;
pub mod single;

pub use candidate::*;
pub use coordinator::*;
pub use frontier::*;
pub use heuristic::*;
pub use outcome::*;
pub use single::*;

/// Hard stop on per-agent pop counts. Reaching it means the search space is
/// degenerate for the given placements; the whole run is aborted.
pub const DEFAULT_ITERATION_CAP: u64 = 1_000_000;
