pub mod grid;
pub mod logger;
pub mod planning;
