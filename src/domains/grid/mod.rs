pub mod cell;
pub mod workspace;
pub mod world;

pub use cell::*;
pub use workspace::*;
pub use world::*;
