use super::cell::Cell;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The static planning world: grid dimensions and the obstacle set.
/// Immutable after construction; obstacle placement (random or explicit) is
/// a collaborator's concern, the world only stores and answers queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridWorld {
    height: i32,
    width: i32,
    obstacles: HashSet<Cell>,
}

impl GridWorld {
    pub fn new(height: i32, width: i32, obstacles: HashSet<Cell>) -> DomainResult<Self> {
        if height <= 0 || width <= 0 {
            return Err(DomainError::InvalidWorld {
                reason: format!("grid dimensions must be positive, got {}x{}", height, width),
            });
        }
        let world = Self {
            height,
            width,
            obstacles,
        };
        if let Some(outside) = world.obstacles.iter().find(|c| !world.in_bounds(**c)) {
            return Err(DomainError::InvalidWorld {
                reason: format!(
                    "obstacle at ({}, {}) lies outside the {}x{} grid",
                    outside.row, outside.col, height, width
                ),
            });
        }
        Ok(world)
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn obstacles(&self) -> &HashSet<Cell> {
        &self.obstacles
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.height && cell.col >= 0 && cell.col < self.width
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_obstacle(cell)
    }
}
