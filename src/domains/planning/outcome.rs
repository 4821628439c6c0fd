use crate::domains::grid::{Cell, MoveDelta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

/// Everything a planning run hands to downstream consumers (rendering,
/// animation, diagnostics). Read-only from their side: nothing here feeds
/// back into planner state.
///
/// Agents that never reached their goal have no entry in `committed_paths`
/// or `action_plans`; their visited set is still reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningOutcome {
    pub run_id: String,
    pub committed_paths: BTreeMap<String, Vec<Cell>>,
    pub action_plans: BTreeMap<String, Vec<MoveDelta>>,
    pub visited_sets: BTreeMap<String, HashSet<Cell>>,
    pub computed_at: DateTime<Utc>,
}

impl PlanningOutcome {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            committed_paths: BTreeMap::new(),
            action_plans: BTreeMap::new(),
            visited_sets: BTreeMap::new(),
            computed_at: Utc::now(),
        }
    }
}

impl Default for PlanningOutcome {
    fn default() -> Self {
        Self::new()
    }
}
