//! Scenario loader.
//!
//! Loads field size, players and goals from RON files.

use std::path::Path;

use hunt_core::{FieldDimensions, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::scenario::{GoalSpec, Scenario};

/// Scenario data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    dimensions: (u32, u32),
    #[serde(default)]
    players: Vec<(i32, i32)>,
    goals: Vec<(i32, i32, i32, i32)>, // (x, y, danger_cost, surround_threat)
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let dimensions = FieldDimensions::new(data.dimensions.0, data.dimensions.1);
        if dimensions.is_empty() {
            anyhow::bail!(
                "Scenario dimensions must be non-zero (got {}x{})",
                dimensions.width,
                dimensions.height
            );
        }

        let players = data
            .players
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();

        let goals = data
            .goals
            .into_iter()
            .map(|(x, y, danger_cost, surround_threat)| GoalSpec {
                position: Position::new(x, y),
                danger_cost,
                surround_threat,
            })
            .collect();

        Ok(Scenario {
            dimensions,
            players,
            goals,
        })
    }
}
