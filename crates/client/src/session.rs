//! Assembles a [`Hunt`] from scenario and configuration files.
use std::sync::Arc;

use anyhow::{Context, Result};
use hunt_content::{ConfigLoader, Scenario, ScenarioLoader};
use hunt_core::HuntConfig;
use hunt_runtime::{Hunt, RuntimeConfig, TableDangerOracle};

use crate::config::ClientConfig;

/// Loads the hunt config file (if any) and layers `HUNT_*` overrides on top.
pub fn load_runtime_config(
    client: &ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RuntimeConfig> {
    let hunt = match &client.hunt_config {
        Some(path) => ConfigLoader::load(path)?,
        None => HuntConfig::default(),
    };

    Ok(RuntimeConfig::new(hunt).with_overrides(lookup))
}

pub fn danger_table(scenario: &Scenario) -> TableDangerOracle {
    let mut oracle = TableDangerOracle::new();
    for goal in &scenario.goals {
        oracle.insert(goal.position, goal.danger_cost, goal.surround_threat);
    }
    oracle
}

pub fn build_hunt(scenario: &Scenario, config: RuntimeConfig) -> Result<Hunt> {
    let field = scenario
        .playfield()
        .context("Scenario does not fit its own field")?;

    let hunt = Hunt::builder()
        .config(config)
        .field(field)
        .goals(scenario.goal_positions())
        .oracle(Arc::new(danger_table(scenario)))
        .build()?;

    Ok(hunt)
}

pub fn load_hunt(client: &ClientConfig, runtime: RuntimeConfig) -> Result<Hunt> {
    let scenario = ScenarioLoader::load(&client.scenario)?;
    tracing::info!(
        "Loaded scenario {}: {}x{} field, {} players, {} goals",
        client.scenario.display(),
        scenario.dimensions.width,
        scenario.dimensions.height,
        scenario.players.len(),
        scenario.goals.len()
    );
    build_hunt(&scenario, runtime)
}
