//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use strum::EnumString;

/// Default scenario shipped with the client.
pub const DEFAULT_SCENARIO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/default.ron");

/// How decisions are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub scenario: PathBuf,
    pub hunt_config: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario: PathBuf::from(DEFAULT_SCENARIO),
            hunt_config: None,
            output: OutputFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUNT_SCENARIO` - RON scenario path (default: bundled scenario)
    /// - `HUNT_CONFIG` - TOML hunt config path (default: built-in weights)
    /// - `HUNT_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("HUNT_SCENARIO") {
            config.scenario = PathBuf::from(path);
        }

        config.hunt_config = lookup("HUNT_CONFIG").map(PathBuf::from);

        if let Some(value) = lookup("HUNT_OUTPUT") {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(_) => tracing::warn!("Unknown HUNT_OUTPUT={:?}, using text", value),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert!(config.scenario.ends_with("scenarios/default.ron"));
    }

    #[test]
    fn reads_paths_and_output() {
        let config = ClientConfig::from_lookup(|key| match key {
            "HUNT_SCENARIO" => Some("maps/arena.ron".into()),
            "HUNT_CONFIG" => Some("hunt.toml".into()),
            "HUNT_OUTPUT" => Some("JSON".into()),
            _ => None,
        });

        assert_eq!(config.scenario, PathBuf::from("maps/arena.ron"));
        assert_eq!(config.hunt_config, Some(PathBuf::from("hunt.toml")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn unknown_output_falls_back_to_text() {
        let config = ClientConfig::from_lookup(|key| (key == "HUNT_OUTPUT").then(|| "yaml".into()));
        assert_eq!(config.output, OutputFormat::Text);
    }
}
