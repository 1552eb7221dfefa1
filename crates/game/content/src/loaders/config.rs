//! Hunt configuration loader.

use std::path::Path;

use hunt_core::HuntConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for hunt configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`HuntConfig::default`].
    pub fn load(path: &Path) -> LoadResult<HuntConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HuntConfig> {
        let config: HuntConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
