// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Engine and exercise-catalog configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level configuration: catalog access plus the muscle-name mapping used
/// when importing external exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// External primary-muscle name -> internal muscle group
    pub muscle_mappings: HashMap<String, String>,
    pub catalog: CatalogConfig,
}

/// External exercise catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub source_url: String,
    pub enabled: bool,
    pub request_timeout_seconds: u64,
}

impl EngineConfig {
    /// Load configuration from a file or fall back to embedded defaults
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new("engine_config.toml").exists() {
            return Self::load_from_file("engine_config.toml");
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config file: {}", path))?;

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse engine config file: {}", path))?;

        Ok(config)
    }

    /// Map an external primary-muscle name to an internal muscle group
    ///
    /// Unknown names land in Back, the broadest pulling group.
    pub fn map_primary_muscle(&self, primary: &str) -> String {
        self.muscle_mappings
            .get(&primary.to_lowercase())
            .cloned()
            .unwrap_or_else(|| "Back".to_string())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut muscle_mappings = HashMap::new();

        muscle_mappings.insert("chest".to_string(), "Chest".to_string());
        muscle_mappings.insert("shoulders".to_string(), "Shoulders".to_string());
        muscle_mappings.insert("triceps".to_string(), "Triceps".to_string());
        muscle_mappings.insert("biceps".to_string(), "Biceps".to_string());
        muscle_mappings.insert("calves".to_string(), "Calves".to_string());
        muscle_mappings.insert("glutes".to_string(), "Glutes".to_string());
        muscle_mappings.insert("hamstrings".to_string(), "Hamstrings".to_string());
        muscle_mappings.insert("quadriceps".to_string(), "Quads".to_string());
        muscle_mappings.insert("lats".to_string(), "Back".to_string());
        muscle_mappings.insert("middle back".to_string(), "Back".to_string());
        muscle_mappings.insert("traps".to_string(), "Back".to_string());
        muscle_mappings.insert("forearms".to_string(), "Biceps".to_string());
        muscle_mappings.insert("abdominals".to_string(), "Core".to_string());
        muscle_mappings.insert("lower back".to_string(), "Back".to_string());
        muscle_mappings.insert("neck".to_string(), "Shoulders".to_string());
        muscle_mappings.insert("adductors".to_string(), "Quads".to_string());
        muscle_mappings.insert("abductors".to_string(), "Glutes".to_string());

        Self {
            muscle_mappings,
            catalog: CatalogConfig {
                source_url:
                    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/dist/exercises.json"
                        .to_string(),
                enabled: true,
                request_timeout_seconds: 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_maps_known_muscles() {
        let config = EngineConfig::default();
        assert_eq!(config.map_primary_muscle("quadriceps"), "Quads");
        assert_eq!(config.map_primary_muscle("Lats"), "Back");
        assert_eq!(config.map_primary_muscle("something else"), "Back");
        assert!(config.catalog.enabled);
        assert_eq!(config.catalog.request_timeout_seconds, 5);
    }

    #[test]
    fn load_falls_back_to_defaults_without_file() {
        let config = EngineConfig::load(None).unwrap();
        assert!(!config.muscle_mappings.is_empty());
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[muscle_mappings]
chest = "Chest"

[catalog]
source_url = "https://example.test/exercises.json"
enabled = false
request_timeout_seconds = 2
"#
        )
        .unwrap();

        let config = EngineConfig::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert!(!config.catalog.enabled);
        assert_eq!(config.catalog.source_url, "https://example.test/exercises.json");
        assert_eq!(config.map_primary_muscle("chest"), "Chest");
    }

    #[test]
    fn load_missing_file_errors_with_context() {
        let err = EngineConfig::load_from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read engine config"));
    }
}
