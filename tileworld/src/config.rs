use std::fs;
use std::path::Path;

use log::{error, info};

use crate::rules::{Project, RulesError};

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub fixed: Vec<String>,

    #[serde(default)]
    pub movable: Vec<String>,

    #[serde(default)]
    pub player: Option<String>,

    #[serde(default)]
    pub world: Option<String>,

    #[serde(default)]
    pub default_tile: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    Rules(RulesError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<RulesError> for ConfigError {
    fn from(error: RulesError) -> Self {
        Self::Rules(error)
    }
}

impl ProjectConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(data)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(config) => {
                    info!("Uses {}", path.display());
                    config
                }
                Err(error) => {
                    error!("Unable to parse project config {}, {error:?}", path.display());
                    ProjectConfig::default()
                }
            },
            _ => {
                info!("Uses default project config, {} not found", path.display());
                ProjectConfig::default()
            }
        }
    }
}

impl Project {
    pub fn from_config(config: &ProjectConfig) -> Result<Self, ConfigError> {
        let mut project = Project::new(&config.fixed, &config.movable);
        if let Some(name) = &config.player {
            let tile = project.find_tile(name)?.key;
            let kind = project.get_kind(tile)?;
            project.set_player(Some(kind));
        }
        if let Some(name) = &config.world {
            let tile = project.find_tile(name)?.key;
            project.set_world(Some(tile));
        }
        if let Some(name) = &config.default_tile {
            let tile = project.find_tile(name)?.key;
            let kind = project.get_kind(tile)?;
            project.set_default_tile(kind);
        }
        Ok(project)
    }
}
