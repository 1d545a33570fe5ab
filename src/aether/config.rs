use crate::error::{AetherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["seed-welcome", "dedup-links", "graph-direction"];

/// Flow direction of the rendered link graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GraphDirection {
    #[default]
    TD,
    LR,
    BT,
    RL,
}

impl fmt::Display for GraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GraphDirection::TD => "TD",
            GraphDirection::LR => "LR",
            GraphDirection::BT => "BT",
            GraphDirection::RL => "RL",
        };
        f.write_str(s)
    }
}

impl FromStr for GraphDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TD" | "TB" => Ok(GraphDirection::TD),
            "LR" => Ok(GraphDirection::LR),
            "BT" => Ok(GraphDirection::BT),
            "RL" => Ok(GraphDirection::RL),
            other => Err(format!("Invalid graph direction: {}", other)),
        }
    }
}

/// Session configuration, stored in `<config dir>/config.json`.
///
/// Notes themselves are never written to disk; only these settings are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AetherConfig {
    /// Start each session with the welcome notes
    #[serde(default = "default_seed_welcome")]
    pub seed_welcome: bool,

    /// Store each linked note once even if referenced repeatedly
    #[serde(default)]
    pub dedup_links: bool,

    #[serde(default)]
    pub graph_direction: GraphDirection,
}

fn default_seed_welcome() -> bool {
    true
}

impl Default for AetherConfig {
    fn default() -> Self {
        Self {
            seed_welcome: default_seed_welcome(),
            dedup_links: false,
            graph_direction: GraphDirection::default(),
        }
    }
}

impl AetherConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AetherConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed-welcome" => Some(self.seed_welcome.to_string()),
            "dedup-links" => Some(self.dedup_links.to_string()),
            "graph-direction" => Some(self.graph_direction.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-welcome" => self.seed_welcome = parse_bool(key, value)?,
            "dedup-links" => self.dedup_links = parse_bool(key, value)?,
            "graph-direction" => {
                self.graph_direction = value.parse().map_err(AetherError::Config)?
            }
            other => return Err(AetherError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AetherError::Config(format!(
            "{} expects true or false, got {}",
            key, value
        ))),
    }
}
