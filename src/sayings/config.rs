use crate::error::{Result, SayingsError};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INPUT_FILE: &str = "artifact.txt";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SAYINGS_CONFIG_DIR";

/// How PRINT renders records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[TAG] content="..." field="..."`
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Configuration for sayings, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SayingsConfig {
    /// Command file to run when none is given on the command line
    #[serde(default = "default_input_file")]
    pub input_file: String,

    /// Color diagnostics when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub output: OutputFormat,
}

fn default_input_file() -> String {
    DEFAULT_INPUT_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for SayingsConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            color: default_color(),
            output: OutputFormat::default(),
        }
    }
}

impl SayingsConfig {
    /// `$SAYINGS_CONFIG_DIR` if set, otherwise the platform config directory.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "sayings", "sayings").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SayingsError::Io)?;
        let config: SayingsConfig =
            serde_json::from_str(&content).map_err(SayingsError::Serialization)?;
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
}
