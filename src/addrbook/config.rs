use crate::error::{AddrbookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

/// What to do with a data file line that does not hold exactly seven fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Abort the load; nothing is replaced in memory.
    Fail,
    /// Drop the line and report it.
    Skip,
    /// Drop the line, report it and copy it to the `.rejected` sidecar.
    #[default]
    Quarantine,
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MalformedLinePolicy::Fail => "fail",
            MalformedLinePolicy::Skip => "skip",
            MalformedLinePolicy::Quarantine => "quarantine",
        };
        f.write_str(s)
    }
}

impl FromStr for MalformedLinePolicy {
    type Err = AddrbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(MalformedLinePolicy::Fail),
            "skip" => Ok(MalformedLinePolicy::Skip),
            "quarantine" => Ok(MalformedLinePolicy::Quarantine),
            other => Err(AddrbookError::Config(format!(
                "Unknown malformed-lines policy: {} (expected fail, skip or quarantine)",
                other
            ))),
        }
    }
}

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrbookConfig {
    /// How loading treats lines that don't parse
    #[serde(default)]
    pub malformed_lines: MalformedLinePolicy,

    /// Data file, relative paths resolve against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for AddrbookConfig {
    fn default() -> Self {
        Self {
            malformed_lines: MalformedLinePolicy::default(),
            data_file: default_data_file(),
        }
    }
}

impl AddrbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(AddrbookError::file_io(&config_path))?;
        let config: AddrbookConfig =
            serde_json::from_str(&content).map_err(AddrbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrbookError::file_io(config_dir))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddrbookError::Serialization)?;
        fs::write(&config_path, content).map_err(AddrbookError::file_io(&config_path))?;
        Ok(())
    }

    /// The data file as an absolute-or-cwd path, anchored at `home` when relative.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            home.join(&self.data_file)
        }
    }

    /// Applies a `key = value` pair as typed by the user.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "malformed-lines" | "malformed_lines" => {
                self.malformed_lines = value.parse()?;
            }
            "data-file" | "data_file" => {
                if value.trim().is_empty() {
                    return Err(AddrbookError::Config("data-file cannot be empty".into()));
                }
                self.data_file = PathBuf::from(value.trim());
            }
            other => {
                return Err(AddrbookError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Current value for a user-facing key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "malformed-lines" | "malformed_lines" => Ok(self.malformed_lines.to_string()),
            "data-file" | "data_file" => Ok(self.data_file.display().to_string()),
            other => Err(AddrbookError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("malformed-lines", self.malformed_lines.to_string()),
            ("data-file", self.data_file.display().to_string()),
        ]
    }
}
