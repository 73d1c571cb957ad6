use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    errors::{BudgetError, Result},
    ledger::{
        format::{DEFAULT_CURRENCY, DEFAULT_NAME_WIDTH},
        ExportFormat, LineFormat,
    },
    utils::{paths, persistence::write_atomic},
};

pub const DEFAULT_EXPORT_FILE: &str = "expense_analysis.txt";

const MIN_NAME_WIDTH: usize = 4;
const MAX_NAME_WIDTH: usize = 80;

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "currency",
    "name_width",
    "export_path",
    "export_format",
    "plain_output",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub name_width: usize,
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            name_width: DEFAULT_NAME_WIDTH,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            export_format: ExportFormat::Text,
            plain_output: false,
        }
    }
}

impl Config {
    pub fn line_format(&self) -> LineFormat {
        LineFormat::new(self.currency.clone(), self.name_width)
    }

    /// Updates one setting from its textual form, leaving the config untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency" => {
                if value.is_empty() {
                    return Err(BudgetError::invalid("currency label cannot be empty"));
                }
                self.currency = value.to_string();
            }
            "name_width" => {
                let width: usize = value.parse().map_err(|_| {
                    BudgetError::invalid(format!("name_width must be a whole number, got `{value}`"))
                })?;
                if !(MIN_NAME_WIDTH..=MAX_NAME_WIDTH).contains(&width) {
                    return Err(BudgetError::invalid(format!(
                        "name_width must be between {MIN_NAME_WIDTH} and {MAX_NAME_WIDTH}"
                    )));
                }
                self.name_width = width;
            }
            "export_path" => {
                if value.is_empty() {
                    return Err(BudgetError::invalid("export_path cannot be empty"));
                }
                self.export_path = PathBuf::from(value);
            }
            "export_format" => self.export_format = value.parse()?,
            "plain_output" => self.plain_output = parse_flag(value)?,
            other => {
                return Err(BudgetError::invalid(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.clone()),
            ("name_width", self.name_width.to_string()),
            ("export_path", self.export_path.display().to_string()),
            ("export_format", self.export_format.to_string()),
            ("plain_output", self.plain_output.to_string()),
        ]
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(BudgetError::invalid(format!(
            "expected on/off, got `{value}`"
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    /// Loads the stored configuration, falling back to defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
