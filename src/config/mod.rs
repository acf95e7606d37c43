use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::services::InsightThresholds;
use crate::errors::{Result, TrackerError};
use crate::ledger::CategorySet;
use crate::utils;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Session settings: which categories exist and how insights are judged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub categories: CategorySet,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "InsightThresholds::default_underspend_ratio")]
    pub underspend_ratio: Decimal,
}

impl Config {
    fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn thresholds(&self) -> InsightThresholds {
        InsightThresholds {
            underspend_ratio: self.underspend_ratio,
        }
    }

    /// Rejects settings the rest of the crate cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(TrackerError::Config("category list is empty".into()));
        }
        if let Some(duplicate) = self.categories.first_duplicate() {
            return Err(TrackerError::Config(format!(
                "category `{}` is listed more than once",
                duplicate
            )));
        }
        // Above 1 a category could be over and under budget at once.
        if self.underspend_ratio < Decimal::ZERO || self.underspend_ratio > Decimal::ONE {
            return Err(TrackerError::Config(format!(
                "underspend_ratio must be between 0 and 1, got {}",
                self.underspend_ratio
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: CategorySet::default(),
            currency_symbol: Self::default_currency_symbol(),
            underspend_ratio: InsightThresholds::default_underspend_ratio(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `config.json` inside the application data directory.
    pub fn new() -> Self {
        Self::with_path(utils::app_data_dir().join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and validates the file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::info!(
            path = %self.path.display(),
            categories = config.categories.len(),
            "config loaded"
        );
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
