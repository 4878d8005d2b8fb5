// File: crates/liftplot/src/config.rs
// Summary: Configuration management (TOML) with defaults matching the stock plots.

use std::fs;
use std::path::{Path, PathBuf};

use liftplot_chart::{theme, RenderOptions, DEFAULT_DPI};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::histogram::{DEFAULT_MAX_REPS, DEFAULT_MIN_REPS};
use crate::ranking::DEFAULT_TOP_N;
use crate::record::LoadOptions;

/// Environment variable naming a config file to load.
pub const CONFIG_ENV: &str = "LIFTPLOT_CONFIG";
/// Picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "liftplot.toml";

const MAX_DPI: u32 = 1200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plot_dir: PathBuf,
    pub top_n: usize,
    pub dpi: u32,
    pub delimiter: char,
    pub theme: String,
    pub skip_incomplete_rows: bool,
    pub histogram: HistogramConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub min_reps: u32,
    /// Exclusive upper bound.
    pub max_reps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plot_dir: PathBuf::from("plots/"),
            top_n: DEFAULT_TOP_N,
            dpi: DEFAULT_DPI,
            delimiter: ',',
            theme: "light".to_string(),
            skip_incomplete_rows: false,
            histogram: HistogramConfig::default(),
        }
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { min_reps: DEFAULT_MIN_REPS, max_reps: DEFAULT_MAX_REPS }
    }
}

impl Config {
    /// Load and validate a config file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::file_access(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `$LIFTPLOT_CONFIG` if set, else `liftplot.toml` in the working directory, else defaults.
    pub fn discover() -> Result<Self> {
        Self::discover_in(std::env::var_os(CONFIG_ENV).map(PathBuf::from), Path::new("."))
    }

    /// [`Config::discover`] with the environment and working directory made explicit.
    pub fn discover_in(env_path: Option<PathBuf>, dir: &Path) -> Result<Self> {
        if let Some(path) = env_path {
            tracing::debug!(path = %path.display(), "loading config from {CONFIG_ENV}");
            return Self::load(&path);
        }
        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "loading config");
            return Self::load(&local);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::Config("top_n must be at least 1".into()));
        }
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(Error::Config(format!("dpi must be between 1 and {MAX_DPI}")));
        }
        if self.histogram.min_reps >= self.histogram.max_reps {
            return Err(Error::Config(format!(
                "histogram.min_reps ({}) must be below histogram.max_reps ({})",
                self.histogram.min_reps, self.histogram.max_reps
            )));
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(Error::Config(format!("unsupported delimiter {:?}", self.delimiter)));
        }
        if theme::lookup(&self.theme).is_none() {
            return Err(Error::Config(format!("unknown theme '{}'", self.theme)));
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter as u8,
            skip_incomplete_rows: self.skip_incomplete_rows,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { theme: theme::find(&self.theme), ..RenderOptions::default() }
    }
}
