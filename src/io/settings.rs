use crate::defaults::*;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

fn default_format() -> OutputFormat {
    OutputFormat::from_str(OUTPUT_FORMAT).unwrap_or(OutputFormat::Table)
}
fn default_compact() -> bool {
    COMPACT
}
fn default_precision() -> usize {
    PRECISION
}
fn default_parallel() -> bool {
    PARALLEL
}
fn default_output_config() -> OutputConfig {
    OutputConfig {
        format: default_format(),
        compact: default_compact(),
        precision: default_precision(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}', expected table, csv or json", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    #[serde(default = "default_output_config")]
    pub output: OutputConfig,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_compact")]
    pub compact: bool,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            output: default_output_config(),
            parallel: default_parallel(),
        }
    }
}

impl Configuration {
    /// Loads the configuration from a toml file. A file that does not exist gives the
    /// default settings, a file that can not be parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Configuration::default());
        }
        let config_string: String = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file '{}'", path.display()))?;
        toml::from_str(&config_string)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Loads `qcgeom.toml` from the working directory.
    pub fn from_working_directory() -> Result<Self> {
        Configuration::load(Path::new(CONFIG_FILE_NAME))
    }
}
