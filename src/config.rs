//! Configuration management for hsk-vocab.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML project file (`hsk-vocab.toml`)
//!
//! Precedence: command line > project file > built-in defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::vocab::Level;

/// Where `generate` writes when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "../assets/words/hsk_vocabulary.js";

/// Project file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "hsk-vocab.toml";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "hsk-vocab")]
#[command(about = "Validate, convert and report on HSK vocabulary data")]
#[command(version)]
pub struct Args {
    /// Load a CSV file into a level before running the command
    #[arg(
        long = "input",
        value_name = "LEVEL=PATH",
        value_parser = parse_input,
        help = "Preload a level from CSV, e.g. --input 1=hsk1.csv (repeatable)"
    )]
    pub inputs: Vec<(Level, PathBuf)>,

    /// Explicit project config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One operation per invocation
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Validate every loaded level
    Validate,
    /// Generate the JavaScript data file
    Generate {
        /// Output path (defaults to the configured or built-in path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print statistics
    Stats,
    /// Load a CSV file into a level
    Load {
        csv_file: PathBuf,
        hsk_level: Level,
    },
    /// Export a level to CSV
    Export {
        hsk_level: Level,
        csv_file: PathBuf,
    },
}

/// Parse `LEVEL=PATH`
fn parse_input(s: &str) -> std::result::Result<(Level, PathBuf), String> {
    let (level, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LEVEL=PATH, got '{}'", s))?;
    let level = level.parse::<Level>().map_err(|e| e.to_string())?;
    if path.is_empty() {
        return Err(format!("missing path in '{}'", s));
    }
    Ok((level, PathBuf::from(path)))
}

/// Contents of a TOML project file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Output path for `generate`
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Level number to CSV path, loaded before every command
    pub inputs: BTreeMap<String, PathBuf>,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV files to load before the command, in load order
    pub inputs: Vec<(Level, PathBuf)>,
    /// Output path for `generate` when the command gives none
    pub output: PathBuf,
    pub log_level: String,
    /// Project file that was applied, if any
    pub config_path: Option<PathBuf>,
    /// Discovered project file that was skipped, with the reason
    pub skipped_config: Option<(PathBuf, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_path: None,
            skipped_config: None,
        }
    }
}

impl Config {
    /// Create configuration from parsed arguments, discovering a project file
    ///
    /// Only an explicit `--config` file is fatal. A discovered file that fails
    /// to load or merge is skipped and recorded in `skipped_config`.
    pub fn from_args(args: &Args) -> Result<Self> {
        if let Some(path) = &args.config {
            let project = ProjectConfig::load(path)?;
            return Self::from_parts(args, Some((path.clone(), project)));
        }

        match discover_project_config() {
            Some(path) => Self::from_discovered(args, path),
            None => Self::from_parts(args, None),
        }
    }

    fn from_discovered(args: &Args, path: PathBuf) -> Result<Self> {
        let merged = ProjectConfig::load(&path)
            .and_then(|project| Self::from_parts(args, Some((path.clone(), project))));

        match merged {
            Ok(config) => Ok(config),
            Err(err) => {
                let mut config = Self::from_parts(args, None)?;
                config.skipped_config = Some((path, format!("{:#}", err)));
                Ok(config)
            }
        }
    }

    /// Merge arguments over an already loaded project file (useful for testing)
    pub fn from_parts(args: &Args, project: Option<(PathBuf, ProjectConfig)>) -> Result<Self> {
        let mut config = Config::default();

        if let Some((path, project)) = project {
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();

            for (key, csv_path) in &project.inputs {
                let level = key
                    .parse::<Level>()
                    .with_context(|| format!("Invalid level key '{}' in {:?}", key, path))?;
                config.inputs.push((level, base.join(csv_path)));
            }
            if let Some(output) = project.output {
                config.output = base.join(output);
            }
            if let Some(log_level) = project.log_level {
                config.log_level = log_level;
            }
            config.config_path = Some(path);
        }

        config.inputs.extend(args.inputs.iter().cloned());
        if let Some(log_level) = &args.log_level {
            config.log_level = log_level.clone();
        }

        Ok(config)
    }

    /// Output path for `generate`, preferring an explicit command option
    pub fn output_for(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output.clone())
    }

    pub fn has_project_config(&self) -> bool {
        self.config_path.is_some()
    }
}

/// Look for a project file in the working directory, then the user config dir
fn discover_project_config() -> Option<PathBuf> {
    let local = PathBuf::from(PROJECT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("hsk-vocab").join("config.toml"))
        .filter(|path| path.is_file())
}
