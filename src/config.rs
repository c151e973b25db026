use crate::commands::Commands;
use crate::parser::{Indent, TextCodec};
use clap::Parser;
use config::{
    Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_INDENT: &str = "tab";
const DEFAULT_SPACES_PER_LEVEL: usize = 4;
const DEFAULT_LOG_LEVEL: &str = "warn";
const ENV_PREFIX: &str = "OBLIGATION_TREE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Invalid indent style: {0} (expected \"tab\" or \"spaces\")")]
    InvalidIndent(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Every field optional so file and env layers can leave gaps.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    indent: Option<String>,
    spaces_per_level: Option<usize>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub indent: Indent,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            indent: Indent::Tabs,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn codec(&self) -> TextCodec {
        TextCodec::new(self.indent)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Obligation text tree tool", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a custom configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Indentation unit: "tab" or "spaces"
    #[arg(long, global = true)]
    pub indent: Option<String>,

    /// Spaces per level when indenting with spaces
    #[arg(long, global = true)]
    pub spaces_per_level: Option<usize>,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "obligation-tree").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Resolves configuration: CLI args > environment > config file > defaults.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
    // Missing env vars are fine; only a broken environment ends up empty here.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let mut config_builder = ConfigCrate::builder();

    // An explicit --config must exist; the default location is optional.
    if let Some(ref path) = args.config {
        config_builder = config_builder.add_source(File::from(path.clone()).required(true));
    } else if let Some(path) = default_config_path() {
        config_builder = config_builder.add_source(File::from(path).required(false));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    let spaces_per_level = args
        .spaces_per_level
        .or(loaded.spaces_per_level)
        .unwrap_or(DEFAULT_SPACES_PER_LEVEL);
    if spaces_per_level == 0 {
        return Err(ConfigError::ValidationError(
            "spaces_per_level must be at least 1".to_string(),
        ));
    }

    let indent_name = args
        .indent
        .clone()
        .or(loaded.indent)
        .unwrap_or_else(|| DEFAULT_INDENT.to_string());
    let indent = parse_indent(&indent_name, spaces_per_level)?;

    let log_level = args
        .log_level
        .clone()
        .or(loaded.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Ok(AppConfig { indent, log_level })
}

fn parse_indent(name: &str, spaces_per_level: usize) -> Result<Indent, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "tab" | "tabs" => Ok(Indent::Tabs),
        "space" | "spaces" => Ok(Indent::Spaces(spaces_per_level)),
        _ => Err(ConfigError::InvalidIndent(name.to_string())),
    }
}
