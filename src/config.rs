//! Generator configuration helpers.
//!
//! An optional JSON file supplies defaults for the non-required inputs and
//! the output directory. Command-line flags always win over it.
use crate::schema::{DEFAULT_AUDIENCE, DEFAULT_OUTPUT_TARGET, DEFAULT_TARGET_FRAMEWORK};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const CONFIG_ENV_VAR: &str = "PROMPTGEN_CONFIG";
const CONFIG_DIR_NAME: &str = "promptgen";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub schema_version: u32,
    #[serde(default = "default_target_framework")]
    pub target_framework: String,
    #[serde(default = "default_output_target")]
    pub output_target: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_choices: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
}

fn default_target_framework() -> String {
    DEFAULT_TARGET_FRAMEWORK.to_string()
}

fn default_output_target() -> String {
    DEFAULT_OUTPUT_TARGET.to_string()
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// Build the config used when no file is present.
pub fn default_config() -> GeneratorConfig {
    GeneratorConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        target_framework: default_target_framework(),
        output_target: default_output_target(),
        audience: default_audience(),
        style_choices: None,
        variables: None,
        assembly_order: None,
        out_dir: None,
    }
}

/// Load a config file from an explicit path.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Persist a config to disk in a stable JSON format.
pub fn write_config(path: &Path, config: &GeneratorConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Validate schema version and the string defaults a config may override.
pub fn validate_config(config: &GeneratorConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    for (label, value) in [
        ("target_framework", &config.target_framework),
        ("output_target", &config.output_target),
        ("audience", &config.audience),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!("{label} must be non-empty"));
        }
    }
    if let Some(order) = &config.assembly_order {
        if order.iter().any(|id| id.trim().is_empty()) {
            return Err(anyhow!("assembly_order entries must be non-empty block ids"));
        }
    }
    Ok(())
}

/// Per-user config location, e.g. `~/.config/promptgen/config.json`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Where the effective config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    User(PathBuf),
    Builtin,
}

/// Pick the config source: `--config`, then `PROMPTGEN_CONFIG`, then the
/// per-user file if it exists.
pub fn resolve_config_source(explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Flag(path.to_path_buf());
    }
    if let Some(raw) = env::var_os(CONFIG_ENV_VAR).filter(|raw| !raw.is_empty()) {
        return ConfigSource::Env(PathBuf::from(raw));
    }
    match user_config_path() {
        Some(path) if path.is_file() => ConfigSource::User(path),
        _ => ConfigSource::Builtin,
    }
}

/// Load and validate the effective config for a source.
pub fn load_effective_config(source: &ConfigSource) -> Result<GeneratorConfig> {
    let config = match source {
        ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::User(path) => {
            load_config(path)?
        }
        ConfigSource::Builtin => default_config(),
    };
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
