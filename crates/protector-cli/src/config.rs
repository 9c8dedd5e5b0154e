use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProtectorConfig {
    #[serde(default)]
    pub encrypt: EncryptSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EncryptSection {
    pub iterations: Option<u32>,
    pub mode: Option<SnippetMode>,
    pub format: Option<OutputFormat>,
    pub password_file: Option<String>,
}

/// Which Hugo snippet the helper output wraps the payload in.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SnippetMode {
    /// `{{< protector payload="..." >}}` shortcode
    #[default]
    Shortcode,
    /// `protector_full_page_payload` front matter line
    Page,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Ready-to-paste snippet
    #[default]
    Helper,
    /// Bare transport string
    Raw,
}

impl ProtectorConfig {
    fn validate(&self, path: &Path) -> anyhow::Result<()> {
        if self.encrypt.iterations == Some(0) {
            return Err(CliError::invalid_input(format!(
                "Invalid config {}: encrypt.iterations must be greater than zero",
                path.display()
            ))
            .into());
        }
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load configuration from an explicit path or the default location.
///
/// An explicit path must exist. A missing default file yields defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<ProtectorConfig> {
    let explicit = explicit.filter(|value| !value.trim().is_empty());
    let path = match explicit {
        Some(value) => expand_tilde(value)?,
        None => default_config_path()?,
    };

    if !path.exists() {
        if explicit.is_some() {
            return Err(CliError::not_found(
                format!("Config file not found: {}", path.display()),
                "Hint: Check --config or HUGO_PROTECTOR_CONFIG.",
            )
            .into());
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ProtectorConfig::default());
    }

    tracing::debug!(path = %path.display(), "loading config");
    let config = read_config(&path)?;
    config.validate(&path)?;
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<ProtectorConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("hugo-protector"));
        }
    }
    Ok(home_dir()?.join(".config").join("hugo-protector"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("HOME is not set"))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(value: &str) -> anyhow::Result<PathBuf> {
    match value.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(value)),
    }
}
