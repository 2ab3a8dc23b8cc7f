pub mod error;

use anyhow::{Context, anyhow};
use log::{debug, info};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::GalleryConfig;

pub const CONFIG_PATH_VAR: &str = "OVERVIEW_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "OVERVIEW_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "overview.toml",
    "overview.json",
    "config/overview.toml",
    "config/overview.json",
];

/// Source that produced the gallery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
    /// Path passed explicitly by the caller (e.g. a CLI flag).
    Explicit(PathBuf),
}

impl GalleryConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$OVERVIEW_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$OVERVIEW_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let cwd = env::current_dir()
            .context("failed to resolve working directory")?;
        Self::load_with(|name| env::var(name).ok(), &cwd)
    }

    /// Same as [`GalleryConfig::load_from_env`] with an injectable variable
    /// lookup and base directory for default files.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            info!("Loaded gallery config from {}", path.display());
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let mut parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            parsed.cards.resolve_relative_to(base_dir);
            info!("Loaded gallery config from {CONFIG_JSON_VAR}");
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            info!("Loaded gallery config from {}", path.display());
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("No gallery config found, using defaults");
        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read gallery config from {}", path.display())
        })?;

        let mut config = match path.extension().and_then(|ext| ext.to_str())
        {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid gallery config {}", path.display())
            })?,
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid gallery config {}: {}",
                        path.display(),
                        err
                    )
                })?
            }
            _ => {
                Self::parse_from_str(&contents, &path.display().to_string())?
            }
        };

        // Relative card files are named from the config file's directory.
        if let Some(dir) = path.parent() {
            config.cards.resolve_relative_to(dir);
        }
        Ok(config)
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse gallery config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid gallery config json: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
