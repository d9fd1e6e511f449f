use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::collect::{DEFAULT_EXTENSIONS, file_scanner::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".inclistrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub guard: Option<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            guard: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an extension is empty or dotted, if any glob in
    /// `ignores` is invalid, or if `guard` is not a valid macro name.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.extensions {
            validate_extension(ext)
                .with_context(|| format!("Invalid entry in 'extensions': \"{}\"", ext))?;
        }

        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if let Some(guard) = &self.guard {
            validate_guard(guard).context("Invalid 'guard'")?;
        }

        Ok(())
    }
}

pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.is_empty() {
        anyhow::bail!("extension must not be empty");
    }
    if ext.starts_with('.') {
        anyhow::bail!("extension must be given without the leading dot");
    }
    if ext.contains(['/', '\\']) {
        anyhow::bail!("extension must not contain path separators");
    }
    Ok(())
}

/// A guard must be a C identifier, e.g. `STABLE_H`.
pub fn validate_guard(guard: &str) -> Result<()> {
    let mut chars = guard.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        anyhow::bail!("\"{}\" is not a valid macro name", guard);
    }
    Ok(())
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the config that applies to `root`, searching upward from it.
///
/// A root that cannot be resolved yields the defaults; the scan itself
/// reports the missing directory.
pub fn load_config(root: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = root
        .canonicalize()
        .ok()
        .and_then(|start_dir| find_config_file(&start_dir))
    else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path),
    })
}
