// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file parsing and validation.
//!
//! Handles `stixcheck.toml`: defaults for validation flags, with version
//! validation and warnings for unknown keys.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "stixcheck.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "validate"];

/// Known keys in the `[validate]` table.
const KNOWN_VALIDATE_KEYS: &[&str] = &[
    "version",
    "schemas",
    "disable",
    "enable",
    "strict",
    "strict_types",
    "strict_properties",
    "enforce_refs",
    "no_cache",
];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Config file version (must be 1).
    pub version: i64,

    /// Defaults for validation flags.
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// `[validate]` table.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateConfig {
    /// STIX version to validate against.
    pub version: Option<String>,
    /// Custom schema directory.
    pub schemas: Option<PathBuf>,
    #[serde(default)]
    pub disable: CheckList,
    #[serde(default)]
    pub enable: CheckList,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub strict_types: bool,
    #[serde(default)]
    pub strict_properties: bool,
    #[serde(default)]
    pub enforce_refs: bool,
    #[serde(default)]
    pub no_cache: bool,
}

/// Check list given either as `"202,210"` or `["202", "210"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckList {
    Joined(String),
    Items(Vec<String>),
}

impl Default for CheckList {
    fn default() -> Self {
        CheckList::Items(Vec::new())
    }
}

impl CheckList {
    /// Comma-joined form, as the command line takes it.
    pub fn joined(&self) -> String {
        match self {
            CheckList::Joined(s) => s.clone(),
            CheckList::Items(items) => items.join(","),
        }
    }
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config, warning on stderr about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse(&content, path)?;
    for key in unknown_keys(&content) {
        eprintln!(
            "stixcheck: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        );
    }
    Ok(config)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<FileConfig> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Dotted paths of keys the config does not know about.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
        } else if key == "validate"
            && let toml::Value::Table(validate) = value
        {
            unknown.extend(
                validate
                    .keys()
                    .filter(|k| !KNOWN_VALIDATE_KEYS.contains(&k.as_str()))
                    .map(|k| format!("validate.{k}")),
            );
        }
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
