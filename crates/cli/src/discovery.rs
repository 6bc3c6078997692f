// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input and config file discovery.
//!
//! Expands input paths into the JSON files to validate, and looks for
//! `stixcheck.toml` in the working directory.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Find `stixcheck.toml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    config_path.is_file().then_some(config_path)
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "STIXCHECK_CONFIG")
/// 2. `stixcheck.toml` in the current directory
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Expand input paths into files to validate.
///
/// Files are taken as given, whatever their extension. Directories
/// contribute their `*.json` files, sorted, descending into subdirectories
/// only when `recursive`. Paths that cannot be inspected are kept, so the
/// load step reports them against their own name.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(walk_json(path, recursive));
        } else {
            files.push(path.clone());
        }
    }

    files
}

fn walk_json(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_path(|a, b| a.cmp(b));
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && is_json(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
