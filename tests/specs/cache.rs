//! External-data cache specs.
//!
//! The cache lives under the platform cache directory, which the builder
//! points into a temp dir via `HOME` and `XDG_CACHE_HOME`.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use crate::prelude::*;

/// Cache file wherever the platform put it under `home`.
fn cache_file(home: &Path) -> Option<PathBuf> {
    [
        home.join(".cache").join("stix2-validator"),
        home.join("Library").join("Caches").join("stix2-validator"),
    ]
    .into_iter()
    .map(|dir| dir.join("rs1cache.bin"))
    .find(|file| file.is_file())
}

/// > A run with caching enabled leaves a cache file behind
#[test]
fn cache_file_is_written() {
    let home = Project::empty();

    validate()
        .on("valid")
        .cache_home(home.path())
        .args(&["indicator.json"])
        .passes();

    assert!(cache_file(home.path()).is_some());
}

/// > Running twice against the same cache works
#[test]
fn repeated_runs_share_cache() {
    let home = Project::empty();

    for _ in 0..2 {
        validate()
            .on("valid")
            .cache_home(home.path())
            .args(&["indicator.json"])
            .passes();
    }
}

/// > --refresh-cache and --clear-cache keep the run working
#[test]
fn refresh_and_clear_cache() {
    let home = Project::empty();

    validate()
        .on("valid")
        .cache_home(home.path())
        .args(&["--refresh-cache", "--clear-cache", "-v", "indicator.json"])
        .passes()
        .stderr_has("cleared 0 cached response(s)");

    assert!(cache_file(home.path()).is_some());
}

/// > --no-cache never touches the cache directory
#[test]
fn no_cache_writes_nothing() {
    let home = Project::empty();

    validate()
        .on("valid")
        .cache_home(home.path())
        .args(&["--no-cache", "indicator.json"])
        .passes();

    assert!(cache_file(home.path()).is_none());
}

/// > A cache directory that cannot be created only warns
#[test]
fn unusable_cache_dir_warns() {
    let home = Project::empty();
    home.file(".cache", "not a directory");
    home.file("Library/Caches", "not a directory");

    validate()
        .on("valid")
        .cache_home(home.path())
        .args(&["indicator.json"])
        .passes()
        .stderr_has("external-data cache disabled");
}
