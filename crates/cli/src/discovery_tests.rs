// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "{}").unwrap();
}

#[test]
fn finds_config_in_current_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("stixcheck.toml");
    fs::write(&config_path, "version = 1\n").unwrap();

    assert_eq!(find_config(dir.path()), Some(config_path));
}

#[test]
fn does_not_look_in_parent_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stixcheck.toml"), "version = 1\n").unwrap();
    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), None);
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("custom.toml");

    let err = resolve_config(Some(&missing), dir.path()).unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn explicit_config_wins_over_discovery() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stixcheck.toml"), "version = 1\n").unwrap();
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "version = 1\n").unwrap();

    let resolved = resolve_config(Some(&custom), dir.path()).unwrap();
    assert_eq!(resolved, Some(custom));
}

#[test]
fn directory_yields_sorted_json_files() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("b.json"));
    touch(&dir.path().join("a.json"));
    touch(&dir.path().join("notes.txt"));

    let files = collect_inputs(&[dir.path().to_path_buf()], true);
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["a.json", "b.json"]);
}

#[test]
fn recursive_descends_into_subdirectories() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("top.json"));
    touch(&dir.path().join("nested").join("deep.json"));

    let files = collect_inputs(&[dir.path().to_path_buf()], true);
    assert_eq!(files.len(), 2);
}

#[test]
fn non_recursive_stays_at_top_level() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("top.json"));
    touch(&dir.path().join("nested").join("deep.json"));

    let files = collect_inputs(&[dir.path().to_path_buf()], false);
    assert_eq!(files, [dir.path().join("top.json")]);
}

#[test]
fn hidden_and_ignored_files_are_not_filtered() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.json\n").unwrap();
    touch(&dir.path().join(".hidden.json"));
    touch(&dir.path().join("plain.json"));

    let files = collect_inputs(&[dir.path().to_path_buf()], true);
    assert_eq!(files.len(), 2);
}

#[test]
fn explicit_file_is_kept_regardless_of_extension() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bundle.stix");
    touch(&file);

    assert_eq!(collect_inputs(&[file.clone()], true), [file]);
}

#[test]
fn missing_path_is_kept_for_the_load_step() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent.json");
    assert_eq!(collect_inputs(&[absent.clone()], true), [absent]);
}
