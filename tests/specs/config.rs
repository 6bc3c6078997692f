//! Config file specs.

use crate::prelude::*;

/// > stixcheck.toml in the working directory supplies defaults
#[test]
fn config_in_working_directory_applies() {
    validate()
        .on("config")
        .args(&["bundle.json"])
        .passes()
        .stdout_has("Defaulting to spec_version 2.0");
}

/// > Flags win over config values
#[test]
fn flags_override_config() {
    validate()
        .on("config")
        .args(&["--version", "2.1", "bundle.json"])
        .passes()
        .stdout_has("Defaulting to spec_version 2.1");
}

/// > -C points at a config file elsewhere
#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[validate]\nversion = \"2.0\"\n");
    temp.fixture_file("bundle-2.0.json", "bundle.json");

    validate()
        .pwd(temp.path())
        .args(&["-C", "custom.toml", "bundle.json"])
        .passes()
        .stdout_has("Defaulting to spec_version 2.0");
}

/// > STIXCHECK_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file("elsewhere.toml", "version = 1\n[validate]\nversion = \"2.0\"\n");
    temp.fixture_file("bundle-2.0.json", "bundle.json");
    let config_path = temp.path().join("elsewhere.toml");

    validate()
        .pwd(temp.path())
        .args(&["bundle.json"])
        .env("STIXCHECK_CONFIG", config_path.to_str().unwrap())
        .passes()
        .stdout_has("Defaulting to spec_version 2.0");
}

/// > A named config file that does not exist is a configuration error
#[test]
fn missing_explicit_config_fails() {
    validate()
        .on("valid")
        .args(&["-C", "missing.toml", "indicator.json"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unknown keys are warnings, not errors
#[test]
fn unknown_config_key_warns() {
    let temp = Project::empty();
    temp.config("colour = \"always\"\n[validate]\nstrictest = true\n");
    temp.fixture_file("valid/indicator.json", "indicator.json");

    validate()
        .pwd(temp.path())
        .args(&["indicator.json"])
        .passes()
        .stderr_has("unrecognized field `colour`")
        .stderr_has("unrecognized field `validate.strictest`");
}

/// > A valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = Project::empty();
    temp.config("[validate]\nstrict = true\n");
    temp.fixture_file("valid/indicator.json", "indicator.json");

    validate()
        .pwd(temp.path())
        .args(&["indicator.json"])
        .passes()
        .stderr_lacks("warning");
}

/// > Unsupported config versions are rejected
#[test]
fn unsupported_config_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    temp.fixture_file("valid/indicator.json", "indicator.json");

    validate()
        .pwd(temp.path())
        .args(&["indicator.json"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > Malformed TOML is a configuration error
#[test]
fn malformed_config_fails() {
    let temp = Project::empty();
    temp.file("stixcheck.toml", "version = = 1\n");
    temp.fixture_file("valid/indicator.json", "indicator.json");

    validate()
        .pwd(temp.path())
        .args(&["indicator.json"])
        .exits(2);
}
