//! Output behavior specs.

use crate::prelude::*;

/// > --silent prints nothing on stdout
#[test]
fn silent_prints_nothing() {
    validate()
        .on("valid")
        .args(&["-q", "indicator.json"])
        .passes()
        .stdout_eq("");
}

/// > --silent still reports failure through the exit code
#[test]
fn silent_failure_keeps_exit_code() {
    validate()
        .on("mixed")
        .args(&["--silent", "truncated.json"])
        .fails()
        .stdout_eq("");
}

/// > --verbose notes the version each document was validated against
#[test]
fn verbose_notes_version() {
    validate()
        .on("valid")
        .args(&["-v", "indicator.json"])
        .passes()
        .stdout_eq("indicator.json: PASS\n  validated against STIX 2.1\n1 document passed\n");
}

/// > Output piped to a file carries no ANSI codes
#[test]
fn piped_output_has_no_color() {
    validate()
        .on("valid")
        .args(&["indicator.json"])
        .passes()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces colored results
#[test]
fn color_env_forces_color() {
    validate()
        .on("valid")
        .args(&["indicator.json"])
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

/// > NO_COLOR wins over COLOR
#[test]
fn no_color_wins() {
    validate()
        .on("valid")
        .args(&["indicator.json"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}
