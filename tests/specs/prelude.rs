//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing stixcheck CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the stixcheck binary
pub fn stixcheck_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stixcheck"))
}

/// Create a validate builder. Runs with `--no-cache` unless a cache
/// directory is given.
pub fn validate() -> ValidateBuilder {
    ValidateBuilder::default()
}

// =============================================================================
// ValidateBuilder
// =============================================================================

/// Validation run builder for fluent test assertions
#[derive(Default)]
pub struct ValidateBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    cache_home: Option<PathBuf>,
}

#[allow(dead_code)]
impl ValidateBuilder {
    /// Set fixture directory by name
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed a document on stdin
    pub fn stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.to_string());
        self
    }

    /// Use the external-data cache, rooted under `home`
    pub fn cache_home(mut self, home: &Path) -> Self {
        self.cache_home = Some(home.to_path_buf());
        self
    }

    /// Assert exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Assert exit code 1 (a document failed)
    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    /// Assert a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.run();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        RunAssert { output }
    }

    fn run(self) -> std::process::Output {
        let stdin = self.stdin.clone();
        let mut cmd = self.command();
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        cmd.stdin(Stdio::piped());

        let mut child = cmd.spawn().expect("stixcheck should start");
        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            if let Some(content) = stdin {
                pipe.write_all(content.as_bytes()).unwrap();
            }
        }
        child.wait_with_output().expect("stixcheck should finish")
    }

    /// Build the command without running it
    fn command(self) -> Command {
        let mut cmd = stixcheck_cmd();

        match &self.cache_home {
            Some(home) => {
                cmd.env("HOME", home);
                cmd.env("XDG_CACHE_HOME", home.join(".cache"));
            }
            None => {
                cmd.arg("--no-cache");
            }
        }

        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        cmd.env_remove("STIXCHECK_CONFIG");
        cmd.env_remove("STIXCHECK_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a test fixture
pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture should be readable")
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory with helper methods.
///
/// Creates parent directories automatically and panics on errors.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write stixcheck.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.starts_with("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("stixcheck.toml", &content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Copy a fixture file into the project
    pub fn fixture_file(&self, fixture_name: &str, path: &str) {
        self.file(path, &fixture_text(fixture_name));
    }
}
