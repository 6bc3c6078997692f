// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! The same option flags serve two entry points: the `stixcheck` binary
//! (which also takes input paths and a config file) and library callers
//! that pass argument tokens and hand documents over directly.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::FileConfig;
use crate::error::{Error, Result};
use crate::help;
use crate::options::{Input, ValidationOptions};
use crate::registry::DEFAULT_VERSION;

/// Validate STIX documents against best-practice checks
#[derive(Parser, Debug)]
#[command(name = "stixcheck")]
#[command(about, long_about = None, disable_version_flag = true)]
#[command(after_help = help::codes_epilog())]
pub struct StandaloneCli {
    /// STIX files or directories of STIX files to validate. If none given,
    /// stdin is read
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "STIXCHECK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,
}

impl StandaloneCli {
    /// Merge config-file defaults under the flags and build options.
    pub fn into_options(self, config: Option<&FileConfig>) -> Result<ValidationOptions> {
        let mut args = self.options;
        if let Some(config) = config {
            args.apply_config(config);
        }
        let input = if self.files.is_empty() {
            Input::Stdin
        } else {
            Input::Files(self.files)
        };
        ValidationOptions::from_args(args.with_default_version(), input)
    }
}

/// Option flags without input paths, for library callers.
#[derive(Parser, Debug)]
#[command(name = "stixcheck", disable_version_flag = true)]
#[command(after_help = help::codes_epilog())]
struct LibraryCli {
    #[command(flatten)]
    options: OptionArgs,
}

/// Validation flags shared by both entry points.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Recursively descend into input directories
    #[arg(short = 'r', long, action = ArgAction::SetTrue, default_value_t = true)]
    pub recursive: bool,

    /// Only validate files directly inside input directories
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Custom schema directory, validated in addition to the bundled schemas
    #[arg(short = 's', long = "schemas", value_name = "DIR")]
    pub schema_dir: Option<PathBuf>,

    /// STIX specification version to validate against (e.g. "2.0")
    #[arg(long, value_name = "VER")]
    pub version: Option<String>,

    /// Print informational notes and more verbose error messages
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Silence all output to stdout
    #[arg(short = 'q', long)]
    pub silent: bool,

    /// Comma-separated best-practice checks to skip (e.g. 202,210)
    #[arg(
        short = 'd',
        long = "disable",
        visible_alias = "ignore",
        value_name = "LIST",
        default_value = ""
    )]
    pub disabled: String,

    /// Comma-separated best-practice checks to run; without --disable no
    /// others run (e.g. 218)
    #[arg(
        short = 'e',
        long = "enable",
        visible_alias = "select",
        value_name = "LIST",
        default_value = ""
    )]
    pub enabled: String,

    /// Treat warnings as errors and fail validation if any are found
    #[arg(long)]
    pub strict: bool,

    /// Ensure no custom object types are used, only those defined in the
    /// STIX specification
    #[arg(long)]
    pub strict_types: bool,

    /// Ensure no custom properties are used, only those defined in the STIX
    /// specification
    #[arg(long)]
    pub strict_properties: bool,

    /// Disable caching of external source values
    #[arg(long)]
    pub no_cache: bool,

    /// Clear the cache of external source values, then download them again
    /// during validation
    #[arg(long)]
    pub refresh_cache: bool,

    /// Clear the cache of external source values after validation
    #[arg(long)]
    pub clear_cache: bool,

    /// Ensure all SDOs referenced by SROs are contained in the same bundle
    #[arg(long)]
    pub enforce_refs: bool,
}

impl OptionArgs {
    /// Fill in the default version when none was given.
    pub fn with_default_version(mut self) -> Self {
        if self.version.as_deref().is_none_or(str::is_empty) {
            self.version = Some(DEFAULT_VERSION.to_string());
        }
        self
    }

    /// Layer config-file values under flags given on the command line.
    ///
    /// Booleans are OR-ed; values only fill flags left unset.
    pub fn apply_config(&mut self, config: &FileConfig) {
        let v = &config.validate;
        if self.version.is_none() {
            self.version = v.version.clone();
        }
        if self.schema_dir.is_none() {
            self.schema_dir = v.schemas.clone();
        }
        if self.disabled.is_empty() {
            self.disabled = v.disable.joined();
        }
        if self.enabled.is_empty() {
            self.enabled = v.enable.joined();
        }
        self.strict |= v.strict;
        self.strict_types |= v.strict_types;
        self.strict_properties |= v.strict_properties;
        self.enforce_refs |= v.enforce_refs;
        self.no_cache |= v.no_cache;
    }
}

/// Parse option tokens (without the program name) into validation options.
///
/// `standalone` means the tokens come from the `stixcheck` executable and
/// may include input paths. Library callers pass `false`: paths are not
/// accepted and the options carry no input.
pub fn parse<I, T>(tokens: I, standalone: bool) -> Result<ValidationOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("stixcheck"))
        .chain(tokens.into_iter().map(Into::into));

    if standalone {
        let cli =
            StandaloneCli::try_parse_from(argv).map_err(|e| Error::Argument(e.to_string()))?;
        cli.into_options(None)
    } else {
        let cli = LibraryCli::try_parse_from(argv).map_err(|e| Error::Argument(e.to_string()))?;
        ValidationOptions::from_args(cli.options.with_default_version(), Input::None)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
