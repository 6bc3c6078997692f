// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation options shared by the command line and library callers.
//!
//! Options come from exactly one of two places: parsed command-line
//! arguments ([`ValidationOptions::from_args`]) or explicit values set on an
//! [`OptionsBuilder`]. Both paths end in the same validation step.

use std::path::PathBuf;

use crate::cli::OptionArgs;
use crate::error::{Error, Result};
use crate::output::{Output, Verbosity};
use crate::registry::{CheckRegistry, split_list};

/// Where documents come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Input {
    /// Files and directories named on the command line.
    Files(Vec<PathBuf>),
    /// Standalone run with no paths: read one document from stdin.
    Stdin,
    /// Library use: documents are handed over directly.
    #[default]
    None,
}

/// Collection of validation options.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// STIX version to validate against. `None` means read it from each document.
    pub version: Option<String>,
    pub input: Input,
    /// Recursively descend into input directories.
    pub recursive: bool,
    /// Custom schema directory, validated in addition to the bundled schemas.
    pub schema_dir: Option<PathBuf>,
    pub verbose: bool,
    pub silent: bool,
    /// Best-practice checks to skip.
    pub disabled: Vec<String>,
    /// Best-practice checks to run; non-empty means only these run.
    pub enabled: Vec<String>,
    /// Treat warnings as errors.
    pub strict: bool,
    /// Disallow custom object types.
    pub strict_types: bool,
    /// Disallow custom properties.
    pub strict_properties: bool,
    pub no_cache: bool,
    /// Clear the external-data cache before validating.
    pub refresh_cache: bool,
    /// Clear the external-data cache after validating.
    pub clear_cache: bool,
    /// Require SRO targets to be present in the same bundle.
    pub enforce_refs: bool,
    /// Code table for the resolved version; set once the version is known.
    pub check_codes: Option<&'static CheckRegistry>,
}

impl ValidationOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Build options from parsed command-line arguments.
    pub fn from_args(args: OptionArgs, input: Input) -> Result<Self> {
        Self {
            version: args.version.filter(|v| !v.is_empty()),
            input,
            recursive: args.recursive && !args.no_recursive,
            schema_dir: args.schema_dir,
            verbose: args.verbose,
            silent: args.silent,
            disabled: split_list(&args.disabled),
            enabled: split_list(&args.enabled),
            strict: args.strict,
            strict_types: args.strict_types,
            strict_properties: args.strict_properties,
            no_cache: args.no_cache,
            refresh_cache: args.refresh_cache,
            clear_cache: args.clear_cache,
            enforce_refs: args.enforce_refs,
            check_codes: None,
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.silent && self.verbose {
            return Err(Error::config(
                "Output can either be silent or verbose, but not both.",
            ));
        }
        if let Some(version) = self.version.clone() {
            self.resolve_version(&version);
        }
        Ok(self)
    }

    /// Fix the effective version: select its code table and expand any
    /// numeric codes in the enabled/disabled lists.
    ///
    /// Safe to call more than once; names that are not codes pass through.
    pub fn resolve_version(&mut self, version: &str) {
        let registry = CheckRegistry::for_version(version);
        self.version = Some(version.to_string());
        self.check_codes = Some(registry);
        self.disabled = registry.expand(&self.disabled);
        self.enabled = registry.expand(&self.enabled);
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.silent)
    }

    /// Output sink configured for these options.
    pub fn output(&self) -> Output {
        Output::new(self.verbosity())
    }
}

/// Explicit construction of [`ValidationOptions`].
///
/// Defaults match a library call: no version (read from each document),
/// no input files, recursive walking, every check enabled.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    version: Option<String>,
    files: Option<Vec<PathBuf>>,
    recursive: bool,
    schema_dir: Option<PathBuf>,
    verbose: bool,
    silent: bool,
    disabled: Vec<String>,
    enabled: Vec<String>,
    strict: bool,
    strict_types: bool,
    strict_properties: bool,
    no_cache: bool,
    refresh_cache: bool,
    clear_cache: bool,
    enforce_refs: bool,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            version: None,
            files: None,
            recursive: true,
            schema_dir: None,
            verbose: false,
            silent: false,
            disabled: Vec::new(),
            enabled: Vec::new(),
            strict: false,
            strict_types: false,
            strict_properties: false,
            no_cache: false,
            refresh_cache: false,
            clear_cache: false,
            enforce_refs: false,
        }
    }
}

impl OptionsBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = Some(dir.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Comma-separated codes or names to skip, e.g. `"202,210"`.
    pub fn disable(mut self, list: &str) -> Self {
        self.disabled.extend(split_list(list));
        self
    }

    /// Comma-separated codes or names to run exclusively.
    pub fn enable(mut self, list: &str) -> Self {
        self.enabled.extend(split_list(list));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    pub fn strict_properties(mut self, strict: bool) -> Self {
        self.strict_properties = strict;
        self
    }

    pub fn no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    pub fn refresh_cache(mut self, refresh: bool) -> Self {
        self.refresh_cache = refresh;
        self
    }

    pub fn clear_cache(mut self, clear: bool) -> Self {
        self.clear_cache = clear;
        self
    }

    pub fn enforce_refs(mut self, enforce: bool) -> Self {
        self.enforce_refs = enforce;
        self
    }

    /// Validate and produce the options.
    pub fn build(self) -> Result<ValidationOptions> {
        ValidationOptions {
            version: self.version,
            input: self.files.map(Input::Files).unwrap_or_default(),
            recursive: self.recursive,
            schema_dir: self.schema_dir,
            verbose: self.verbose,
            silent: self.silent,
            disabled: self.disabled,
            enabled: self.enabled,
            strict: self.strict,
            strict_types: self.strict_types,
            strict_properties: self.strict_properties,
            no_cache: self.no_cache,
            refresh_cache: self.refresh_cache,
            clear_cache: self.clear_cache,
            enforce_refs: self.enforce_refs,
            check_codes: None,
        }
        .validated()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
