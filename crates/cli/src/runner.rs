// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-document validation driver with error isolation.
//!
//! Loads a document, reconciles its `spec_version` with the options, then
//! runs every selected check through its guard. A panicking check becomes
//! an error finding so the remaining checks still run.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::check::{Check, CheckContext, CheckSelection, Finding, Severity, guarded};
use crate::http_cache::HttpClient;
use crate::options::ValidationOptions;
use crate::reconcile::{VersionWarning, reconcile};

/// Outcome of validating one document.
#[derive(Debug, Default)]
pub struct DocumentResult {
    /// File path, or `<stdin>`.
    pub source: String,
    /// Version the document was validated against.
    pub version: Option<String>,
    /// `spec_version` rewrites made during reconciliation.
    pub warnings: Vec<VersionWarning>,
    /// Check findings, after escalation.
    pub findings: Vec<Finding>,
    /// Set when the document could not be read or parsed.
    pub load_error: Option<String>,
}

impl DocumentResult {
    fn load_failed(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            load_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Valid when the document loaded and no finding is an error.
    pub fn is_valid(&self) -> bool {
        self.load_error.is_none()
            && self
                .findings
                .iter()
                .all(|f| f.severity != Severity::Error)
    }
}

/// Runs registered checks over documents.
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
    http: HttpClient,
}

impl Validator {
    pub fn new(http: HttpClient) -> Self {
        Self {
            checks: Vec::new(),
            http,
        }
    }

    /// Register a check. Checks run in registration order.
    pub fn with_check(mut self, check: Box<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Give back the client, so its cache can be persisted.
    pub fn into_http(self) -> HttpClient {
        self.http
    }

    /// Validate a parsed document.
    ///
    /// `options` is cloned first: reconciliation fixes the version for this
    /// document only.
    pub fn validate_value(
        &self,
        mut document: Value,
        source: &str,
        options: &ValidationOptions,
    ) -> DocumentResult {
        let mut options = options.clone();
        let warnings = reconcile(&mut document, &mut options);
        tracing::debug!("{source}: validating against {:?}", options.version);

        let ctx = CheckContext {
            options: &options,
            http: &self.http,
        };
        let selection = CheckSelection::new(&options);

        let mut findings = Vec::new();
        for check in self.checks() {
            if !selection.should_run(check.name()) {
                tracing::debug!("{source}: skipping disabled check {}", check.name());
                continue;
            }
            let run = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                guarded(check, &document, &ctx).collect::<Vec<_>>()
            }));
            match run {
                Ok(found) => findings.extend(found),
                Err(_) => findings.push(Finding::error(
                    check.name(),
                    "internal error: check panicked",
                )),
            }
        }

        let findings = findings
            .into_iter()
            .map(|f| f.escalate(&options))
            .collect();

        DocumentResult {
            source: source.to_string(),
            version: options.version.clone(),
            warnings,
            findings,
            load_error: None,
        }
    }

    /// Read and validate a JSON file.
    pub fn validate_file(&self, path: &Path, options: &ValidationOptions) -> DocumentResult {
        let source = path.display().to_string();
        match std::fs::File::open(path) {
            Ok(file) => self.validate_reader(std::io::BufReader::new(file), &source, options),
            Err(e) => DocumentResult::load_failed(source, format!("cannot read file: {e}")),
        }
    }

    /// Parse JSON from `reader` and validate it.
    pub fn validate_reader<R: Read>(
        &self,
        reader: R,
        source: &str,
        options: &ValidationOptions,
    ) -> DocumentResult {
        match serde_json::from_reader::<_, Value>(reader) {
            Ok(document) => self.validate_value(document, source, options),
            Err(e) => DocumentResult::load_failed(source, format!("invalid JSON: {e}")),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
