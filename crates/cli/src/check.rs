// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check dispatch types.
//!
//! Individual best-practice checks live outside this crate and plug in
//! through the [`Check`] trait. A check declares the document shape it
//! needs; [`guarded`] only runs it when that shape is present.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::http_cache::HttpClient;
use crate::options::ValidationOptions;
use crate::registry::CheckRegistry;

/// Context passed to every check.
pub struct CheckContext<'a> {
    /// Options after version reconciliation for this document.
    pub options: &'a ValidationOptions,
    /// Cache-backed client for checks that consult external reference lists.
    pub http: &'a HttpClient,
}

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Which strictness flag escalates a check's warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    /// Escalated by `--strict` only.
    #[default]
    General,
    /// Custom object types; also escalated by `--strict-types`.
    Type,
    /// Custom properties; also escalated by `--strict-properties`.
    Property,
}

/// Document shape a check needs before it can say anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Requirement {
    #[default]
    Any,
    /// An `observed-data` object carrying a cyber observable `objects` map.
    CyberObservables,
}

impl Requirement {
    pub fn holds(self, document: &Value) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::CyberObservables => has_cyber_observable_data(document),
        }
    }
}

/// True only for `observed-data` whose `objects` is a JSON object.
pub fn has_cyber_observable_data(document: &Value) -> bool {
    document.get("type").and_then(Value::as_str) == Some("observed-data")
        && document.get("objects").is_some_and(Value::is_object)
}

/// A single result produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Canonical name of the check that produced this finding.
    pub check: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip)]
    pub category: Category,
}

impl Finding {
    pub fn warning(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            severity: Severity::Warning,
            message: message.into(),
            category: Category::General,
        }
    }

    pub fn error(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(check, message)
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Apply the strictness flags: a warning becomes an error when `strict`
    /// is set, or when the flag for its category is set.
    pub fn escalate(mut self, options: &ValidationOptions) -> Self {
        let escalate = options.strict
            || match self.category {
                Category::General => false,
                Category::Type => options.strict_types,
                Category::Property => options.strict_properties,
            };
        if escalate {
            self.severity = Severity::Error;
        }
        self
    }
}

/// The Check trait defines a single best-practice check.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Check>`.
pub trait Check: Send + Sync {
    /// Canonical check name as listed in the code tables.
    fn name(&self) -> &'static str;

    fn category(&self) -> Category {
        Category::General
    }

    fn requirement(&self) -> Requirement {
        Requirement::Any
    }

    /// Inspect one document.
    fn run(&self, document: &Value, ctx: &CheckContext) -> Vec<Finding>;
}

/// Run `check` lazily, yielding nothing when its requirement does not hold.
///
/// Findings left in [`Category::General`] take the check's own category.
/// Each call starts over, so the sequence can be restarted by calling again.
pub fn guarded<'a>(
    check: &'a dyn Check,
    document: &'a Value,
    ctx: &'a CheckContext<'a>,
) -> impl Iterator<Item = Finding> + 'a {
    std::iter::once(check)
        .filter(move |c| c.requirement().holds(document))
        .flat_map(move |c| {
            c.run(document, ctx).into_iter().map(move |f| {
                if f.category == Category::General {
                    f.with_category(c.category())
                } else {
                    f
                }
            })
        })
}

/// Enable/disable filtering over canonical check names.
#[derive(Debug, Clone)]
pub struct CheckSelection<'a> {
    enabled: &'a [String],
    disabled: &'a [String],
    registry: &'static CheckRegistry,
}

impl<'a> CheckSelection<'a> {
    pub fn new(options: &'a ValidationOptions) -> Self {
        Self {
            enabled: &options.enabled,
            disabled: &options.disabled,
            registry: options
                .check_codes
                .unwrap_or_else(CheckRegistry::default_registry),
        }
    }

    /// Whether a check runs.
    ///
    /// Enabled entries always run. With a disabled list, everything else
    /// runs unless disabled; without one, a non-empty enabled list is an
    /// allow-list. Listing an umbrella entry such as `all-vocabs` covers
    /// every check under it.
    pub fn should_run(&self, name: &str) -> bool {
        if self.listed(self.enabled, name) {
            return true;
        }
        if self.disabled.is_empty() {
            self.enabled.is_empty()
        } else {
            !self.listed(self.disabled, name)
        }
    }

    fn listed(&self, list: &[String], name: &str) -> bool {
        list.iter().any(|entry| entry == name)
            || self
                .registry
                .groups_of(name)
                .iter()
                .any(|group| list.iter().any(|entry| entry == group))
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
