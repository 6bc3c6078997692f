// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec-version reconciliation.
//!
//! Aligns a document's declared `spec_version` with the version requested
//! for validation, or derives the version from the document when none was
//! requested. Probing is best-effort: an unexpected document shape ends it
//! quietly and never fails the run.

use std::fmt;

use serde_json::Value;

use crate::options::ValidationOptions;
use crate::registry::LEGACY_VERSION;

/// A `spec_version` that was rewritten to match the requested version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionWarning {
    /// Identifier of the rewritten object.
    pub id: String,
    /// Version the object now declares.
    pub version: String,
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: spec_version mismatch with command-line option. Defaulting to spec_version {}",
            self.id, self.version
        )
    }
}

/// Reconcile `document` with `options`.
///
/// With a requested version, a bundle's own `spec_version` and those of its
/// member objects are overwritten where they differ, one warning per
/// rewrite. Without one, the version is taken from the document (a member's
/// `spec_version` wins over the bundle's), falling back to 2.0. Either way
/// the options end up with the matching code table and expanded check
/// lists.
pub fn reconcile(document: &mut Value, options: &mut ValidationOptions) -> Vec<VersionWarning> {
    let mut warnings = Vec::new();

    let version = match options.version.clone() {
        Some(version) => {
            if align_bundle(document, &version, &mut warnings).is_none() {
                tracing::debug!("spec_version reconciliation stopped on unexpected shape");
            }
            version
        }
        None => declared_version(document).unwrap_or_else(|| LEGACY_VERSION.to_string()),
    };

    options.resolve_version(&version);
    warnings
}

/// Rewrite mismatched `spec_version`s in a bundle. `None` marks a shape
/// that stopped probing; work done before that point stands.
fn align_bundle(
    document: &mut Value,
    version: &str,
    warnings: &mut Vec<VersionWarning>,
) -> Option<()> {
    let bundle = document.as_object_mut()?;
    if bundle.get("type")?.as_str()? != "bundle" {
        return Some(());
    }

    if bundle.contains_key("spec_version") {
        align_object(bundle, version, warnings)?;
    }

    if let Some(objects) = bundle.get_mut("objects") {
        for obj in objects.as_array_mut()? {
            let obj = obj.as_object_mut()?;
            if obj.contains_key("spec_version") {
                align_object(obj, version, warnings)?;
            }
        }
    }
    Some(())
}

fn align_object(
    obj: &mut serde_json::Map<String, Value>,
    version: &str,
    warnings: &mut Vec<VersionWarning>,
) -> Option<()> {
    if obj.get("spec_version").and_then(Value::as_str) == Some(version) {
        return Some(());
    }
    obj.insert("spec_version".to_string(), Value::from(version));
    let id = obj.get("id")?.as_str()?.to_string();
    warnings.push(VersionWarning {
        id,
        version: version.to_string(),
    });
    Some(())
}

/// Version declared by the document: the top-level `spec_version`, then
/// each bundle member's in order, the last one found winning. An empty
/// string counts as no version.
fn declared_version(document: &Value) -> Option<String> {
    let mut version = document
        .get("spec_version")
        .and_then(Value::as_str)
        .map(String::from);

    if document.get("type").and_then(Value::as_str) == Some("bundle")
        && let Some(objects) = document.get("objects").and_then(Value::as_array)
    {
        for member in objects {
            if let Some(v) = member.get("spec_version").and_then(Value::as_str) {
                version = Some(v.to_string());
            }
        }
    }
    version.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
