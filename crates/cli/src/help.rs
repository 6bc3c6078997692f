// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help epilog listing the best-practice check codes.
//!
//! The table is generated from the default code registry so `--help`
//! never drifts from the codes `--enable`/`--disable` accept. Colors are
//! applied here, since clap passes the epilog through unchanged.

use crate::color;
use crate::registry::{CheckCode, CheckRegistry};

/// Column width the epilog wraps to.
const WRAP_WIDTH: usize = 80;

/// Width of the code column, including padding.
const CODE_WIDTH: usize = 6;

/// Width of the name column, including padding.
const NAME_WIDTH: usize = 34;

/// Build the check-code table shown after the option list.
pub fn codes_epilog() -> String {
    render_codes(CheckRegistry::default_registry(), color::should_colorize())
}

/// Render the code table for `registry`.
fn render_codes(registry: &CheckRegistry, colorize: bool) -> String {
    let title = format!(
        "Best-practice check codes (STIX {}):",
        registry.version()
    );
    let mut out = if colorize {
        color::header(&title)
    } else {
        title
    };
    out.push('\n');

    for entry in registry.entries() {
        out.push_str(&render_entry(entry, colorize));
    }

    out.push_str(
        "\nUse a code or name with --enable or --disable, e.g. \"--disable 202,210\".\n\
         Umbrella codes (1, 2, 210, 270) cover every check in their group.",
    );
    out
}

fn render_entry(entry: &CheckCode, colorize: bool) -> String {
    let indent = 2 + CODE_WIDTH + NAME_WIDTH;
    let code = format!("{:<CODE_WIDTH$}", entry.code);
    let name = format!("{:<NAME_WIDTH$}", entry.name);
    let (code, name) = if colorize {
        (color::literal(&code), color::literal(&name))
    } else {
        (code, name)
    };

    let mut line = format!("  {code}{name}");
    // Names longer than the column push the summary to its own line.
    let summary_lines = wrap(entry.summary, WRAP_WIDTH.saturating_sub(indent));
    let mut first = entry.name.len() < NAME_WIDTH;
    for (i, part) in summary_lines.iter().enumerate() {
        if i == 0 && first {
            line.push_str(part);
        } else {
            line.push('\n');
            line.push_str(&" ".repeat(indent));
            line.push_str(part);
        }
        first = false;
    }
    line.push('\n');
    line
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
