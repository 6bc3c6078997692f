// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `NO_COLOR` set → no color
//! 2. `COLOR` set → color
//! 3. otherwise color only when stdout is a TTY and `CI` is unset
//!
//! Help text is styled with raw ANSI codes (it is built as a string before
//! clap prints it); results use termcolor `ColorSpec`s via [`scheme`].

use std::io::IsTerminal;
use std::sync::OnceLock;

use termcolor::ColorChoice;

/// ANSI 256-color codes for help text.
pub mod codes {
    /// Table headings: steel blue
    pub const HEADER: u8 = 74;
    /// Check codes and names: light grey
    pub const LITERAL: u8 = 250;
}

/// Whether help text should be colored. Cached for the process.
pub fn should_colorize() -> bool {
    static SHOULD_COLORIZE: OnceLock<bool> = OnceLock::new();
    *SHOULD_COLORIZE.get_or_init(|| resolve_color() != ColorChoice::Never)
}

/// Wrap `text` in a 256-color escape. Callers check [`should_colorize`].
fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Resolve color choice for result output.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` with any value
/// (including empty) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for validation results.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold check name.
    pub fn check_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red "FAIL" and error severity.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green "PASS".
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Yellow warnings.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Cyan document source.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
