// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sink and text reporter for validation results.
//!
//! Format:
//! ```text
//! <source>: PASS|FAIL
//!   warning: <message>
//!   <check>: <severity>: <message>
//! ```
//!
//! `--silent` suppresses everything on stdout; `--verbose` adds
//! informational notes. Verbosity is carried by [`Output`] rather than
//! process-wide state.

use std::io::Write;

use termcolor::WriteColor;

use crate::check::Severity;
use crate::color::scheme;
use crate::runner::DocumentResult;

/// How much the run prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Silent wins if both are set; options validation rejects that case.
    pub fn from_flags(verbose: bool, silent: bool) -> Self {
        match (verbose, silent) {
            (_, true) => Verbosity::Silent,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// Output configuration handed to whatever prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Output {
    verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_silent(&self) -> bool {
        self.verbosity == Verbosity::Silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Informational note on stderr, verbose mode only.
    pub fn info(&self, msg: &str) {
        if self.is_verbose() {
            eprintln!("[info] {msg}");
        }
    }

    /// Error on stderr. Shown even in silent mode.
    pub fn error(&self, msg: &str) {
        eprintln!("stixcheck: {msg}");
    }
}

/// Writes per-document results.
pub struct TextReporter<W: WriteColor> {
    out: W,
    output: Output,
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(out: W, output: Output) -> Self {
        Self { out, output }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one document's result. Nothing is written in silent mode.
    pub fn write_result(&mut self, result: &DocumentResult) -> std::io::Result<()> {
        if self.output.is_silent() {
            return Ok(());
        }

        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", result.source)?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        if result.is_valid() {
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "PASS")?;
        } else {
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "FAIL")?;
        }
        self.out.reset()?;
        writeln!(self.out)?;

        if let Some(err) = &result.load_error {
            writeln!(self.out, "  {err}")?;
            return Ok(());
        }

        if self.output.is_verbose()
            && let Some(version) = &result.version
        {
            writeln!(self.out, "  validated against STIX {version}")?;
        }

        for warning in &result.warnings {
            self.out.set_color(&scheme::warn())?;
            write!(self.out, "  warning")?;
            self.out.reset()?;
            writeln!(self.out, ": {warning}")?;
        }

        for finding in &result.findings {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::check_name())?;
            write!(self.out, "{}", finding.check)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
            match finding.severity {
                Severity::Error => self.out.set_color(&scheme::fail())?,
                Severity::Warning => self.out.set_color(&scheme::warn())?,
            }
            write!(self.out, "{}", finding.severity)?;
            self.out.reset()?;
            writeln!(self.out, ": {}", finding.message)?;
        }

        Ok(())
    }

    /// Write the closing summary line.
    pub fn write_summary(&mut self, passed: usize, failed: usize) -> std::io::Result<()> {
        if self.output.is_silent() {
            return Ok(());
        }
        let total = passed + failed;
        if failed == 0 {
            writeln!(
                self.out,
                "{} document{} passed",
                total,
                if total == 1 { "" } else { "s" }
            )
        } else {
            writeln!(
                self.out,
                "{} document{} checked, {} failed",
                total,
                if total == 1 { "" } else { "s" },
                failed
            )
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
