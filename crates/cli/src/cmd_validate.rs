// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validate command implementation.

use std::io::Write;

use termcolor::StandardStream;

use stixcheck::color::resolve_color;
use stixcheck::discovery;
use stixcheck::error::{Error, ExitCode};
use stixcheck::http_cache::{HttpClient, ResponseCache};
use stixcheck::options::{Input, ValidationOptions};
use stixcheck::output::{Output, TextReporter};
use stixcheck::runner::{DocumentResult, Validator};

/// Source name used for a document read from stdin.
const STDIN_SOURCE: &str = "<stdin>";

/// Validate every input and report the results.
pub fn run(options: &ValidationOptions) -> anyhow::Result<ExitCode> {
    let output = options.output();

    if let Some(dir) = &options.schema_dir
        && !dir.is_dir()
    {
        return Err(Error::Config {
            message: format!("schema directory not found: {}", dir.display()),
            path: Some(dir.clone()),
        }
        .into());
    }

    let validator = Validator::new(open_http(options, output));

    let results = match &options.input {
        Input::Files(paths) => {
            let files = discovery::collect_inputs(paths, options.recursive);
            tracing::debug!("validating {} file(s)", files.len());
            files
                .iter()
                .map(|path| validator.validate_file(path, options))
                .collect()
        }
        Input::Stdin => {
            let stdin = std::io::stdin();
            vec![validator.validate_reader(stdin.lock(), STDIN_SOURCE, options)]
        }
        Input::None => Vec::new(),
    };

    let failed = report(&results, output)?;

    close_http(validator.into_http(), options, output);

    if failed > 0 {
        Ok(ExitCode::ValidationFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Client for checks that consult external sources. A cache that cannot be
/// set up is reported and skipped.
fn open_http(options: &ValidationOptions, output: Output) -> HttpClient {
    if options.no_cache {
        return HttpClient::uncached();
    }
    match ResponseCache::init(options.refresh_cache) {
        Ok(cache) => {
            output.info(&format!("using cache at {}", cache.path().display()));
            HttpClient::with_cache(cache)
        }
        Err(e) => {
            output.error(&format!("warning: external-data cache disabled: {e}"));
            HttpClient::uncached()
        }
    }
}

/// Persist the cache, clearing it first when asked.
fn close_http(http: HttpClient, options: &ValidationOptions, output: Output) {
    let Some(mut cache) = http.into_cache() else {
        return;
    };
    if options.clear_cache {
        let removed = cache.clear();
        output.info(&format!("cleared {removed} cached response(s)"));
    }
    if let Err(e) = cache.persist() {
        output.error(&format!("warning: failed to save cache: {e}"));
    }
}

/// Print every result and the summary. Returns the number of failures.
fn report(results: &[DocumentResult], output: Output) -> anyhow::Result<usize> {
    let mut reporter = TextReporter::new(StandardStream::stdout(resolve_color()), output);
    let mut failed = 0;
    for result in results {
        reporter.write_result(result)?;
        if !result.is_valid() {
            failed += 1;
        }
    }
    if !results.is_empty() {
        reporter.write_summary(results.len() - failed, failed)?;
    }
    reporter.into_inner().flush()?;
    Ok(failed)
}
