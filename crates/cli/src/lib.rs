pub mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod help;
pub mod http_cache;
pub mod options;
pub mod output;
pub mod reconcile;
pub mod registry;
pub mod runner;

pub use check::{Category, Check, CheckContext, Finding, Requirement, Severity};
pub use cli::{OptionArgs, StandaloneCli, parse};
pub use error::{Error, ExitCode, Result};
pub use http_cache::{CacheError, HttpClient, ResponseCache};
pub use options::{Input, OptionsBuilder, ValidationOptions};
pub use output::{Output, TextReporter, Verbosity};
pub use reconcile::{VersionWarning, reconcile};
pub use registry::{CheckRegistry, SpecVersion};
pub use runner::{DocumentResult, Validator};
