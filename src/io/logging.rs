//! Diagnostic logging setup for the command-line tool

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// How chatty the diagnostic output on stderr should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only errors
    Quiet,
    /// Warnings and errors, unless `RUST_LOG` says otherwise
    #[default]
    Normal,
    /// Cache construction and per-stage timings
    Verbose,
}

impl Verbosity {
    /// Pick the verbosity from the two mutually exclusive CLI flags
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Filter directive for this verbosity
    ///
    /// `RUST_LOG` wins over the default, explicit flags win over `RUST_LOG`.
    pub fn filter(self) -> EnvFilter {
        match self {
            Self::Quiet => EnvFilter::new(QUIET_LOG_FILTER),
            Self::Verbose => EnvFilter::new(VERBOSE_LOG_FILTER),
            Self::Normal => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

/// Install the stderr subscriber
///
/// Returns `false` if a global subscriber was already installed, which is harmless
/// (tests and embedding applications may install their own).
pub fn init(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(verbosity.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
