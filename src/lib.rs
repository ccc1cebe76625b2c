//! check_nfs_client
//!
//! Nagios plugin that runs `nfsstat -c -l`, turns the client counters into
//! performance data and exits with the plugin status code.

/// Top-level probe flow and exit handling
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Command-line flags
pub mod cli;

/// Profile-based probe configuration
pub mod config;

/// Probe errors and their exit codes
pub mod error;

/// Diagnostic command execution
pub mod exec;

/// Checks, parsing and plugin output
pub mod health;

/// Tracing subscriber setup
pub mod logging;
