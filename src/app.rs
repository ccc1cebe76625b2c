//! Top-level probe flow
//!
//! The only place that decides what a failure looks like on stdout and which
//! exit code it gets.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::build_info;
use crate::cli::Cli;
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::health::{self, HealthCheckRunner, HealthResult, checks::NfsClientCheck};

/// Exit code used when the report itself cannot be written
const WRITE_FAILURE_EXIT_CODE: i32 = 3;

/// Runs the probe described by `cli`, writing plugin output to stdout
///
/// Returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.version {
        return match writeln!(out, "{}", build_info::version_string()) {
            Ok(()) => 0,
            Err(_) => WRITE_FAILURE_EXIT_CODE,
        };
    }

    debug!(build = %build_info::detailed_info(), "Starting");

    match cli.load_config() {
        Ok(config) => run_check(config, &mut out),
        Err(err) => report_error(&mut out, &err),
    }
}

/// Runs the NFS client check with `config` and writes the result to `out`
pub fn run_check<W: Write>(config: ProbeConfig, out: &mut W) -> i32 {
    info!(profile = %config.profile, command = ?config.command, "Running check");

    let report = HealthCheckRunner::new(NfsClientCheck::new(config)).run();
    debug!(check = %report.name, duration = ?report.duration, "Report ready");

    match &report.result {
        Ok(result) => health::write_report(out, result).unwrap_or(WRITE_FAILURE_EXIT_CODE),
        Err(err) => report_error(out, err),
    }
}

/// Writes a fatal probe error and returns its exit code
///
/// Command failures are printed as diagnostics with any captured output;
/// configuration failures go through the normal UNKNOWN status line.
fn report_error<W: Write>(out: &mut W, err: &ProbeError) -> i32 {
    let written = match err {
        ProbeError::Config(_) => health::write_report(out, &HealthResult::unknown(err.to_string()))
            .map(|_| ()),
        _ => write_diagnostic(out, err),
    };

    match written {
        Ok(()) => err.exit_code(),
        Err(_) => WRITE_FAILURE_EXIT_CODE,
    }
}

fn write_diagnostic<W: Write>(out: &mut W, err: &ProbeError) -> io::Result<()> {
    writeln!(out, "{}", err)?;
    if let Some(output) = err.output() {
        writeln!(out, "Output: {}", output)?;
    }
    out.flush()
}
