//! Health check system for the NFS client probe
//!
//! The probe is a linear pipeline: run the diagnostic command, parse its
//! output into a [`HealthResult`], format that result as plugin output.
//!
//! # Example
//!
//! ```no_run
//! use check_nfs_client::config::ProbeConfig;
//! use check_nfs_client::health::{HealthCheckRunner, checks::NfsClientCheck};
//!
//! let report = HealthCheckRunner::new(NfsClientCheck::new(ProbeConfig::default())).run();
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod parser;
pub mod reporter;
pub mod runner;

pub use check::{HealthResult, StatusLevel, SystemCheck};
pub use parser::parse_nfsstat_output;
pub use reporter::{format_report, write_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};
