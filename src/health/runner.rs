//! Runner that executes a check and times it

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::check::{HealthResult, SystemCheck};
use crate::error::Result;

/// Outcome of running a check through the runner
#[derive(Debug)]
pub struct HealthCheckReport {
    /// Name of the check that ran
    pub name: String,
    /// What the check produced
    pub result: Result<HealthResult>,
    /// How long the check took
    pub duration: Duration,
}

impl HealthCheckReport {
    /// Returns true if the check produced a result with OK or WARNING status
    pub fn is_healthy(&self) -> bool {
        matches!(&self.result, Ok(r) if r.status.is_ok())
    }

    /// Returns the process exit code for this report
    pub fn exit_code(&self) -> i32 {
        match &self.result {
            Ok(result) => result.exit_code(),
            Err(err) => err.exit_code(),
        }
    }
}

/// Runs a single check and records its duration
pub struct HealthCheckRunner {
    check: Box<dyn SystemCheck>,
}

impl HealthCheckRunner {
    /// Creates a runner for `check`
    pub fn new<C: SystemCheck + 'static>(check: C) -> Self {
        Self {
            check: Box::new(check),
        }
    }

    /// Runs the check once
    pub fn run(self) -> HealthCheckReport {
        let name = self.check.name().to_string();
        if let Some(description) = self.check.description() {
            debug!(check = %name, "{}", description);
        }

        let start = Instant::now();
        let result = self.check.check();
        let duration = start.elapsed();

        match &result {
            Ok(r) => debug!(check = %name, status = %r.status, ?duration, "Check finished"),
            Err(e) => warn!(check = %name, error = %e, ?duration, "Check failed"),
        }

        HealthCheckReport {
            name,
            result,
            duration,
        }
    }
}
