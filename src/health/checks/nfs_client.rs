//! NFS client statistics check

use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::exec;
use crate::health::check::{HealthResult, SystemCheck};
use crate::health::parser::parse_nfsstat_output;

/// Runs nfsstat and turns its client counters into perfdata
pub struct NfsClientCheck {
    config: ProbeConfig,
}

impl NfsClientCheck {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Default for NfsClientCheck {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl SystemCheck for NfsClientCheck {
    fn name(&self) -> &'static str {
        "NFS Client"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Collects NFS client operation counters from nfsstat")
    }

    fn check(&self) -> Result<HealthResult> {
        let execution = exec::execute(
            &self.config.command,
            self.config.timeout(),
            self.config.allow_fail,
        )?;
        debug!(exit_status = execution.exit_status, "nfsstat finished");

        Ok(parse_nfsstat_output(&execution.output))
    }
}
