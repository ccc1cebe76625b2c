//! Probe errors and their exit codes

use thiserror::Error;

use crate::exec::ExecError;

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Exit code used when the probe itself cannot run its command
pub const EXEC_FAILURE_EXIT_CODE: i32 = 1;

/// Exit code used when the probe cannot even be configured (Nagios UNKNOWN)
pub const CONFIG_FAILURE_EXIT_CODE: i32 = 3;

/// Top-level errors for a probe run
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Configuration could not be loaded or deserialized
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// The diagnostic command could not be run to completion
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl ProbeError {
    /// Process exit code the top-level handler should use for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::Config(_) => CONFIG_FAILURE_EXIT_CODE,
            ProbeError::Exec(_) => EXEC_FAILURE_EXIT_CODE,
        }
    }

    /// Command output captured before the failure, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            ProbeError::Exec(err) => err.output(),
            ProbeError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_unknown() {
        let err = ProbeError::from(config::ConfigError::Message("bad".into()));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exec_errors_exit_one() {
        let err = ProbeError::from(ExecError::TimedOut {
            command: "nfsstat -c -l".into(),
            timeout: std::time::Duration::from_secs(1),
        });
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("nfsstat -c -l"));
    }
}
