//! Command runner
//!
//! Runs the diagnostic command once and captures its combined output. The
//! child is awaited on a current-thread runtime so the timeout can kill it.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Exit status reported for a child terminated by a signal
pub const SIGNALED_EXIT_STATUS: i32 = -1;

/// Captured result of one command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Numeric exit status of the child
    pub exit_status: i32,
    /// Standard output followed by standard error
    pub output: String,
}

impl ExecutionResult {
    /// Returns true if the command exited with status 0
    pub fn is_success(&self) -> bool {
        self.exit_status == 0
    }
}

/// Reasons the runner could not produce an `ExecutionResult`
#[derive(Error, Debug)]
pub enum ExecError {
    /// No program was given
    #[error("no command configured")]
    EmptyCommand,

    /// The process could not be started or awaited
    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited non-zero and failure was not allowed
    #[error("command failed: {command} (exit status {exit_status})")]
    Failed {
        command: String,
        exit_status: i32,
        output: String,
    },

    /// The async runtime driving the child could not be created
    #[error("failed to create process runtime for {command}: {source}")]
    Runtime {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process outlived its timeout and was killed
    #[error("command timed out after {timeout:?}: {command}")]
    TimedOut { command: String, timeout: Duration },
}

impl ExecError {
    /// Output captured before the failure, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecError::Failed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Runs `command` (program first) and waits for it to finish
///
/// A non-zero exit is an error unless `allow_fail` is set, in which case the
/// status is returned in the result.
pub fn execute(
    command: &[String],
    timeout: Duration,
    allow_fail: bool,
) -> Result<ExecutionResult, ExecError> {
    let (program, args) = command.split_first().ok_or(ExecError::EmptyCommand)?;
    let command_line = command.join(" ");
    debug!(command = %command_line, ?timeout, "Executing");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| ExecError::Runtime {
            command: command_line.clone(),
            source,
        })?;

    let start = Instant::now();
    let output = runtime.block_on(async {
        let child = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output();
        tokio::time::timeout(timeout, child).await
    });
    let duration = start.elapsed();
    debug!(
        "Executing {} took {:.5}s",
        command_line,
        duration.as_secs_f64()
    );

    let output = match output {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(ExecError::Spawn {
                command: command_line,
                source,
            });
        }
        Err(_) => {
            return Err(ExecError::TimedOut {
                command: command_line,
                timeout,
            });
        }
    };

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    let result = ExecutionResult {
        exit_status: output.status.code().unwrap_or(SIGNALED_EXIT_STATUS),
        output: combined,
    };

    if !result.is_success() && !allow_fail {
        return Err(ExecError::Failed {
            command: command_line,
            exit_status: result.exit_status,
            output: result.output,
        });
    }

    Ok(result)
}
