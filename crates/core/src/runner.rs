//! Timed execution of a single command

use std::process::ExitStatus;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::{
    command::{ShellCommand, Stage},
    error::{Error, Result},
};

/// Outcome of one child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code of the child, `128 + signal` if it was killed on Unix
    pub status: i32,
    pub elapsed: Duration,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Launches the commands of a dispatch.
///
/// A non-zero exit is a normal [`ExecutionResult`]; only failing to start
/// the process at all is an error.
pub trait Executor {
    fn execute(
        &self,
        command: &ShellCommand,
        stage: Stage,
        timed: bool,
    ) -> Result<ExecutionResult>;
}

/// Runs commands as real child processes, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ProcessRunner {
    fn execute(
        &self,
        command: &ShellCommand,
        stage: Stage,
        timed: bool,
    ) -> Result<ExecutionResult> {
        let line = command.to_shell_command();
        if timed {
            println!("{}\t{}\n", stage.label(), line);
        }
        debug!("Starting {} stage: {:?}", stage, command);

        let start = Instant::now();
        let status = command
            .to_command()
            .status()
            .map_err(|source| Error::LaunchError {
                command: line.clone(),
                source,
            })?;
        let elapsed = start.elapsed();

        if timed {
            println!(
                "\n{}: {} seconds",
                stage.timing_label(),
                elapsed.as_secs_f64()
            );
        } else {
            println!();
        }

        let status = exit_code(status);
        debug!("{} stage exited with {} after {:?}", stage, status, elapsed);
        Ok(ExecutionResult { status, elapsed })
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
