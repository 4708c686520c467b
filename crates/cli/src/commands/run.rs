use anyhow::{Context, Result};
use std::env;
use tracing::debug;

use polyrun_core::{Config, Dispatcher};

/// Dispatch the raw arguments and return the exit code of the last stage
pub fn run_command(args: &[String]) -> Result<i32> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = Config::load(&cwd).context("Failed to load configuration")?;
    debug!("Dispatching {:?} with {:?}", args, config);

    let status = Dispatcher::new(config).dispatch_args(args)?;
    Ok(status)
}

/// Exit code for an error that aborted the dispatch
pub fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<polyrun_core::Error>()
        .map(polyrun_core::Error::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyrun_core::error::LAUNCH_FAILURE_EXIT_CODE;
    use std::io;

    #[test]
    fn test_error_exit_codes() {
        let launch = anyhow::Error::new(polyrun_core::Error::LaunchError {
            command: "nope".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(error_exit_code(&launch), LAUNCH_FAILURE_EXIT_CODE);

        let config = anyhow::Error::new(polyrun_core::Error::ConfigError("bad".to_string()))
            .context("Failed to load configuration");
        assert_eq!(error_exit_code(&config), 1);

        assert_eq!(error_exit_code(&anyhow::anyhow!("other")), 1);
    }
}
