//! The dispatch pipeline: resolve, validate, plan, compile, run, clean up

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    command::{CommandBuilder, ShellCommand, Stage},
    config::Config,
    error::Result,
    flags::FlagValidator,
    includes::IncludeScanner,
    runner::{Executor, ProcessRunner},
    types::{Invocation, RunRequest},
};

/// Drives one invocation from raw arguments to a final exit code
pub struct Dispatcher<E: Executor = ProcessRunner> {
    config: Config,
    validator: FlagValidator,
    executor: E,
}

impl Dispatcher<ProcessRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_executor(config, ProcessRunner::new())
    }
}

impl<E: Executor> Dispatcher<E> {
    pub fn with_executor(config: Config, executor: E) -> Self {
        Self {
            config,
            validator: FlagValidator::new(),
            executor,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Parse `args` (everything after the program name) and dispatch them
    pub fn dispatch_args<S: AsRef<str>>(&self, args: &[S]) -> Result<i32> {
        let invocation = self.validator.parse(args)?;
        self.dispatch(&invocation)
    }

    /// Run an already validated invocation, returning the last stage's exit code
    pub fn dispatch(&self, invocation: &Invocation) -> Result<i32> {
        match invocation {
            Invocation::Shell(line) => {
                let command = ShellCommand::new_shell(line.as_str());
                let result = self
                    .executor
                    .execute(&command, Stage::Execute, !self.config.no_timing)?;
                Ok(result.status)
            }
            Invocation::Run(request) => self.run_request(request),
        }
    }

    fn run_request(&self, request: &RunRequest) -> Result<i32> {
        let timed = !(request.no_timing() || self.config.no_timing);

        let extra_sources = if request.include_scan() {
            IncludeScanner::new(request.language())?.scan(request.source_path())?
        } else {
            Vec::new()
        };

        let plan = CommandBuilder::for_request(request)
            .with_config(&self.config)
            .with_extra_sources(extra_sources)
            .build()?;

        if let Some(compile) = &plan.compile {
            let result = self.executor.execute(compile, Stage::Compile, timed);
            remove_files(&plan.cleanup_after_compile);
            let result = result?;

            if !result.success() {
                info!("Compilation failed with status {}, not running", result.status);
                return Ok(result.status);
            }
            if request.stops_after_compile() {
                return Ok(result.status);
            }
        } else if request.compile_only() {
            debug!("{} has no compile step, running it", request.language());
        }

        let result = self.executor.execute(&plan.run, Stage::Execute, timed);
        remove_files(&plan.cleanup_after_run);
        Ok(result?.status)
    }
}

/// Best-effort removal; files that were never produced are ignored
fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
        }
    }
}
