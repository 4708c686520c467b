use std::fmt;
use std::path::PathBuf;

use super::ShellCommand;

/// Which half of a dispatch a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compile,
    Execute,
}

impl Stage {
    /// Label printed before the command runs
    pub fn label(self) -> &'static str {
        match self {
            Stage::Compile => "Compiling...",
            Stage::Execute => "Executing...",
        }
    }

    /// Label printed in front of the elapsed time
    pub fn timing_label(self) -> &'static str {
        match self {
            Stage::Compile => "Compilation time",
            Stage::Execute => "Execution time",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Compile => f.write_str("compile"),
            Stage::Execute => f.write_str("execute"),
        }
    }
}

/// The concrete commands for one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    /// Absent for interpreted languages and single-step shortcuts
    pub compile: Option<ShellCommand>,
    pub run: ShellCommand,
    /// Executable, class or module the compile step produces
    pub output_name: Option<String>,
    /// Removed once the compile step has finished
    pub cleanup_after_compile: Vec<PathBuf>,
    /// Removed once the run step has finished
    pub cleanup_after_run: Vec<PathBuf>,
}
