//! Command construction for each supported language

pub mod builder;
pub mod plan;
pub mod shell_command;

// Re-export commonly used types
pub use builder::{BuildContext, CommandBuilder, LanguageBuilder};
pub use plan::{CommandPlan, Stage};
pub use shell_command::{CommandKind, ShellCommand};
