//! polyrun-core - compile and run a single source file in any supported language
//!
//! This crate provides functionality to:
//! - Resolve a file's language from its extension
//! - Validate the dispatcher's single-dash flags against each other and the language
//! - Plan the compile and run commands for each language's toolchain
//! - Execute those commands with optional timing and clean up temporary artifacts
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod flags;
pub mod includes;
pub mod registry;
pub mod runner;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandBuilder, CommandPlan, ShellCommand, Stage};
pub use config::{Config, Toolchain};
pub use dispatcher::Dispatcher;
pub use flags::{Flag, FlagValidator};
pub use includes::IncludeScanner;
pub use registry::ExtensionRegistry;
pub use runner::{ExecutionResult, Executor, ProcessRunner};
