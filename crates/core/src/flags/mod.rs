//! Command-line flag parsing and compatibility rules

pub mod rules;
pub mod validator;

pub use rules::{ConflictRule, FlagRule, FlagRuleSet, LanguageRule, default_rules};
pub use validator::FlagValidator;

use std::fmt;

/// A flag understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Shell,
    CompileOnly,
    DeleteAfter,
    KeepIntermediate,
    IncludeScan,
    NoTiming,
    Output,
    Repeat,
    Wasm,
    CompilerArgs,
    ExecArgs,
}

impl Flag {
    /// Flags in the order they are documented
    pub const ALL: [Flag; 11] = [
        Flag::Shell,
        Flag::CompileOnly,
        Flag::DeleteAfter,
        Flag::KeepIntermediate,
        Flag::IncludeScan,
        Flag::NoTiming,
        Flag::Output,
        Flag::Repeat,
        Flag::Wasm,
        Flag::CompilerArgs,
        Flag::ExecArgs,
    ];

    pub fn from_token(token: &str) -> Option<Flag> {
        Flag::ALL.into_iter().find(|flag| flag.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Flag::Shell => "-b",
            Flag::CompileOnly => "-c",
            Flag::DeleteAfter => "-d",
            Flag::KeepIntermediate => "-hs",
            Flag::IncludeScan => "-i",
            Flag::NoTiming => "-nt",
            Flag::Output => "-o",
            Flag::Repeat => "-r",
            Flag::Wasm => "-wasm",
            Flag::CompilerArgs => "-comp-args",
            Flag::ExecArgs => "-exec-args",
        }
    }

    /// Whether the flag consumes the following token as its value
    pub fn takes_value(self) -> bool {
        matches!(self, Flag::Output | Flag::CompilerArgs | Flag::ExecArgs)
    }

    /// Placeholder shown in help output for the flag's value
    pub fn value_name(self) -> Option<&'static str> {
        match self {
            Flag::Shell => Some("{shell code}"),
            Flag::Output => Some("{output name}"),
            Flag::CompilerArgs => Some("{compilation args}"),
            Flag::ExecArgs => Some("{program args}"),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Flag::Shell => "Run code in the shell (must be the first argument)",
            Flag::CompileOnly => "Compile only",
            Flag::DeleteAfter => "Don't leave the executable behind",
            Flag::KeepIntermediate => "Leave all Haskell output files (only works with .hs)",
            Flag::IncludeScan => "Compile the sources behind local #include headers (C/C++ only)",
            Flag::NoTiming => "Do not output compilation and execution time",
            Flag::Output => "The name of the output executable",
            Flag::Repeat => "Run continuously (not implemented)",
            Flag::Wasm => "Compile to WebAssembly (Go only)",
            Flag::CompilerArgs => "Pass arguments to the compiler (quote them together)",
            Flag::ExecArgs => "Pass arguments to the program (quote them together)",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
