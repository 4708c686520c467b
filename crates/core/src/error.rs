use std::io;

use crate::types::LanguageTag;

/// Exit code reported when a child process could not be launched at all.
/// Distinct from the shell's own 126/127 and from `128 + signal`.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 125;

/// Errors that can occur while dispatching a source file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid file type {extension:?}, acceptable types: {}", valid.join(" "))]
    UnrecognizedExtension {
        extension: String,
        valid: Vec<&'static str>,
    },

    #[error("Cannot use flag \"{first}\" with flag \"{second}\"")]
    ConflictingFlags {
        first: &'static str,
        second: &'static str,
    },

    #[error("Flag \"{flag}\" can only be used with {allowed} files, not {language}")]
    FlagLanguageMismatch {
        flag: &'static str,
        allowed: &'static str,
        language: LanguageTag,
    },

    #[error("\"{0}\" flag must be the first argument")]
    MisplacedFlag(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("No build rule for {0}")]
    UnsupportedLanguage(LanguageTag),

    #[error("Failed to launch {command}")]
    LaunchError {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// The process exit code the dispatcher should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::LaunchError { .. } => LAUNCH_FAILURE_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_flags_message_names_both_flags() {
        let err = Error::ConflictingFlags {
            first: "-d",
            second: "-c",
        };
        assert_eq!(err.to_string(), "Cannot use flag \"-d\" with flag \"-c\"");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_launch_error_has_distinct_exit_code() {
        let err = Error::LaunchError {
            command: "nope".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
        assert_ne!(LAUNCH_FAILURE_EXIT_CODE, 126);
        assert_ne!(LAUNCH_FAILURE_EXIT_CODE, 127);
    }

    #[test]
    fn test_launch_error_cause_reported_once() {
        let err = Error::LaunchError {
            command: "nope a.py".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to launch nope a.py");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "not found");
    }
}
