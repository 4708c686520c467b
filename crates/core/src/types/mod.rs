pub mod language;
pub mod request;

// Re-export commonly used types
pub use language::LanguageTag;
pub use request::{Invocation, RunRequest};
