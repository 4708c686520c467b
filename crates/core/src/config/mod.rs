//! Configuration management for polyrun

mod settings;
pub mod toolchain;

// Re-export main types
pub use settings::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, Config, LanguageConfig};
pub use toolchain::Toolchain;
