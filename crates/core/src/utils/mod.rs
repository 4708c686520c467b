pub mod serde_helpers;
pub mod words;

pub use words::split_words;
