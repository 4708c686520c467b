//! File extension to language resolution

use tracing::debug;

use crate::{
    error::{Error, Result},
    types::LanguageTag,
};

/// Filename that stands for the Go module in the current directory
pub const CURRENT_GO_MODULE: &str = ".";

const EXTENSIONS: &[(&str, LanguageTag)] = &[
    (".c", LanguageTag::C),
    (".cc", LanguageTag::Cpp),
    (".cpp", LanguageTag::Cpp),
    (".f", LanguageTag::Fortran),
    (".f77", LanguageTag::Fortran),
    (".f90", LanguageTag::Fortran),
    (".f95", LanguageTag::Fortran),
    (".go", LanguageTag::Go),
    (".hs", LanguageTag::Haskell),
    (".jav", LanguageTag::Java),
    (".java", LanguageTag::Java),
    (".js", LanguageTag::JavaScript),
    (".pl", LanguageTag::Perl),
    (".py", LanguageTag::Python),
    (".r", LanguageTag::R),
    (".rs", LanguageTag::Rust),
    (".swift", LanguageTag::Swift),
];

/// Static mapping from file extension to language
pub struct ExtensionRegistry;

impl ExtensionRegistry {
    /// Every recognized extension, in display order
    pub fn extensions() -> Vec<&'static str> {
        EXTENSIONS.iter().map(|(ext, _)| *ext).collect()
    }

    /// Extensions that resolve to the given language
    pub fn extensions_for(language: LanguageTag) -> Vec<&'static str> {
        EXTENSIONS
            .iter()
            .filter(|(_, tag)| *tag == language)
            .map(|(ext, _)| *ext)
            .collect()
    }

    /// Resolve the language of `filename` from the text after its last `.`.
    ///
    /// Matching is case-sensitive. A filename of exactly `.` resolves to Go.
    pub fn resolve(filename: &str) -> Result<LanguageTag> {
        if filename == CURRENT_GO_MODULE {
            debug!("Treating '.' as the current Go module");
            return Ok(LanguageTag::Go);
        }

        let extension = filename
            .rfind('.')
            .map(|idx| &filename[idx..])
            .unwrap_or_default();

        let language = EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| Error::UnrecognizedExtension {
                extension: extension.to_string(),
                valid: Self::extensions(),
            })?;

        debug!("Resolved {} as {}", filename, language);
        Ok(language)
    }
}
