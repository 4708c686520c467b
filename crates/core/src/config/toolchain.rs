//! Programs used to build and run each language

use super::LanguageConfig;
use crate::types::LanguageTag;

/// The resolved programs for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Compiler, or the build driver for Go
    pub compiler: String,
    /// Interpreter, source launcher or VM, when the language has one
    pub interpreter: Option<String>,
    /// `-std=` flag added unless the user passes their own (C and C++)
    pub default_std: Option<String>,
}

impl Toolchain {
    pub fn default_for(language: LanguageTag) -> Self {
        let (compiler, interpreter, default_std) = match language {
            LanguageTag::C => ("cc", None, Some("-std=c18")),
            LanguageTag::Cpp => ("c++", None, Some("-std=gnu++17")),
            LanguageTag::Fortran => ("gfortran", None, None),
            LanguageTag::Haskell => ("ghc", Some("runghc"), None),
            LanguageTag::Go => ("go", Some("go"), None),
            LanguageTag::Java => ("javac", Some("java"), None),
            LanguageTag::JavaScript => ("", Some("node"), None),
            LanguageTag::Perl => ("", Some("perl"), None),
            LanguageTag::Python => ("", Some("python3"), None),
            LanguageTag::R => ("", Some("Rscript"), None),
            LanguageTag::Rust => ("rustc", None, None),
            LanguageTag::Swift => ("swiftc", Some("swift"), None),
        };

        Self {
            compiler: compiler.to_string(),
            interpreter: interpreter.map(str::to_string),
            default_std: default_std.map(str::to_string),
        }
    }

    pub fn apply(&mut self, overrides: &LanguageConfig) {
        if let Some(compiler) = &overrides.compiler {
            self.compiler = compiler.clone();
        }
        if let Some(interpreter) = &overrides.interpreter {
            self.interpreter = Some(interpreter.clone());
        }
        if let Some(std) = &overrides.default_std {
            self.default_std = Some(std.clone());
        }
    }
}
