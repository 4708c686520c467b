use serde::Serialize;
use std::fmt;

use crate::impl_case_insensitive_deserialize;

/// A supported source language, resolved from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    C,
    Cpp,
    Fortran,
    Haskell,
    Go,
    Java,
    JavaScript,
    Perl,
    Python,
    R,
    Rust,
    Swift,
}

impl_case_insensitive_deserialize!(
    LanguageTag,
    C => "c",
    Cpp => "cpp" | "c++",
    Fortran => "fortran",
    Haskell => "haskell",
    Go => "go",
    Java => "java",
    JavaScript => "javascript" | "js",
    Perl => "perl",
    Python => "python",
    R => "r",
    Rust => "rust",
    Swift => "swift"
);

impl LanguageTag {
    pub const ALL: [LanguageTag; 12] = [
        LanguageTag::C,
        LanguageTag::Cpp,
        LanguageTag::Fortran,
        LanguageTag::Haskell,
        LanguageTag::Go,
        LanguageTag::Java,
        LanguageTag::JavaScript,
        LanguageTag::Perl,
        LanguageTag::Python,
        LanguageTag::R,
        LanguageTag::Rust,
        LanguageTag::Swift,
    ];

    /// Human readable name used in messages
    pub fn name(self) -> &'static str {
        match self {
            LanguageTag::C => "C",
            LanguageTag::Cpp => "C++",
            LanguageTag::Fortran => "Fortran",
            LanguageTag::Haskell => "Haskell",
            LanguageTag::Go => "Go",
            LanguageTag::Java => "Java",
            LanguageTag::JavaScript => "JavaScript",
            LanguageTag::Perl => "Perl",
            LanguageTag::Python => "Python",
            LanguageTag::R => "R",
            LanguageTag::Rust => "Rust",
            LanguageTag::Swift => "Swift",
        }
    }

    /// Languages that are run straight from source with no compile step
    pub fn is_interpreted(self) -> bool {
        matches!(
            self,
            LanguageTag::JavaScript | LanguageTag::Perl | LanguageTag::Python | LanguageTag::R
        )
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_deserialize_aliases() {
        let tag: LanguageTag = serde_json::from_str(r#""C++""#).unwrap();
        assert_eq!(tag, LanguageTag::Cpp);
        let tag: LanguageTag = serde_json::from_str(r#""JS""#).unwrap();
        assert_eq!(tag, LanguageTag::JavaScript);
    }

    #[test]
    fn test_deserialize_as_map_key() {
        let map: HashMap<LanguageTag, u8> =
            serde_json::from_str(r#"{"python": 1, "Rust": 2}"#).unwrap();
        assert_eq!(map[&LanguageTag::Python], 1);
        assert_eq!(map[&LanguageTag::Rust], 2);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&LanguageTag::JavaScript).unwrap(),
            r#""javascript""#
        );
    }

    #[test]
    fn test_interpreted_languages() {
        let interpreted: Vec<_> = LanguageTag::ALL
            .into_iter()
            .filter(|tag| tag.is_interpreted())
            .collect();
        assert_eq!(
            interpreted,
            vec![
                LanguageTag::JavaScript,
                LanguageTag::Perl,
                LanguageTag::Python,
                LanguageTag::R
            ]
        );
    }
}
