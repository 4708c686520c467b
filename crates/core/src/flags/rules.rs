//! Compatibility rules checked as each flag is accepted

use super::Flag;
use crate::{
    error::{Error, Result},
    types::LanguageTag,
};

/// A rule consulted every time the parser accepts a flag
pub trait FlagRule: Send + Sync {
    /// Check `flag` against the flags accepted before it
    fn check(&self, flag: Flag, seen: &[Flag], language: LanguageTag) -> Result<()>;

    /// Get the name of this rule
    fn name(&self) -> &str;
}

/// Two flags that cannot appear in the same invocation
pub struct ConflictRule {
    pub name: &'static str,
    pub first: Flag,
    pub second: Flag,
}

impl FlagRule for ConflictRule {
    fn check(&self, flag: Flag, seen: &[Flag], _language: LanguageTag) -> Result<()> {
        let other = if flag == self.first {
            self.second
        } else if flag == self.second {
            self.first
        } else {
            return Ok(());
        };

        if seen.contains(&other) {
            return Err(Error::ConflictingFlags {
                first: flag.token(),
                second: other.token(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// A flag that only applies to some languages
pub struct LanguageRule {
    pub name: &'static str,
    pub flag: Flag,
    pub allowed: &'static [LanguageTag],
    pub allowed_label: &'static str,
}

impl FlagRule for LanguageRule {
    fn check(&self, flag: Flag, _seen: &[Flag], language: LanguageTag) -> Result<()> {
        if flag == self.flag && !self.allowed.contains(&language) {
            return Err(Error::FlagLanguageMismatch {
                flag: flag.token(),
                allowed: self.allowed_label,
                language,
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Collection of flag rules
pub struct FlagRuleSet {
    rules: Vec<Box<dyn FlagRule>>,
}

impl FlagRuleSet {
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    pub fn add_rule(&mut self, rule: Box<dyn FlagRule>) {
        self.rules.push(rule);
    }

    pub fn check(&self, flag: Flag, seen: &[Flag], language: LanguageTag) -> Result<()> {
        for rule in &self.rules {
            rule.check(flag, seen, language).inspect_err(|_| {
                tracing::debug!("Flag {} rejected by rule '{}'", flag, rule.name());
            })?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for FlagRuleSet {
    fn default() -> Self {
        default_rules()
    }
}

/// The rules every dispatch is validated against
pub fn default_rules() -> FlagRuleSet {
    let mut rules = FlagRuleSet::new();

    rules.add_rule(Box::new(ConflictRule {
        name: "compile_delete_conflict",
        first: Flag::CompileOnly,
        second: Flag::DeleteAfter,
    }));

    rules.add_rule(Box::new(ConflictRule {
        name: "wasm_delete_conflict",
        first: Flag::Wasm,
        second: Flag::DeleteAfter,
    }));

    rules.add_rule(Box::new(LanguageRule {
        name: "haskell_intermediates_only",
        flag: Flag::KeepIntermediate,
        allowed: &[LanguageTag::Haskell],
        allowed_label: ".hs",
    }));

    rules.add_rule(Box::new(LanguageRule {
        name: "include_scan_c_family_only",
        flag: Flag::IncludeScan,
        allowed: &[LanguageTag::C, LanguageTag::Cpp],
        allowed_label: "C/C++",
    }));

    rules.add_rule(Box::new(LanguageRule {
        name: "wasm_go_only",
        flag: Flag::Wasm,
        allowed: &[LanguageTag::Go],
        allowed_label: ".go",
    }));

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_rule_is_symmetric() {
        let rule = ConflictRule {
            name: "test",
            first: Flag::CompileOnly,
            second: Flag::DeleteAfter,
        };
        let lang = LanguageTag::C;

        assert!(rule.check(Flag::CompileOnly, &[], lang).is_ok());
        assert!(matches!(
            rule.check(Flag::DeleteAfter, &[Flag::CompileOnly], lang),
            Err(Error::ConflictingFlags {
                first: "-d",
                second: "-c"
            })
        ));
        assert!(matches!(
            rule.check(Flag::CompileOnly, &[Flag::DeleteAfter], lang),
            Err(Error::ConflictingFlags {
                first: "-c",
                second: "-d"
            })
        ));
        assert!(rule.check(Flag::NoTiming, &[Flag::CompileOnly], lang).is_ok());
    }

    #[test]
    fn test_language_rule() {
        let rule = LanguageRule {
            name: "test",
            flag: Flag::IncludeScan,
            allowed: &[LanguageTag::C, LanguageTag::Cpp],
            allowed_label: "C/C++",
        };

        assert!(rule.check(Flag::IncludeScan, &[], LanguageTag::Cpp).is_ok());
        assert!(rule.check(Flag::NoTiming, &[], LanguageTag::Python).is_ok());
        let err = rule
            .check(Flag::IncludeScan, &[], LanguageTag::Python)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Flag \"-i\" can only be used with C/C++ files, not Python"
        );
    }

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules.len(), 5);
        assert!(rules.check(Flag::Wasm, &[], LanguageTag::Go).is_ok());
        assert!(rules.check(Flag::Wasm, &[], LanguageTag::C).is_err());
        assert!(
            rules
                .check(Flag::DeleteAfter, &[Flag::Wasm], LanguageTag::Go)
                .is_err()
        );
    }
}
