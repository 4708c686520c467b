//! Left-to-right parsing of the argument list into an [`Invocation`]

use tracing::debug;

use super::{Flag, FlagRuleSet, default_rules};
use crate::{
    error::{Error, Result},
    registry::ExtensionRegistry,
    types::{Invocation, RunRequest},
};

/// Parses and validates the dispatcher's arguments.
///
/// Every flag is checked against the rule set at the moment it is read, so
/// the first violation wins and nothing after it is looked at.
pub struct FlagValidator {
    rules: FlagRuleSet,
}

impl FlagValidator {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Parse everything after the program name
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Invocation> {
        let Some((first, rest)) = args.split_first() else {
            return Err(Error::InvalidArgument("missing source file".to_string()));
        };
        let first = first.as_ref();

        if first == Flag::Shell.token() {
            let line = rest
                .iter()
                .map(|arg| arg.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            debug!("Shell passthrough: {}", line);
            return Ok(Invocation::Shell(line));
        }

        let language = ExtensionRegistry::resolve(first)?;
        let mut request = RunRequest::new(first, language);
        let mut seen: Vec<Flag> = Vec::new();

        let mut tokens = rest.iter().map(|arg| arg.as_ref());
        while let Some(token) = tokens.next() {
            let flag = Flag::from_token(token)
                .ok_or_else(|| Error::InvalidArgument(token.to_string()))?;

            self.rules.check(flag, &seen, language)?;

            match flag {
                Flag::Shell => return Err(Error::MisplacedFlag(Flag::Shell.token())),
                Flag::Repeat => return Err(Error::NotImplemented("continuous run (-r)")),
                Flag::CompileOnly => request.compile_only = true,
                Flag::DeleteAfter => request.delete_after = true,
                Flag::KeepIntermediate => request.keep_intermediate = true,
                Flag::IncludeScan => request.include_scan = true,
                Flag::NoTiming => request.no_timing = true,
                Flag::Wasm => request.target_wasm = true,
                Flag::Output | Flag::CompilerArgs | Flag::ExecArgs => {
                    let value = tokens.next().ok_or_else(|| {
                        Error::InvalidArgument(format!("{token} (missing value)"))
                    })?;
                    match flag {
                        Flag::Output => request.output_name = Some(value.to_string()),
                        Flag::CompilerArgs => request.compiler_args = value.to_string(),
                        _ => request.program_args = value.to_string(),
                    }
                }
            }

            seen.push(flag);
        }

        debug!("Parsed request: {:?}", request);
        Ok(Invocation::Run(request))
    }
}

impl Default for FlagValidator {
    fn default() -> Self {
        Self::new()
    }
}
