//! Ahead-of-time compiled languages that produce a single executable

use std::path::PathBuf;

use super::{BuildContext, Cleanup, LanguageBuilder, executable_command};
use crate::{
    command::ShellCommand,
    error::{Error, Result},
    types::LanguageTag,
};

/// C, C++, Fortran and Rust: `<compiler> -o <out> <file>` then `./<out>`
pub struct NativeBuilder;

impl NativeBuilder {
    /// The default `-std=` flag unless the user already chose a standard
    fn std_flag(ctx: &BuildContext<'_>) -> Option<String> {
        if ctx.request.compiler_args().contains("-std=") {
            return None;
        }
        ctx.toolchain.default_std.clone()
    }
}

impl LanguageBuilder for NativeBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[
            LanguageTag::C,
            LanguageTag::Cpp,
            LanguageTag::Fortran,
            LanguageTag::Rust,
        ]
    }

    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>> {
        Ok(Some(ctx.output_name()))
    }

    fn compile(&self, ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>> {
        let output = ctx.output_name();
        let filename = ctx.request.filename();
        let compiler = ShellCommand::new(&ctx.toolchain.compiler);

        let command = match ctx.language() {
            LanguageTag::C | LanguageTag::Cpp => compiler
                .args(["-o", output.as_str(), filename])
                .args(ctx.extra_sources.iter().map(|p| p.to_string_lossy().into_owned()))
                .args(Self::std_flag(ctx)),
            LanguageTag::Fortran => compiler.args(["-o", output.as_str(), filename]),
            LanguageTag::Rust => compiler.args([filename, "-o", output.as_str()]),
            other => return Err(Error::UnsupportedLanguage(other)),
        };

        Ok(Some(command.args(ctx.compiler_args())))
    }

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand> {
        Ok(executable_command(&ctx.output_name()).args(ctx.program_args()))
    }

    fn cleanup(&self, ctx: &BuildContext<'_>) -> Result<Cleanup> {
        let mut cleanup = Cleanup::default();
        if ctx.request.delete_after() {
            cleanup.after_run.push(PathBuf::from(ctx.output_name()));
        }
        Ok(cleanup)
    }
}
