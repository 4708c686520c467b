//! Haskell: `ghc` then run, or `runghc` with `-d`

use std::path::PathBuf;

use super::{BuildContext, Cleanup, LanguageBuilder, executable_command};
use crate::{command::ShellCommand, error::Result, types::LanguageTag};

/// Intermediate files ghc writes next to the source
const INTERMEDIATE_EXTENSIONS: [&str; 2] = ["o", "hi"];

pub struct HaskellBuilder;

impl LanguageBuilder for HaskellBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[LanguageTag::Haskell]
    }

    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>> {
        if ctx.request.delete_after() {
            return Ok(None);
        }
        Ok(Some(
            ctx.request
                .output_name()
                .unwrap_or(ctx.request.stem())
                .to_string(),
        ))
    }

    fn compile(&self, ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>> {
        if ctx.request.delete_after() {
            return Ok(None);
        }

        let mut command = ShellCommand::new(&ctx.toolchain.compiler).arg(ctx.request.filename());
        if let Some(output) = ctx.request.output_name() {
            command = command.args(["-o", output]);
        }
        Ok(Some(command.args(ctx.compiler_args())))
    }

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand> {
        match self.output_name(ctx)? {
            Some(output) => Ok(executable_command(&output).args(ctx.program_args())),
            None => Ok(ShellCommand::new(ctx.interpreter()?)
                .arg(ctx.request.filename())
                .args(ctx.program_args())),
        }
    }

    fn cleanup(&self, ctx: &BuildContext<'_>) -> Result<Cleanup> {
        let mut cleanup = Cleanup::default();
        if ctx.request.delete_after() || ctx.request.keep_intermediate() {
            return Ok(cleanup);
        }

        let stem = ctx.request.stem();
        cleanup.after_compile = INTERMEDIATE_EXTENSIONS
            .iter()
            .map(|ext| PathBuf::from(format!("{stem}.{ext}")))
            .collect();
        Ok(cleanup)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_compile_then_run() {
        let plan = plan(&["Main.hs", "-exec-args", "10"]);
        insta::assert_snapshot!(compile_line(&plan), @"ghc Main.hs");
        assert_eq!(plan.run.to_shell_command(), "./Main 10");
        assert_eq!(
            plan.cleanup_after_compile,
            vec![PathBuf::from("Main.o"), PathBuf::from("Main.hi")]
        );
        assert!(plan.cleanup_after_run.is_empty());
    }

    #[test]
    fn test_keep_intermediate() {
        let plan = plan(&["Main.hs", "-hs"]);
        assert!(plan.cleanup_after_compile.is_empty());
    }

    #[test]
    fn test_delete_after_uses_runghc() {
        let plan = plan(&["Main.hs", "-d"]);
        assert!(plan.compile.is_none());
        assert_eq!(plan.run.to_shell_command(), "runghc Main.hs");
        assert!(plan.cleanup_after_compile.is_empty());
    }

    #[test]
    fn test_output_name_passed_to_ghc() {
        let plan = plan(&["src/Main.hs", "-o", "app", "-comp-args", "-O2"]);
        assert_eq!(compile_line(&plan), "ghc src/Main.hs -o app -O2");
        assert_eq!(plan.run.program, "./app");
        assert_eq!(
            plan.cleanup_after_compile,
            vec![PathBuf::from("src/Main.o"), PathBuf::from("src/Main.hi")]
        );
    }
}
