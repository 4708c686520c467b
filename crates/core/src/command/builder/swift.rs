//! Swift: `swiftc` then run, or `swift <file>` with `-d`

use super::{BuildContext, Cleanup, LanguageBuilder, executable_command};
use crate::{command::ShellCommand, error::Result, types::LanguageTag};

pub struct SwiftBuilder;

impl LanguageBuilder for SwiftBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[LanguageTag::Swift]
    }

    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>> {
        if ctx.request.delete_after() {
            return Ok(None);
        }
        // swiftc names the executable after the module, in the current directory
        Ok(Some(
            ctx.request
                .output_name()
                .map(str::to_string)
                .unwrap_or_else(|| ctx.request.file_stem()),
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

    fn cleanup(&self, _ctx: &BuildContext<'_>) -> Result<Cleanup> {
        Ok(Cleanup::default())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn test_compile_then_run() {
        let plan = plan(&["Sources/app.swift", "-exec-args", "--name x"]);
        insta::assert_snapshot!(compile_line(&plan), @"swiftc Sources/app.swift");
        assert_eq!(plan.run.to_shell_command(), "./app --name x");
    }

    #[test]
    fn test_delete_after_runs_interpreter() {
        let plan = plan(&["app.swift", "-d"]);
        assert!(plan.compile.is_none());
        assert_eq!(plan.run.to_shell_command(), "swift app.swift");
        assert!(plan.cleanup_after_run.is_empty());
    }

    #[test]
    fn test_output_name() {
        let plan = plan(&["app.swift", "-c", "-o", "tool"]);
        assert_eq!(compile_line(&plan), "swiftc app.swift -o tool");
        assert_eq!(plan.output_name.as_deref(), Some("tool"));
    }
}
