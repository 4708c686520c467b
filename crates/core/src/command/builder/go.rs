//! Go: `go build` then run, `go run` with `-d`, or a wasm cross-compile

use super::{BuildContext, Cleanup, LanguageBuilder, executable_command};
use crate::{
    command::ShellCommand,
    error::Result,
    registry::CURRENT_GO_MODULE,
    types::LanguageTag,
};

pub struct GoBuilder;

impl GoBuilder {
    /// Name `go build` gives the binary when no `-o` is passed.
    ///
    /// It lands in the current directory, named after the file, or after
    /// the directory when building the current module.
    fn default_binary(ctx: &BuildContext<'_>) -> Result<String> {
        if ctx.request.filename() == CURRENT_GO_MODULE {
            let cwd = std::env::current_dir()?;
            return Ok(cwd
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "main".to_string()));
        }
        Ok(ctx.request.file_stem())
    }

    /// `-o` passed to `go build`, if any
    fn explicit_output(ctx: &BuildContext<'_>) -> Result<Option<String>> {
        if let Some(name) = ctx.request.output_name() {
            return Ok(Some(name.to_string()));
        }
        if ctx.request.target_wasm() {
            let stem = if ctx.request.filename() == CURRENT_GO_MODULE {
                Self::default_binary(ctx)?
            } else {
                ctx.request.stem().to_string()
            };
            return Ok(Some(format!("{stem}.wasm")));
        }
        Ok(None)
    }
}

impl LanguageBuilder for GoBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[LanguageTag::Go]
    }

    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>> {
        if ctx.request.delete_after() {
            return Ok(None);
        }
        match Self::explicit_output(ctx)? {
            Some(name) => Ok(Some(name)),
            None => Self::default_binary(ctx).map(Some),
        }
    }

    fn compile(&self, ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>> {
        if ctx.request.delete_after() {
            return Ok(None);
        }

        let mut command = ShellCommand::new(&ctx.toolchain.compiler).arg("build");
        if ctx.request.target_wasm() {
            command = command.with_env("GOOS", "js").with_env("GOARCH", "wasm");
        }
        if let Some(output) = Self::explicit_output(ctx)? {
            command = command.args(["-o".to_string(), output]);
        }

        Ok(Some(
            command
                .arg(ctx.request.filename())
                .args(ctx.compiler_args()),
        ))
    }

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand> {
        if ctx.request.delete_after() {
            return Ok(ShellCommand::new(ctx.interpreter()?)
                .args(["run", ctx.request.filename()])
                .args(ctx.program_args()));
        }

        let binary = self.output_name(ctx)?.unwrap_or_default();
        Ok(executable_command(&binary).args(ctx.program_args()))
    }

    fn cleanup(&self, _ctx: &BuildContext<'_>) -> Result<Cleanup> {
        // `go run` builds into its own cache and `go build` output is kept
        Ok(Cleanup::default())
    }
}
