//! Java: `javac` then `java <Class>`

use std::path::PathBuf;

use super::{BuildContext, Cleanup, LanguageBuilder};
use crate::{command::ShellCommand, error::Result, types::LanguageTag};

pub struct JavaBuilder;

impl JavaBuilder {
    fn class_name(ctx: &BuildContext<'_>) -> String {
        ctx.request.file_stem()
    }
}

impl LanguageBuilder for JavaBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[LanguageTag::Java]
    }

    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>> {
        if ctx.request.output_name().is_some() {
            tracing::debug!("Ignoring -o for Java, the class name is fixed by the source");
        }
        Ok(Some(Self::class_name(ctx)))
    }

    fn compile(&self, ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>> {
        Ok(Some(
            ShellCommand::new(&ctx.toolchain.compiler)
                .arg(ctx.request.filename())
                .args(ctx.compiler_args()),
        ))
    }

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand> {
        let mut command = ShellCommand::new(ctx.interpreter()?);
        if let Some(dir) = ctx.request.source_dir() {
            command = command.args(["-cp".to_string(), dir.to_string_lossy().into_owned()]);
        }
        Ok(command.arg(Self::class_name(ctx)).args(ctx.program_args()))
    }

    fn cleanup(&self, ctx: &BuildContext<'_>) -> Result<Cleanup> {
        let mut cleanup = Cleanup::default();
        if ctx.request.delete_after() {
            cleanup
                .after_run
                .push(PathBuf::from(format!("{}.class", ctx.request.stem())));
        }
        Ok(cleanup)
    }
}
