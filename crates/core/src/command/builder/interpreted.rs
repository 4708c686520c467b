//! Languages run straight from source: `<interpreter> <file> <args>`

use super::{BuildContext, Cleanup, LanguageBuilder};
use crate::{command::ShellCommand, error::Result, types::LanguageTag};

pub struct InterpretedBuilder;

impl LanguageBuilder for InterpretedBuilder {
    fn languages(&self) -> &'static [LanguageTag] {
        &[
            LanguageTag::JavaScript,
            LanguageTag::Perl,
            LanguageTag::Python,
            LanguageTag::R,
        ]
    }

    fn output_name(&self, _ctx: &BuildContext<'_>) -> Result<Option<String>> {
        Ok(None)
    }

    fn compile(&self, _ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>> {
        Ok(None)
    }

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand> {
        Ok(ShellCommand::new(ctx.interpreter()?)
            .arg(ctx.request.filename())
            .args(ctx.program_args()))
    }

    fn cleanup(&self, _ctx: &BuildContext<'_>) -> Result<Cleanup> {
        Ok(Cleanup::default())
    }
}
