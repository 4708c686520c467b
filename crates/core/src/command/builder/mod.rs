//! Per-language command construction

mod go;
mod haskell;
mod interpreted;
mod java;
mod native;
mod swift;

pub use self::go::GoBuilder;
pub use self::haskell::HaskellBuilder;
pub use self::interpreted::InterpretedBuilder;
pub use self::java::JavaBuilder;
pub use self::native::NativeBuilder;
pub use self::swift::SwiftBuilder;

use crate::{
    command::{CommandPlan, ShellCommand},
    config::{Config, Toolchain},
    error::{Error, Result},
    types::{LanguageTag, RunRequest},
    utils::split_words,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix given to executables that are deleted after running
pub const TEMP_PREFIX: &str = ".temp";

/// Everything a language strategy needs to produce its commands
pub struct BuildContext<'a> {
    pub request: &'a RunRequest,
    pub toolchain: Toolchain,
    /// Additional translation units found by the include scan
    pub extra_sources: &'a [PathBuf],
}

impl<'a> BuildContext<'a> {
    pub fn language(&self) -> LanguageTag {
        self.request.language()
    }

    pub fn compiler_args(&self) -> Vec<String> {
        split_words(self.request.compiler_args())
    }

    pub fn program_args(&self) -> Vec<String> {
        split_words(self.request.program_args())
    }

    /// `-o` if given, else the filename without its extension.
    ///
    /// With `-d` the last path component gets the `.temp` prefix, so
    /// `src/foo.c` becomes `src/.tempfoo`.
    pub fn output_name(&self) -> String {
        if let Some(name) = self.request.output_name() {
            return name.to_string();
        }

        let stem = self.request.stem();
        if !self.request.delete_after() {
            return stem.to_string();
        }

        let path = Path::new(stem);
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => parent
                .join(format!("{TEMP_PREFIX}{}", name.to_string_lossy()))
                .to_string_lossy()
                .into_owned(),
            _ => format!("{TEMP_PREFIX}{stem}"),
        }
    }

    /// The interpreter or launcher for this language
    pub fn interpreter(&self) -> Result<&str> {
        self.toolchain
            .interpreter
            .as_deref()
            .ok_or(Error::UnsupportedLanguage(self.language()))
    }
}

/// Command to run a freshly built executable
pub fn executable_command(output: &str) -> ShellCommand {
    let path = Path::new(output);
    if path.is_absolute() || output.starts_with("./") {
        ShellCommand::new(output)
    } else {
        ShellCommand::new(format!("./{output}"))
    }
}

/// Files removed at each point of the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cleanup {
    pub after_compile: Vec<PathBuf>,
    pub after_run: Vec<PathBuf>,
}

/// The compile/run/cleanup strategy for a family of languages
pub trait LanguageBuilder: Send + Sync {
    /// Languages handled by this strategy
    fn languages(&self) -> &'static [LanguageTag];

    /// Name of what the compile step produces, if it has one
    fn output_name(&self, ctx: &BuildContext<'_>) -> Result<Option<String>>;

    /// The compile step, or `None` when the file is run straight from source
    fn compile(&self, ctx: &BuildContext<'_>) -> Result<Option<ShellCommand>>;

    fn run(&self, ctx: &BuildContext<'_>) -> Result<ShellCommand>;

    /// Files this language's own steps leave behind
    fn cleanup(&self, ctx: &BuildContext<'_>) -> Result<Cleanup>;

    fn plan(&self, ctx: &BuildContext<'_>) -> Result<CommandPlan> {
        let cleanup = self.cleanup(ctx)?;
        Ok(CommandPlan {
            compile: self.compile(ctx)?,
            run: self.run(ctx)?,
            output_name: self.output_name(ctx)?,
            cleanup_after_compile: cleanup.after_compile,
            cleanup_after_run: cleanup.after_run,
        })
    }
}

static STRATEGIES: [&dyn LanguageBuilder; 6] = [
    &NativeBuilder,
    &GoBuilder,
    &HaskellBuilder,
    &JavaBuilder,
    &SwiftBuilder,
    &InterpretedBuilder,
];

/// Look up the strategy responsible for `language`
pub fn strategy_for(language: LanguageTag) -> Result<&'static dyn LanguageBuilder> {
    STRATEGIES
        .iter()
        .copied()
        .find(|strategy| strategy.languages().contains(&language))
        .ok_or(Error::UnsupportedLanguage(language))
}

/// Main entry point for building a [`CommandPlan`]
///
/// # Example
/// ```ignore
/// let plan = CommandBuilder::for_request(&request)
///     .with_config(&config)
///     .with_extra_sources(sources)
///     .build()?;
/// ```
pub struct CommandBuilder<'a> {
    request: &'a RunRequest,
    config: Option<&'a Config>,
    extra_sources: Vec<PathBuf>,
}

impl<'a> CommandBuilder<'a> {
    pub fn for_request(request: &'a RunRequest) -> Self {
        Self {
            request,
            config: None,
            extra_sources: Vec::new(),
        }
    }

    /// Apply toolchain overrides from a loaded configuration
    pub fn with_config(mut self, config: &'a Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Additional sources to compile alongside the main file
    pub fn with_extra_sources(mut self, sources: Vec<PathBuf>) -> Self {
        self.extra_sources = sources;
        self
    }

    pub fn build(self) -> Result<CommandPlan> {
        let language = self.request.language();
        let toolchain = match self.config {
            Some(config) => config.toolchain_for(language),
            None => Toolchain::default_for(language),
        };

        let ctx = BuildContext {
            request: self.request,
            toolchain,
            extra_sources: &self.extra_sources,
        };

        let plan = strategy_for(language)?.plan(&ctx)?;
        debug!(
            "Plan for {}: compile={:?} run={:?}",
            self.request.filename(),
            plan.compile.as_ref().map(ShellCommand::to_shell_command),
            plan.run.to_shell_command()
        );
        Ok(plan)
    }
}
