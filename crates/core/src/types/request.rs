use std::path::{Path, PathBuf};

use super::LanguageTag;

/// What a single `run` invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `-b`: hand the joined line straight to the shell
    Shell(String),
    /// Compile and/or run a source file
    Run(RunRequest),
}

/// A validated request to compile and/or run one source file.
///
/// Only the flag parser constructs these, so every instance already
/// satisfies the flag compatibility rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub(crate) filename: String,
    pub(crate) language: LanguageTag,
    pub(crate) compile_only: bool,
    pub(crate) delete_after: bool,
    pub(crate) output_name: Option<String>,
    pub(crate) compiler_args: String,
    pub(crate) program_args: String,
    pub(crate) no_timing: bool,
    pub(crate) target_wasm: bool,
    pub(crate) keep_intermediate: bool,
    pub(crate) include_scan: bool,
}

impl RunRequest {
    pub(crate) fn new(filename: impl Into<String>, language: LanguageTag) -> Self {
        Self {
            filename: filename.into(),
            language,
            compile_only: false,
            delete_after: false,
            output_name: None,
            compiler_args: String::new(),
            program_args: String::new(),
            no_timing: false,
            target_wasm: false,
            keep_intermediate: false,
            include_scan: false,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source_path(&self) -> &Path {
        Path::new(&self.filename)
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn compile_only(&self) -> bool {
        self.compile_only
    }

    pub fn delete_after(&self) -> bool {
        self.delete_after
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn compiler_args(&self) -> &str {
        &self.compiler_args
    }

    pub fn program_args(&self) -> &str {
        &self.program_args
    }

    pub fn no_timing(&self) -> bool {
        self.no_timing
    }

    pub fn target_wasm(&self) -> bool {
        self.target_wasm
    }

    pub fn keep_intermediate(&self) -> bool {
        self.keep_intermediate
    }

    pub fn include_scan(&self) -> bool {
        self.include_scan
    }

    /// Whether the run stage is skipped after compiling
    pub fn stops_after_compile(&self) -> bool {
        self.compile_only || self.target_wasm
    }

    /// Filename with everything from the last `.` removed
    pub fn stem(&self) -> &str {
        match self.filename.rfind('.') {
            Some(idx) => &self.filename[..idx],
            None => &self.filename,
        }
    }

    /// The bare file stem, without any directory components
    pub fn file_stem(&self) -> String {
        Path::new(self.stem())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory containing the source file, if it is not the current one
    pub fn source_dir(&self) -> Option<PathBuf> {
        self.source_path()
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}
