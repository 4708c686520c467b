//! Discovery of extra C/C++ translation units through local `#include`s

use regex::Regex;
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    error::{Error, Result},
    types::LanguageTag,
};

const HEADER_EXTENSIONS: [&str; 4] = ["h", "hh", "hpp", "hxx"];

/// Finds the sources that implement the local headers a file includes.
///
/// Only quoted includes are followed; `<...>` includes are system headers.
/// For `#include "util.h"` the sibling `util.c` (C) or `util.cpp`/`util.cc`/
/// `util.cxx` (C++) is picked up when it exists, and is itself scanned.
pub struct IncludeScanner {
    include: Regex,
    language: LanguageTag,
}

impl IncludeScanner {
    pub fn new(language: LanguageTag) -> Result<Self> {
        if !matches!(language, LanguageTag::C | LanguageTag::Cpp) {
            return Err(Error::UnsupportedLanguage(language));
        }
        Ok(Self {
            include: Regex::new(r#"(?m)^[ \t]*#[ \t]*include[ \t]*"([^"]+)""#)?,
            language,
        })
    }

    fn source_extensions(&self) -> &'static [&'static str] {
        match self.language {
            LanguageTag::C => &["c"],
            _ => &["cpp", "cc", "cxx"],
        }
    }

    /// Headers named by quoted includes in `contents`
    pub fn local_includes<'a>(&self, contents: &'a str) -> Vec<&'a str> {
        self.include
            .captures_iter(contents)
            .filter_map(|captures| captures.get(1))
            .map(|header| header.as_str())
            .collect()
    }

    /// Extra sources needed to build `source`, in discovery order
    pub fn scan(&self, source: &Path) -> Result<Vec<PathBuf>> {
        let mut visited = HashSet::from([identity(source)]);
        let mut queue = VecDeque::from([source.to_path_buf()]);
        let mut found = Vec::new();

        while let Some(file) = queue.pop_front() {
            let contents = fs::read_to_string(&file)?;
            let dir = file.parent().unwrap_or(Path::new(""));

            for include in self.local_includes(&contents) {
                let header = dir.join(include);
                let is_header = header
                    .extension()
                    .is_some_and(|ext| HEADER_EXTENSIONS.iter().any(|h| ext == *h));
                if !is_header || !header.is_file() {
                    debug!("Skipping include {:?} from {}", include, file.display());
                    continue;
                }

                if visited.insert(identity(&header)) {
                    queue.push_back(header.clone());
                }

                for ext in self.source_extensions() {
                    let candidate = header.with_extension(ext);
                    if candidate.is_file() && visited.insert(identity(&candidate)) {
                        debug!("Include scan added {}", candidate.display());
                        found.push(candidate.clone());
                        queue.push_back(candidate);
                    }
                }
            }
        }

        Ok(found)
    }
}

fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
