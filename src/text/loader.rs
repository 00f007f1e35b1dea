// Document loading — the only I/O in the crate.
//
// A loader turns a path into NormalizedText: outer whitespace trimmed,
// ASCII punctuation removed, everything lowercased. Internal spaces and
// newlines survive so the tokenizer can split on them.
//
// The DocumentLoader trait lets the TF-IDF pipeline run against files on
// disk (FsLoader) or against in-memory documents (MemoryLoader).

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Every character of the ASCII punctuation set: `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!-/:-@\[-`{-~]").expect("valid punctuation pattern"));

/// Lowercase, punctuation-free text with only space/newline separators.
///
/// Only [`normalize`] constructs one, so holding a `NormalizedText` means the
/// normalization rules have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Apply the document normalization rules to raw text.
///
/// Trim, then strip punctuation, then lowercase. A document whose only
/// content is punctuation normalizes to the empty string.
pub fn normalize(raw: &str) -> NormalizedText {
    let stripped = PUNCTUATION.replace_all(raw.trim(), "");
    NormalizedText(stripped.to_lowercase())
}

/// Source of normalized documents, keyed by path.
pub trait DocumentLoader {
    /// Load the document at `path` and normalize it.
    fn load(&self, path: &Path) -> Result<NormalizedText>;
}

/// Reads documents from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl DocumentLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<NormalizedText> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), bytes = raw.len(), "Loaded document");
        Ok(normalize(&raw))
    }
}

/// Serves documents from memory. Unknown paths behave like missing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw (not yet normalized) text under `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, raw: impl Into<String>) {
        self.documents.insert(path.into(), raw.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<PathBuf>, raw: impl Into<String>) -> Self {
        self.insert(path, raw);
        self
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> Result<NormalizedText> {
        self.documents
            .get(path)
            .map(|raw| normalize(raw))
            .ok_or_else(|| {
                Error::io(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "no such document"),
                )
            })
    }
}
