use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// How many TF-IDF rows the terminal view shows when nothing else is asked for.
pub const DEFAULT_TOP_N: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so these
/// can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default IDF corpus (DOCDISTANCE_CORPUS_DIR), used when the `tfidf`
    /// command is given no corpus paths
    pub corpus_dir: Option<PathBuf>,
    /// Rows shown by the terminal TF-IDF view (DOCDISTANCE_TOP_N)
    pub top_n: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let corpus_dir = env::var("DOCDISTANCE_CORPUS_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let top_n = match env::var("DOCDISTANCE_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self { corpus_dir, top_n })
    }

    /// Return the configured corpus directory, or explain how to set one.
    pub fn require_corpus(&self) -> Result<&PathBuf> {
        match &self.corpus_dir {
            Some(dir) => Ok(dir),
            None => anyhow::bail!(
                "No corpus given. Pass corpus files after the document, or set\n\
                 DOCDISTANCE_CORPUS_DIR in your environment or .env file."
            ),
        }
    }
}

fn parse_top_n(raw: &str) -> Result<usize> {
    let top_n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("DOCDISTANCE_TOP_N must be a positive integer, got {raw:?}"))?;
    if top_n == 0 {
        anyhow::bail!("DOCDISTANCE_TOP_N must be at least 1");
    }
    Ok(top_n)
}
