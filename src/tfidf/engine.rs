// File-driven TF-IDF pipeline.
//
// The engine owns a DocumentLoader and runs the pure scoring functions in
// score.rs over whatever it loads. The free functions at the bottom use the
// filesystem loader.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::score::{rank_tfidf, tf_from_text, DocumentFrequencies, WordScore};
use crate::error::{Error, Result};
use crate::text::{DocumentLoader, FsLoader};

/// TF-IDF computations over documents served by `L`.
#[derive(Debug, Clone, Default)]
pub struct TfIdfEngine<L> {
    loader: L,
}

impl<L: DocumentLoader> TfIdfEngine<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Term frequency of every word in the document at `path`.
    pub fn tf(&self, path: &Path) -> Result<HashMap<String, f64>> {
        let text = self.loader.load(path)?;
        let tf = tf_from_text(&text).ok_or_else(|| Error::EmptyDocument {
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), words = tf.len(), "Computed term frequencies");
        Ok(tf)
    }

    /// Inverse document frequency of every word across `paths`.
    ///
    /// Documents are read one at a time in the order given. The first
    /// unreadable path aborts the whole computation.
    pub fn idf<P: AsRef<Path>>(&self, paths: &[P]) -> Result<HashMap<String, f64>> {
        let mut frequencies = DocumentFrequencies::new();
        for path in paths {
            let text = self.loader.load(path.as_ref())?;
            frequencies.add_document(&text);
        }

        debug!(
            documents = frequencies.documents(),
            vocabulary = frequencies.counts().len(),
            "Counted document frequencies"
        );
        Ok(frequencies.idf())
    }

    /// Rank the words of `tf_path` by TF-IDF against the corpus `idf_paths`.
    ///
    /// Ascending by score, ties by word. Words absent from either side are
    /// not scored.
    pub fn tfidf<P: AsRef<Path>>(&self, tf_path: &Path, idf_paths: &[P]) -> Result<Vec<WordScore>> {
        let tf = self.tf(tf_path)?;
        let idf = self.idf(idf_paths)?;
        let ranked = rank_tfidf(&tf, &idf);

        info!(
            path = %tf_path.display(),
            corpus = idf_paths.len(),
            ranked = ranked.len(),
            "Ranked words by TF-IDF"
        );
        Ok(ranked)
    }
}

/// [`TfIdfEngine::tf`] over the filesystem.
pub fn get_tf(path: impl AsRef<Path>) -> Result<HashMap<String, f64>> {
    TfIdfEngine::new(FsLoader).tf(path.as_ref())
}

/// [`TfIdfEngine::idf`] over the filesystem.
pub fn get_idf<P: AsRef<Path>>(paths: &[P]) -> Result<HashMap<String, f64>> {
    TfIdfEngine::new(FsLoader).idf(paths)
}

/// [`TfIdfEngine::tfidf`] over the filesystem.
pub fn get_tfidf<P: AsRef<Path>>(tf_path: impl AsRef<Path>, idf_paths: &[P]) -> Result<Vec<WordScore>> {
    TfIdfEngine::new(FsLoader).tfidf(tf_path.as_ref(), idf_paths)
}
