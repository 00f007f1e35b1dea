// Pure TF-IDF arithmetic over already-loaded text.
//
//   TF(w)     = count(w in doc) / tokens(doc)
//   IDF(w)    = log10(documents / documents containing w)
//   TFIDF(w)  = TF(w) * IDF(w)
//
// Nothing in here touches the filesystem; the engine feeds it documents.

use std::collections::HashMap;

use serde::Serialize;

use crate::frequency::{get_frequencies, FrequencyMap};
use crate::text::{text_to_list, NormalizedText};

/// One row of a TF-IDF ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

impl WordScore {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Term frequency of every word in `text`.
///
/// Returns `None` for a document with no words, where TF is undefined.
pub fn tf_from_text(text: &NormalizedText) -> Option<HashMap<String, f64>> {
    let words = text_to_list(text.as_str());
    if words.is_empty() {
        return None;
    }

    let total = words.len() as f64;
    let tf = get_frequencies(words)
        .into_iter()
        .map(|(word, count)| (word, count as f64 / total))
        .collect();
    Some(tf)
}

/// Running document-frequency tally over a corpus.
///
/// Each document adds at most 1 to a word's count, however often the word
/// repeats inside it. Documents are not retained after they are counted.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencies {
    counts: FrequencyMap<String>,
    documents: usize,
}

impl DocumentFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document.
    pub fn add_document(&mut self, text: &NormalizedText) {
        for word in get_frequencies(text_to_list(text.as_str())).into_keys() {
            *self.counts.entry(word).or_insert(0) += 1;
        }
        self.documents += 1;
    }

    /// Number of documents counted so far, empty ones included.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// How many counted documents contain `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Raw word -> document count map.
    pub fn counts(&self) -> &FrequencyMap<String> {
        &self.counts
    }

    /// Inverse document frequency of every word seen in the corpus.
    ///
    /// Only words present in at least one document appear, so the ratio is
    /// always defined and never below 1.
    pub fn idf(&self) -> HashMap<String, f64> {
        let total = self.documents as f64;
        self.counts
            .iter()
            .map(|(word, &df)| (word.clone(), (total / df as f64).log10()))
            .collect()
    }
}

/// Join TF and IDF maps into a ranking.
///
/// Only words present in both maps are scored; the rest are dropped. Rows
/// are sorted by ascending score, ties broken by ascending word.
pub fn rank_tfidf(tf: &HashMap<String, f64>, idf: &HashMap<String, f64>) -> Vec<WordScore> {
    let mut ranked: Vec<WordScore> = tf
        .iter()
        .filter_map(|(word, tf_value)| {
            idf.get(word)
                .map(|idf_value| WordScore::new(word.clone(), tf_value * idf_value))
        })
        .collect();

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
    ranked
}
