// TF-IDF: term frequency within one document, inverse document frequency
// across a corpus, and their product as a word ranking.

pub mod engine;
pub mod score;

pub use engine::{get_idf, get_tf, get_tfidf, TfIdfEngine};
pub use score::{rank_tfidf, tf_from_text, DocumentFrequencies, WordScore};
