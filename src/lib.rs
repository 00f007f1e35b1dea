// docdistance: lexical similarity between text documents.
//
// This is the library root. Data flows one way through the modules:
// text (load, tokenize) -> frequency (count, compare) -> tfidf (rank).

pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod output;
pub mod text;
pub mod tfidf;

pub use error::{Error, Result};
pub use frequency::{
    calculate_similarity_score, get_frequencies, get_letter_frequencies, get_most_frequent_words,
    FrequencyMap,
};
pub use text::{text_to_list, DocumentLoader, FsLoader, MemoryLoader, NormalizedText};
pub use tfidf::{get_idf, get_tf, get_tfidf, TfIdfEngine, WordScore};
