// Frequency profiles and the comparisons built on them.

pub mod counter;
pub mod similarity;
pub mod top_words;

pub use counter::{get_frequencies, get_letter_frequencies, FrequencyMap};
pub use similarity::{calculate_similarity_score, round_ratio2};
pub use top_words::get_most_frequent_words;
