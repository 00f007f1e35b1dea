// Occurrence counting over any sequence of hashable items.
//
// Letters of a word and words of a document go through the same routine;
// only the item type differs.

use std::collections::HashMap;
use std::hash::Hash;

/// Item -> occurrence count. Every stored count is at least 1; a missing
/// key means the item never occurred.
pub type FrequencyMap<T> = HashMap<T, usize>;

/// Count how many times each distinct item occurs.
pub fn get_frequencies<T, I>(items: I) -> FrequencyMap<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut frequencies = FrequencyMap::new();
    for item in items {
        *frequencies.entry(item).or_insert(0) += 1;
    }
    frequencies
}

/// Count the letters of a single word.
pub fn get_letter_frequencies(word: &str) -> FrequencyMap<char> {
    get_frequencies(word.chars())
}
