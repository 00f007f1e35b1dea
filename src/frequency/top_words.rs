// Most frequent word(s) across two profiles.
//
// Counts are summed per key over both profiles; every key that reaches the
// maximum combined count is returned, in ascending order. The result does
// not depend on hash map iteration order.

use std::hash::Hash;

use super::counter::FrequencyMap;
use crate::error::{Error, Result};

/// Return the keys with the highest combined count, sorted ascending.
///
/// Fails with [`Error::EmptyInput`] when both profiles are empty, since
/// there is no maximum to report.
pub fn get_most_frequent_words<K>(a: &FrequencyMap<K>, b: &FrequencyMap<K>) -> Result<Vec<K>>
where
    K: Eq + Hash + Ord + Clone,
{
    let mut combined: FrequencyMap<&K> = FrequencyMap::new();
    for (key, count) in a.iter().chain(b.iter()) {
        *combined.entry(key).or_insert(0) += count;
    }

    let highest = combined
        .values()
        .copied()
        .max()
        .ok_or(Error::EmptyInput)?;

    let mut words: Vec<K> = combined
        .into_iter()
        .filter(|(_, count)| *count == highest)
        .map(|(key, _)| key.clone())
        .collect();
    words.sort();

    Ok(words)
}
