// Frequency-profile similarity.
//
// For every key in either profile we accumulate the absolute difference of
// the two counts (DIFF) and their sum (ALL). The score is
//
//   1 - DIFF / ALL
//
// rounded to two decimals. The rounding is done on the exact integer ratio
// (ALL - DIFF) / ALL, so decimal halves such as 0.575 always round up.
// Identical profiles score 1.0, profiles with no keys in common score 0.0.

use std::collections::HashSet;
use std::hash::Hash;

use super::counter::FrequencyMap;
use crate::error::{Error, Result};

/// Round `numerator / denominator` to two decimal places, halves up.
///
/// Works on the integers so the result never depends on how the unrounded
/// quotient happens to be stored as a float. `denominator` must be non-zero.
pub fn round_ratio2(numerator: usize, denominator: usize) -> f64 {
    let hundredths = (200 * numerator + denominator) / (2 * denominator);
    hundredths as f64 / 100.0
}

/// Compare two frequency profiles.
///
/// Returns a score in [0, 1]. Two empty profiles have no total to divide by
/// and yield [`Error::EmptyComparison`].
pub fn calculate_similarity_score<K>(a: &FrequencyMap<K>, b: &FrequencyMap<K>) -> Result<f64>
where
    K: Eq + Hash,
{
    let all_keys: HashSet<&K> = a.keys().chain(b.keys()).collect();

    let mut diff = 0usize;
    let mut total = 0usize;

    for key in all_keys {
        let f1 = a.get(key).copied().unwrap_or(0);
        let f2 = b.get(key).copied().unwrap_or(0);
        diff += f1.abs_diff(f2);
        total += f1 + f2;
    }

    if total == 0 {
        return Err(Error::EmptyComparison);
    }

    Ok(round_ratio2(total - diff, total))
}
