// Unit tests for frequency counting and profile comparison.
//
// Tests isolated pure functions: get_frequencies totals, similarity symmetry
// and bounds, and most-frequent-word ordering and ties.

use std::collections::HashMap;

use docdistance::frequency::round_ratio2;
use docdistance::{
    calculate_similarity_score, get_frequencies, get_letter_frequencies, get_most_frequent_words,
    text_to_list, Error, FrequencyMap,
};

fn words(text: &str) -> FrequencyMap<String> {
    get_frequencies(text_to_list(text))
}

// ============================================================
// get_frequencies
// ============================================================

#[test]
fn frequencies_scenario() {
    let freqs = get_frequencies(["a", "b", "a", "c", "b", "a"]);
    let expected: HashMap<&str, usize> = [("a", 3), ("b", 2), ("c", 1)].into();
    assert_eq!(freqs, expected);
}

#[test]
fn frequencies_sum_to_sequence_length() {
    for text in ["", "one", "a a a", "the quick brown fox jumps over the lazy dog the end"] {
        let tokens = text_to_list(text);
        let total: usize = get_frequencies(tokens.clone()).values().sum();
        assert_eq!(total, tokens.len(), "mismatch for {text:?}");
    }
}

#[test]
fn frequencies_never_store_zero() {
    let freqs = words("x y x z");
    assert!(freqs.values().all(|&count| count >= 1));
}

#[test]
fn letter_frequencies_match_generic_counter() {
    let word = "mississippi";
    assert_eq!(get_letter_frequencies(word), get_frequencies(word.chars()));
    assert_eq!(get_letter_frequencies(word)[&'s'], 4);
}

#[test]
fn frequencies_many_distinct_items() {
    let items: Vec<u32> = (0..10_000).chain(0..10_000).collect();
    let freqs = get_frequencies(items);
    assert_eq!(freqs.len(), 10_000);
    assert!(freqs.values().all(|&count| count == 2));
}

// ============================================================
// calculate_similarity_score
// ============================================================

#[test]
fn similarity_scenario_half() {
    let a: FrequencyMap<&str> = [("a", 3), ("b", 1)].into();
    let b: FrequencyMap<&str> = [("a", 1), ("b", 3)].into();
    assert_eq!(calculate_similarity_score(&a, &b).unwrap(), 0.5);
}

#[test]
fn similarity_is_symmetric() {
    let pairs = [
        ("hello world hello", "world of hello"),
        ("a b c d", "d e f"),
        ("same text", "same text"),
        ("x", "y y y y"),
    ];
    for (left, right) in pairs {
        let a = words(left);
        let b = words(right);
        assert_eq!(
            calculate_similarity_score(&a, &b).unwrap(),
            calculate_similarity_score(&b, &a).unwrap(),
            "asymmetric for {left:?} / {right:?}"
        );
    }
}

#[test]
fn similarity_with_self_is_one() {
    let a = words("it was the best of times it was the worst of times");
    assert_eq!(calculate_similarity_score(&a, &a).unwrap(), 1.0);
}

#[test]
fn similarity_is_bounded() {
    let a = words("alpha beta beta gamma");
    let b = words("beta gamma gamma gamma delta");
    let score = calculate_similarity_score(&a, &b).unwrap();
    assert!((0.0..=1.0).contains(&score), "out of range: {score}");
}

#[test]
fn similarity_disjoint_is_zero() {
    let a = get_letter_frequencies("abc");
    let b = get_letter_frequencies("xyz");
    assert_eq!(calculate_similarity_score(&a, &b).unwrap(), 0.0);
}

#[test]
fn similarity_is_rounded_to_two_places() {
    // diff = 1, total = 3 -> 0.666..
    let a: FrequencyMap<&str> = [("a", 1)].into();
    let b: FrequencyMap<&str> = [("a", 2)].into();
    assert_eq!(calculate_similarity_score(&a, &b).unwrap(), 0.67);
    assert_eq!(round_ratio2(2, 3), 0.67);
}

#[test]
fn similarity_rounds_decimal_halves_up() {
    let cases = [
        // (left count, right count, expected): 1 - diff / total lands on x.xx5
        (5, 11, 0.63),  // diff 6, total 16 -> 0.625
        (23, 57, 0.58), // diff 34, total 80 -> 0.575
        (67, 13, 0.33), // diff 54, total 80 -> 0.325
        (71, 9, 0.23),  // diff 62, total 80 -> 0.225
    ];
    for (left, right, expected) in cases {
        let a: FrequencyMap<&str> = [("w", left)].into();
        let b: FrequencyMap<&str> = [("w", right)].into();
        assert_eq!(
            calculate_similarity_score(&a, &b).unwrap(),
            expected,
            "counts {left} vs {right}"
        );
    }
}

#[test]
fn similarity_of_two_empty_maps_is_an_error() {
    let empty: FrequencyMap<String> = FrequencyMap::new();
    let err = calculate_similarity_score(&empty, &empty).unwrap_err();
    assert!(matches!(err, Error::EmptyComparison));
    assert!(err.to_string().contains("empty comparison"));
}

// ============================================================
// get_most_frequent_words
// ============================================================

#[test]
fn most_frequent_scenario_three_way_tie() {
    let a: FrequencyMap<&str> = [("cat", 2), ("dog", 1)].into();
    let b: FrequencyMap<&str> = [("dog", 1), ("bird", 2)].into();
    assert_eq!(
        get_most_frequent_words(&a, &b).unwrap(),
        vec!["bird", "cat", "dog"]
    );
}

#[test]
fn most_frequent_output_is_sorted_and_maximal() {
    let a = words("pear apple fig apple pear kiwi");
    let b = words("fig fig kiwi plum");
    let result = get_most_frequent_words(&a, &b).unwrap();

    let mut sorted = result.clone();
    sorted.sort();
    assert_eq!(result, sorted);

    let combined = |w: &String| a.get(w).copied().unwrap_or(0) + b.get(w).copied().unwrap_or(0);
    let best = a.keys().chain(b.keys()).map(combined).max().unwrap();
    assert!(result.iter().all(|w| combined(w) == best));
    assert_eq!(result, vec!["fig"]);
}

#[test]
fn most_frequent_is_independent_of_argument_order() {
    let a = words("one two two three");
    let b = words("three three two");
    assert_eq!(
        get_most_frequent_words(&a, &b).unwrap(),
        get_most_frequent_words(&b, &a).unwrap()
    );
}

#[test]
fn most_frequent_letters() {
    let a = get_letter_frequencies("hello");
    let b = get_letter_frequencies("world");
    // l: 2 + 1 = 3
    assert_eq!(get_most_frequent_words(&a, &b).unwrap(), vec!['l']);
}

#[test]
fn most_frequent_of_two_empty_maps_is_an_error() {
    let empty: FrequencyMap<String> = FrequencyMap::new();
    assert!(matches!(
        get_most_frequent_words(&empty, &empty),
        Err(Error::EmptyInput)
    ));
}
