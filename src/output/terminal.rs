// Colored terminal output for comparisons and TF-IDF rankings.

use colored::Colorize;

use super::Comparison;
use crate::tfidf::WordScore;

/// Longest word shown in the ranking table before truncation.
const WORD_COLUMN: usize = 28;

/// Display a similarity comparison.
pub fn display_comparison(comparison: &Comparison, unit: &str) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", comparison.left, comparison.right).bold()
    );
    println!(
        "  Similarity ({unit}): {}",
        colorize_similarity(comparison.similarity)
    );

    let label = if comparison.most_frequent.len() == 1 {
        format!("  Most frequent {unit}:")
    } else {
        format!("  Most frequent {unit} ({}-way tie):", comparison.most_frequent.len())
    };
    println!("{label} {}", comparison.most_frequent.join(", "));
    println!();
}

/// Display the highest-scoring `top_n` rows of an ascending TF-IDF ranking.
pub fn display_ranking(path: &str, ranked: &[WordScore], top_n: usize) {
    if ranked.is_empty() {
        println!("No words of {path} appear in the corpus.");
        return;
    }

    let shown = top_n.min(ranked.len());
    println!(
        "\n{}",
        format!("=== TF-IDF for {path} (top {shown} of {}) ===", ranked.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<width$}  {:>8}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "TF-IDF".dimmed(),
        width = WORD_COLUMN + 3
    );
    println!("  {}", "-".repeat(WORD_COLUMN + 19).dimmed());

    for (i, row) in ranked.iter().rev().take(shown).enumerate() {
        println!(
            "  {:>4}. {:<width$}  {:>8.4}",
            i + 1,
            super::truncate_chars(&row.word, WORD_COLUMN),
            row.score,
            width = WORD_COLUMN + 3
        );
    }
    println!();

    if shown < ranked.len() {
        println!(
            "{}",
            format!("  {} more rows; use --top or --json to see them.", ranked.len() - shown).dimmed()
        );
    }
}

/// Colorize a similarity score by band.
fn colorize_similarity(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    if score >= 0.75 {
        text.bright_green()
    } else if score >= 0.40 {
        text.bright_yellow()
    } else {
        text.bright_blue()
    }
}
