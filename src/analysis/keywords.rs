// src/analysis/keywords.rs
//! Keyword extraction from free-form job description text

use std::collections::HashMap;

/// Tokens carrying no topical signal, excluded from ranking.
///
/// This set is a pinned configuration constant: changing it changes every
/// score the heuristic produces, so tests assert against it directly.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "at", "been", "being", "but", "by", "for", "from", "had", "has",
    "have", "in", "may", "must", "need", "of", "on", "or", "our", "that", "the", "they", "this",
    "to", "was", "we", "were", "will", "with", "you", "your",
];

const MAX_KEYWORDS: usize = 10;
const MIN_TOKEN_LEN: usize = 3;

/// Extract the top ranked keywords from a job description.
///
/// Tokens are lowercased alphabetic runs of at least three characters; runs
/// containing digits are treated as noise and discarded, as are stop words.
/// Surviving tokens are ranked by descending frequency, ties broken by first
/// occurrence in the text, and truncated to the top ten. Degenerate input
/// (empty text, stop words only) yields an empty vector.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in tokenize(&lowered) {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Vec::sort_by is stable, so equal counts keep first-seen order.
    order.sort_by(|a, b| counts[*b].cmp(&counts[*a]));
    order.truncate(MAX_KEYWORDS);

    order.into_iter().map(str::to_string).collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| run.len() >= MIN_TOKEN_LEN)
        .filter(|run| run.bytes().all(|b| b.is_ascii_alphabetic()))
        .filter(|run| !STOP_WORDS.contains(run))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_by_frequency_with_stable_ties() {
        assert_eq!(
            extract_keywords("cloud cloud docker docker docker aws"),
            vec!["docker", "cloud", "aws"]
        );
    }

    #[test]
    fn test_stop_words_only_yields_empty() {
        assert_eq!(extract_keywords("the and of in"), Vec::<String>::new());
        assert_eq!(extract_keywords(""), Vec::<String>::new());
    }

    #[test]
    fn test_short_and_digit_tokens_discarded() {
        // "js" and "ci"/"cd" are too short, "b2b" contains a digit
        assert_eq!(extract_keywords("js ci cd b2b"), Vec::<String>::new());
        assert_eq!(extract_keywords("node.js b2b sales"), vec!["node", "sales"]);
    }

    #[test]
    fn test_output_invariants() {
        let text = "Rust Rust rust go go GO python java kotlin swift dart ruby \
                    perl php scala elixir haskell";
        let keywords = extract_keywords(text);

        assert!(keywords.len() <= 10);
        for keyword in &keywords {
            assert!(keyword.len() >= 3);
            assert_eq!(*keyword, keyword.to_lowercase());
        }
        let mut unique = keywords.clone();
        unique.dedup();
        assert_eq!(unique, keywords);
    }

    #[test]
    fn test_job_description_end_to_end() {
        let description = "We need a Software Engineer with React, Node.js, AWS, Docker, \
                           and Kubernetes experience. Must have strong CI/CD skills.";
        assert_eq!(
            extract_keywords(description),
            vec![
                "software",
                "engineer",
                "react",
                "node",
                "aws",
                "docker",
                "kubernetes",
                "experience",
                "strong",
                "skills",
            ]
        );
    }
}
