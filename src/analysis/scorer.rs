// src/analysis/scorer.rs
//! Keyword coverage scoring against flattened resume text

use serde::Serialize;

const MAX_MISSING: usize = 5;

/// Coverage of a keyword set against one candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Score a ranked keyword set against flattened document text.
///
/// A keyword matches if it occurs as a case-insensitive substring anywhere in
/// the text. No word-boundary check is applied, so "manage" matches inside
/// "management"; that mirrors how simple ATS filters behave and is asserted
/// by tests as the intended policy. The score is the rounded percentage of
/// matched keywords. An empty keyword set scores 0 rather than dividing by
/// zero; callers see it as "nothing to match", not an error.
pub fn score_keywords(keywords: &[String], document_text: &str) -> MatchResult {
    let haystack = document_text.to_lowercase();

    let (matched, mut missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| haystack.contains(&keyword.to_lowercase()));

    let score = if keywords.is_empty() {
        0
    } else {
        (100.0 * matched.len() as f64 / keywords.len() as f64).round() as u8
    };

    missing.truncate(MAX_MISSING);

    MatchResult {
        score,
        matched_keywords: matched,
        missing_keywords: missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partial_match_rounds_percentage() {
        let result = score_keywords(
            &keywords(&["python", "docker", "kubernetes"]),
            "experienced python developer using docker containers",
        );

        assert_eq!(result.score, 67);
        assert_eq!(result.matched_keywords, vec!["python", "docker"]);
        assert_eq!(result.missing_keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        let result = score_keywords(&[], "any document text at all");

        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = score_keywords(&keywords(&["rust"]), "Senior RUST Engineer");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_substring_containment_matches_inside_words() {
        // Deliberate policy: no word-boundary requirement.
        let result = score_keywords(&keywords(&["art"]), "smart resume builder");

        assert_eq!(result.score, 100);
        assert_eq!(result.matched_keywords, vec!["art"]);
    }

    #[test]
    fn test_missing_keywords_capped_at_five() {
        let result = score_keywords(
            &keywords(&["one", "two", "three", "four", "five", "six", "seven"]),
            "nothing here matches",
        );

        assert_eq!(result.score, 0);
        assert_eq!(
            result.missing_keywords,
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let set = keywords(&["rust", "tokio"]);
        let text = "async rust services";

        assert_eq!(score_keywords(&set, text), score_keywords(&set, text));
    }
}
