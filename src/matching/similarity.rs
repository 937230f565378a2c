//! Name similarity scoring using strsim.
//!
//! Three tiers, tried in order: exact, substring, bounded edit distance.
//!
//! CHANGELOG:
//! - 10/10/2026 - Switched to normalized names and fixed tier confidences
//! - 10/09/2026 - Initial implementation

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use super::normalize::normalize;

/// Confidence of identical normalized names.
pub const EXACT_CONFIDENCE: f64 = 1.0;

/// Confidence when one normalized name contains the other.
pub const PARTIAL_CONFIDENCE: f64 = 0.8;

/// Maximum edit distance, as a share of the longer name, for a fuzzy match.
pub const FUZZY_DISTANCE_RATIO: f64 = 0.3;

/// Lowest confidence a fuzzy match can report.
pub const FUZZY_CONFIDENCE_FLOOR: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Fuzzy,
}

/// Similarity result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub confidence: f64,
    pub match_type: MatchType,
}

/// Classic Levenshtein distance (unit cost insert/delete/substitute).
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Score two raw names. `None` means they do not match.
pub fn score(a: &str, b: &str) -> Option<Similarity> {
    score_normalized(&normalize(a), &normalize(b))
}

/// Score two names that have already been through [`normalize`].
pub fn score_normalized(a: &str, b: &str) -> Option<Similarity> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    if a == b {
        return Some(Similarity {
            confidence: EXACT_CONFIDENCE,
            match_type: MatchType::Exact,
        });
    }

    if a.contains(b) || b.contains(a) {
        return Some(Similarity {
            confidence: PARTIAL_CONFIDENCE,
            match_type: MatchType::Partial,
        });
    }

    let distance = edit_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    let allowed = (max_len as f64 * FUZZY_DISTANCE_RATIO).ceil();
    if distance as f64 <= allowed {
        let confidence = 1.0 - distance as f64 / max_len as f64;
        return Some(Similarity {
            confidence: confidence.max(FUZZY_CONFIDENCE_FLOOR),
            match_type: MatchType::Fuzzy,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let result = score("Chicken Breast", "chicken breast").unwrap();
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_exact_after_modifiers_removed() {
        let result = score("Fresh Basil", "basil").unwrap();
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_partial_either_direction() {
        let result = score("chicken", "chicken breast").unwrap();
        assert_eq!(result.match_type, MatchType::Partial);
        assert_eq!(result.confidence, 0.8);

        let result = score("chicken breast", "chicken").unwrap();
        assert_eq!(result.match_type, MatchType::Partial);
    }

    #[test]
    fn test_substring_wins_over_edit_distance() {
        // "tomatoe" contains "tomato", so the partial tier answers first
        let result = score("tomatoe", "tomato").unwrap();
        assert_eq!(result.match_type, MatchType::Partial);
    }

    #[test]
    fn test_fuzzy_one_edit() {
        // d = 1, L = 7, allowed = ceil(2.1) = 3
        let result = score("tomatoe", "tomatos").unwrap();
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert!((result.confidence - (1.0 - 1.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_fuzzy_at_distance_limit() {
        // d = 3, L = 8, allowed = ceil(2.4) = 3: 1 - 3/8
        let result = score("abcdefgh", "abcdexyz").unwrap();
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert!((result.confidence - 0.625).abs() < 1e-12);

        // d = 4, L = 10, allowed = 3
        assert!(score("abcdefghij", "abcdefwxyz").is_none());
    }

    #[test]
    fn test_fuzzy_confidence_floor() {
        // d = 2, L = 4: 1 - 2/4 = 0.5 is lifted to the floor
        let result = score("milk", "silt").unwrap();
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert_eq!(result.confidence, FUZZY_CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_too_distant_is_no_match() {
        assert!(score("apple", "carrot").is_none());
        // d = 1, L = 4, allowed = ceil(1.2) = 2
        assert!(score("milk", "mild").is_some());
        // d = 3, L = 4: no
        assert!(score("milk", "mare").is_none());
    }

    #[test]
    fn test_empty_names_never_match() {
        assert!(score("", "salt").is_none());
        assert!(score("salt", "   ").is_none());
        assert!(score("Fresh", "fresh").is_none());
    }

    #[test]
    fn test_edit_distance_properties() {
        let pairs = [("kitten", "sitting"), ("flour", "flower"), ("", "rice"), ("egg", "egg")];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
            assert_eq!(edit_distance(a, b) == 0, a == b);
        }
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }
}
