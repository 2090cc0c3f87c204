// crates/fokodb-core/src/score.rs

//! # Relevance Scorer
//!
//! Heuristic match quality of a candidate name against a search term. The
//! weights below are the ranking contract: changing any of them reorders
//! results.
//!
//! | Rule | Points |
//! |---|---|
//! | whole name equals term | +1000 |
//! | whole name starts with term | +500 |
//! | whole name contains term | +300 |
//! | per word: equals / starts with / contains term | +400 / +200 / +100 |
//! | word initials contain term | +150 |
//! | per word, per partial prefix of length `i` | +(50 - i) |
//! | any partial prefix matched | +50 once |
//! | length of the name | -0.5 per character |
//! | per generic word contained (district, ville, …) | -20 |
//!
//! The sum is rounded (halves up) and clamped at zero.

use crate::text::{fold_key, tokenize};

const EXACT: i64 = 1000;
const PREFIX: i64 = 500;
const CONTAINS: i64 = 300;

const WORD_EXACT: i64 = 400;
const WORD_PREFIX: i64 = 200;
const WORD_CONTAINS: i64 = 100;

const INITIALS: i64 = 150;

const PARTIAL_BASE: i64 = 50;
const PARTIAL_BONUS: i64 = 50;

const LENGTH_PENALTY: f64 = 0.5;
const GENERIC_PENALTY: i64 = 20;

/// Administrative boilerplate that makes a name less specific.
pub const GENERIC_TERMS: [&str; 7] = [
    "district",
    "commune",
    "region",
    "fokontany",
    "ville",
    "city",
    "town",
];

/// Scores `candidate` against `term`. Both are case-folded here.
///
/// Deterministic and pure. An empty candidate or term scores 0.
///
/// # Examples
///
/// ```
/// use fokodb_core::score::score;
///
/// assert!(score("Antananarivo", "antananarivo") > score("Antananarivo Ville", "antananarivo"));
/// assert_eq!(score("Toliara", "xyz"), 0);
/// ```
pub fn score(candidate: &str, term: &str) -> u32 {
    if candidate.is_empty() || term.is_empty() {
        return 0;
    }
    let text = fold_key(candidate);
    let term = fold_key(term);

    let mut points: i64 = 0;

    if text == term {
        points += EXACT;
    }
    if text.starts_with(&term) {
        points += PREFIX;
    }
    if text.contains(&term) {
        points += CONTAINS;
    }

    let words: Vec<&str> = tokenize(&text).collect();
    for word in &words {
        if *word == term {
            points += WORD_EXACT;
        }
        if word.starts_with(&term) {
            points += WORD_PREFIX;
        }
        if word.contains(&term) {
            points += WORD_CONTAINS;
        }
    }

    let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
    if initials.contains(&term) {
        points += INITIALS;
    }

    points += partial_prefix_points(&words, &term);

    points -= GENERIC_TERMS
        .iter()
        .filter(|generic| text.contains(*generic))
        .count() as i64
        * GENERIC_PENALTY;

    let length = text.chars().count() as f64;
    let total = points as f64 - length * LENGTH_PENALTY;

    // Halves round up, negative totals clamp to zero.
    let rounded = (total + 0.5).floor();
    if rounded <= 0.0 {
        0
    } else {
        rounded.min(u32::MAX as f64) as u32
    }
}

/// Rewards words that start with a shorter prefix of the term.
fn partial_prefix_points(words: &[&str], term: &str) -> i64 {
    // Byte offsets of each prefix boundary; the full term is excluded.
    let boundaries: Vec<usize> = term.char_indices().skip(1).map(|(at, _)| at).collect();

    let mut points = 0;
    let mut matched = false;
    for word in words {
        for (i, &end) in boundaries.iter().enumerate() {
            if word.starts_with(&term[..end]) {
                points += PARTIAL_BASE - (i as i64 + 1);
                matched = true;
            }
        }
    }
    if matched {
        points += PARTIAL_BONUS;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_single_word() {
        // 1000 + 500 + 300 + (400 + 200 + 100) + partials(49+…+39 = 484) + 50 - 6
        assert_eq!(score("Antananarivo", "antananarivo"), 3028);
    }

    #[test]
    fn generic_suffix_lowers_the_score() {
        // 500 + 300 + 700 + 484 + 50 - 9 - 20
        assert_eq!(score("Antananarivo Ville", "antananarivo"), 2005);
        assert!(score("Antananarivo", "antananarivo") > score("Antananarivo Ville", "antananarivo"));
    }

    #[test]
    fn initials_match() {
        // words: "ambohimanga", "rova"; initials "ar".
        // contains? no. word prefix/contains? no.
        // initials +150; partial: "ambohimanga" starts with "a" -> +49, bonus +50.
        // length 16 -> -8.
        assert_eq!(score("Ambohimanga Rova", "ar"), 241);
    }

    #[test]
    fn no_match_clamps_to_zero() {
        assert_eq!(score("Toliara", "xyz"), 0);
        assert_eq!(score("", "abc"), 0);
        assert_eq!(score("Abc", ""), 0);
    }

    #[test]
    fn every_generic_word_counts() {
        let plain = score("Commune Ambato", "ambato");
        let double = score("Commune Ambato Ville", "ambato");
        // six more characters (-3) and a second generic word (-20)
        assert!(plain > double);
    }

    #[test]
    fn halves_round_up() {
        // "ab" vs "ab": 1000+500+300+700 + partial("a": 49) + 50 - 1 = 2598
        assert_eq!(score("Ab", "ab"), 2598);
        // odd length gives a .5 which rounds up: "abc" vs "ab"
        // 500+300 + (200+100) + 49 + 50 - 1.5 = 1197.5 -> 1198
        assert_eq!(score("Abc", "ab"), 1198);
    }

    #[test]
    fn score_is_deterministic() {
        let a = score("Ambohimanambola", "ambohimanambola");
        let b = score("Ambohimanambola", "AMBOHIMANAMBOLA");
        assert_eq!(a, b);
    }
}
