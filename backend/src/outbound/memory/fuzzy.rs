//! Term matching with automatic edit distance.
//!
//! Terms are lowercase alphanumeric runs. The allowed edit distance depends
//! on the query term length: up to 2 characters must match exactly, 3 to 5
//! allow one edit, longer terms allow two.

const EXACT_SCORE: f64 = 2.0;
const FUZZY_SCORE: f64 = 1.0;

/// Split `text` into lowercase terms on any non-alphanumeric character.
pub(super) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Edit budget for a query term of `len` characters.
pub(super) fn allowed_edits(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// Levenshtein distance between two strings, counted in characters.
pub(super) fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, left) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, right) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(left != right);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Relevance of `text` for the query terms, or `None` when nothing matches.
///
/// Each query term contributes its best match against the text's terms.
pub(super) fn score(query_terms: &[String], text: &str) -> Option<f64> {
    let text_terms = tokenize(text);
    let total: f64 = query_terms
        .iter()
        .map(|query_term| best_match(query_term, &text_terms))
        .sum();
    (total > 0.0).then_some(total)
}

fn best_match(query_term: &str, text_terms: &[String]) -> f64 {
    let budget = allowed_edits(query_term.chars().count());
    text_terms
        .iter()
        .map(|term| {
            if term == query_term {
                EXACT_SCORE
            } else if budget > 0 && edit_distance(query_term, term) <= budget {
                FUZZY_SCORE
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tokenizes_on_punctuation_and_case() {
        assert_eq!(tokenize("Budget-2026: Vote, PASSED!"), ["budget", "2026", "vote", "passed"]);
    }

    #[rstest]
    #[case("", "", 0)]
    #[case("alpha", "alpa", 1)]
    #[case("kitten", "sitting", 3)]
    #[case("beta", "beta", 0)]
    #[case("", "abc", 3)]
    fn computes_edit_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(edit_distance(a, b), expected);
        assert_eq!(edit_distance(b, a), expected);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(5, 1)]
    #[case(6, 2)]
    #[case(12, 2)]
    fn edit_budget_scales_with_length(#[case] len: usize, #[case] expected: usize) {
        assert_eq!(allowed_edits(len), expected);
    }

    #[rstest]
    #[case("alpa", "Alpha", true)]
    #[case("alp", "Alpha", false)]
    #[case("ab", "ac", false)]
    #[case("ab", "AB testing", true)]
    #[case("elections", "Local electoins", true)]
    #[case("elections", "Local erectors", false)]
    fn applies_automatic_fuzziness(#[case] query: &str, #[case] title: &str, #[case] matches: bool) {
        assert_eq!(score(&tokenize(query), title).is_some(), matches);
    }

    #[test]
    fn exact_matches_outscore_fuzzy_matches() {
        let terms = tokenize("beta");
        let exact = score(&terms, "Beta").expect("exact");
        let fuzzy = score(&terms, "Bets").expect("fuzzy");
        assert!(exact > fuzzy);
    }

    #[test]
    fn any_query_term_is_enough() {
        assert!(score(&tokenize("zzz beta"), "Beta release").is_some());
    }
}
