//! Post-hoc ranking of search results.
//!
//! Search itself is exact; ranking measures how much of the query each result actually
//! accounts for. The measure is the longest common subsequence of *tokens* between the query
//! and the result's address, expressed as the percentage of query tokens left unmatched.

use tracing::{debug, instrument};

use crate::MatchResult;

/// Highest possible rank: nothing in common.
pub const MAX_RANK: u8 = 100;

/// Token-level LCS distance between `query` and `address`, both most-significant first.
///
/// Returns 0 for identical sequences and for an empty query (which matches anything), 100
/// when `address` is empty, and otherwise `round((1 - lcs / query.len()) * 100)`. Lower is
/// better.
pub fn lcs_distance<A, B>(query: &[A], address: &[B]) -> u8
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let same = query.len() == address.len()
        && query
            .iter()
            .zip(address)
            .all(|(a, b)| a.as_ref() == b.as_ref());
    if same || query.is_empty() {
        return 0;
    }
    if address.is_empty() {
        return MAX_RANK;
    }

    let lcs = lcs_len(query, address);
    let unmatched = 1.0 - lcs as f64 / query.len() as f64;
    (unmatched * f64::from(MAX_RANK)).round() as u8
}

fn lcs_len<A, B>(s1: &[A], s2: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    // Two rows of the classic (m+1) x (n+1) table.
    let mut prev = vec![0usize; s2.len() + 1];
    let mut curr = vec![0usize; s2.len() + 1];
    for a in s1 {
        for (j, b) in s2.iter().enumerate() {
            curr[j + 1] = if a.as_ref() == b.as_ref() {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[s2.len()]
}

/// Rank `results` against `query`, drop those ranked above `max_rank` and sort best first.
///
/// The sort is stable, so results of equal rank keep the order the search produced them in.
#[instrument(level = "debug", skip_all, fields(results = results.len(), max_rank = ?max_rank))]
pub fn post_process<'a, S: AsRef<str>>(
    results: Vec<MatchResult<'a>>,
    query: &[S],
    max_rank: Option<u8>,
) -> Vec<MatchResult<'a>> {
    let mut ranked: Vec<_> = results
        .into_iter()
        .map(|mut result| {
            result.rank = lcs_distance(query, &result.address_path());
            result
        })
        .filter(|result| max_rank.is_none_or(|max| result.rank <= max))
        .collect();
    ranked.sort_by_key(MatchResult::rank);
    debug!(kept = ranked.len(), "Ranked results");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{demo_tree, paths};

    #[test]
    fn test_lcs_distance_identities() {
        let s = ["USA", "NEW YORK", "PEARL STREET"];
        let empty: [&str; 0] = [];
        assert_eq!(lcs_distance(&s, &s), 0);
        assert_eq!(lcs_distance(&empty, &s), 0);
        assert_eq!(lcs_distance(&empty, &empty), 0);
        assert_eq!(lcs_distance(&s, &empty), 100);
    }

    #[test]
    fn test_lcs_distance_is_token_level() {
        // Shares characters but no whole token.
        assert_eq!(lcs_distance(&["NEW YORK"], &["NEW", "YORK"]), 100);
        assert_eq!(lcs_distance(&["USA", "NEW YORK"], &["USA"]), 50);
    }

    #[test]
    fn test_lcs_distance_subsequence() {
        let query = ["NEW YORK", "PEARL STREET", "ALLEY A", "101 C"];
        assert_eq!(
            lcs_distance(&query, &["USA", "NEW YORK", "PEARL STREET", "101 C"]),
            25
        );
        assert_eq!(lcs_distance(&query, &["USA", "NEW YORK", "TIME SQUARE", "101 C"]), 50);
        // Query fully contained in a longer address.
        assert_eq!(lcs_distance(&["NEW YORK", "101 C"], &["USA", "NEW YORK", "X", "101 C"]), 0);
    }

    #[test]
    fn test_lcs_distance_rounds() {
        // 1 of 3 matched: 66.67 rounds to 67.
        assert_eq!(lcs_distance(&["A", "B", "C"], &["A"]), 67);
        // 2 of 3 matched: 33.33 rounds to 33.
        assert_eq!(lcs_distance(&["A", "B", "C"], &["A", "C"]), 33);
    }

    #[test]
    fn test_post_process_sorts_and_filters() {
        // Scenario: "101 C, Alley A, Pearl Street, New York"
        let tree = demo_tree();
        let query = ["NEW YORK", "PEARL STREET", "ALLEY A", "101 C"];

        let unfiltered = post_process(tree.locate(&query, false, None).unwrap(), &query, None);
        assert_eq!(
            paths(&unfiltered),
            [
                "101 C,PEARL STREET,NEW YORK,USA",
                "101 C,TIME SQUARE,NEW YORK,USA",
                "101 C,BARA BAZAR,KOLKATA,WEST BENGAL,INDIA",
            ]
        );
        let ranks: Vec<_> = unfiltered.iter().map(MatchResult::rank).collect();
        assert_eq!(ranks, [25, 50, 75]);

        let filtered = post_process(tree.locate(&query, false, None).unwrap(), &query, Some(70));
        assert_eq!(paths(&filtered), paths(&unfiltered[..2]));
        assert!(filtered.iter().all(|r| r.rank() <= 70));
    }

    #[test]
    fn test_post_process_is_stable() {
        // Both Pearl Streets rank the same and keep search order.
        let tree = demo_tree();
        let query = ["PEARL STREET"];
        let ranked = post_process(tree.locate(&query, false, None).unwrap(), &query, None);
        assert_eq!(
            paths(&ranked),
            ["PEARL STREET,NEW YORK,USA", "PEARL STREET,CALIFORNIA,USA"]
        );
        assert!(ranked.iter().all(|r| r.rank() == 0));
    }

    #[test]
    fn test_placeholder_ranked_on_reached_context() {
        let tree = demo_tree();
        // A placeholder is ranked on the context the search reached.
        let query = ["INDIA", "WEST BENGAL", "NOWHERE"];
        let ranked = post_process(tree.locate(&query, true, None).unwrap(), &query, None);
        assert_eq!(paths(&ranked)[0], "WEST BENGAL,INDIA");
        assert_eq!(ranked[0].rank(), 33);
    }

    #[test]
    fn test_empty_query_ranks_everything_zero() {
        let tree = demo_tree();
        let empty: [&str; 0] = [];
        let ranked = post_process(tree.locate(&empty, false, None).unwrap(), &empty, Some(0));
        assert_eq!(ranked.len(), 8);
    }
}
