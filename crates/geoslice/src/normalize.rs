//! Turning free text into query tokens.
//!
//! Addresses are written least-significant first ("101 C, Pearl Street, New York, USA") while
//! the hierarchy is searched from the top, so the comma separated parts are cleaned up,
//! uppercased and reversed.

use once_cell::sync::Lazy;
use regex::Regex;

static REPEATED_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));
static EDGE_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^,|,$").expect("valid comma regex"));
static SPACED_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid separator regex"));

/// Normalise a free-text address into tokens, most-significant first.
///
/// ```rust
/// use geoslice::normalize_query;
///
/// assert_eq!(
///     normalize_query("  101 C,  Pearl   Street , New York,USA "),
///     ["USA", "NEW YORK", "PEARL STREET", "101 C"]
/// );
/// ```
///
/// Empty parts are dropped, so a blank query yields no tokens and searches as a wildcard.
pub fn normalize_query(raw: &str) -> Vec<String> {
    let collapsed = REPEATED_WHITESPACE.replace_all(raw.trim(), " ");
    let trimmed = EDGE_COMMAS.replace_all(&collapsed, "");
    let joined = SPACED_COMMA.replace_all(&trimmed, ",");
    let upper = joined.to_uppercase();
    upper
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .rev()
        .map(ToString::to_string)
        .collect()
}
