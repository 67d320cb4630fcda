use unicode_normalization::UnicodeNormalization;

use crate::whitespace::collapse_whitespace;

/// Canonicalizes a single ingredient token for comparison.
///
/// Applies NFKC, lowercases, recomposes, then collapses whitespace. Never
/// fails; a whitespace-only input yields the empty string, which callers
/// treat as "no token".
///
/// Lowercasing can leave a base letter and a combining mark that NFKC would
/// join (`"\u{3AA}\u{301}"` lowercases to `"\u{3CA}\u{301}"`), so NFKC runs
/// again after case mapping to keep the result a fixed point.
pub fn normalize_token(token: &str) -> String {
    let lowered = token.nfkc().collect::<String>().to_lowercase();
    let folded: String = lowered.nfkc().collect();
    collapse_whitespace(&folded)
}

/// Canonicalizes a list of tokens into an ordered set.
///
/// Empty results are dropped and duplicates keep their first position, so
/// the output is deterministic for a given input order.
pub fn normalize_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for token in tokens {
        let normalized = normalize_token(token.as_ref());
        if normalized.is_empty() || out.contains(&normalized) {
            continue;
        }
        out.push(normalized);
    }
    out
}
