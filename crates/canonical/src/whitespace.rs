//! Whitespace normalization utilities.
//!
//! [`collapse_whitespace`] splits on any Unicode whitespace run and joins the
//! pieces with a single ASCII space, so the result has no leading or trailing
//! whitespace.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  bell \t peppers\n"), "bell peppers");
//! assert_eq!(collapse_whitespace("   "), "");
//! ```

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Non-breaking spaces count as whitespace:
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("green\u{00A0}onions"), "green onions");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
