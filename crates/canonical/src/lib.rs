//! Larder canonical token layer.
//!
//! Every ingredient string that takes part in matching passes through here
//! first, both the tokens a user types and the required tokens stored on a
//! catalog recipe. Comparing two tokens only ever happens between canonical
//! forms.
//!
//! ## What we do
//!
//! - Unicode NFKC normalization, so composed and decomposed spellings agree
//! - Locale-free lowercasing, followed by a second NFKC pass so case mapping
//!   cannot leave a recomposable sequence behind
//! - Whitespace collapsing (trims edges, single spaces inside)
//!
//! ## Pure function guarantee
//!
//! No I/O, no allocation beyond the returned strings, no locale dependence.
//! [`normalize_token`] is total and idempotent:
//! `normalize_token(&normalize_token(x)) == normalize_token(x)`.

mod token;
mod whitespace;

pub use crate::token::{normalize_token, normalize_tokens};
pub use crate::whitespace::collapse_whitespace;
