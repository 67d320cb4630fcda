//! Ingredient relevance.
//!
//! A required token is covered when some user token contains it or is
//! contained by it, so "onions" covers "onion" and "bell peppers" covers the
//! user token "pepper". One covered token is enough to make a recipe a
//! candidate: the matcher favours recall and leaves precision to the ranker,
//! which puts recipes with more covered tokens first. Raising that threshold
//! changes what the ranking keys mean.
use catalog::Recipe;

/// Whether a required token and a user token overlap in either direction.
///
/// Both sides are expected to be canonical. Empty tokens never overlap.
pub fn token_overlaps(required: &str, user: &str) -> bool {
    if required.is_empty() || user.is_empty() {
        return false;
    }
    user.contains(required) || required.contains(user)
}

/// Number of `item`'s required tokens covered by at least one user token.
///
/// `user_tokens` must already be canonical. The item's own tokens are
/// canonicalized here so recipes that skipped catalog admission still
/// compare case-insensitively; a recipe with no usable token scores 0.
pub fn match_count(item: &Recipe, user_tokens: &[String]) -> usize {
    covered_count(&canonical::normalize_tokens(&item.required_tokens), user_tokens)
}

/// [`match_count`] over required tokens that are already canonical and
/// de-duplicated.
pub fn covered_count(required: &[String], user_tokens: &[String]) -> usize {
    required
        .iter()
        .filter(|required| user_tokens.iter().any(|user| token_overlaps(required, user)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Difficulty;

    fn recipe(tokens: &[&str]) -> Recipe {
        Recipe::new("r", tokens.iter().copied(), Difficulty::Easy, 10, None)
    }

    fn user(tokens: &[&str]) -> Vec<String> {
        canonical::normalize_tokens(tokens)
    }

    #[test]
    fn overlap_is_bidirectional() {
        assert!(token_overlaps("onion", "onions"));
        assert!(token_overlaps("bell peppers", "pepper"));
        assert!(token_overlaps("rice", "rice"));
        assert!(!token_overlaps("rice", "eggs"));
        assert!(!token_overlaps("", "rice"));
        assert!(!token_overlaps("rice", ""));
    }

    #[test]
    fn counts_each_required_token_once() {
        let item = recipe(&["rice", "eggs", "onion", "garlic"]);
        assert_eq!(match_count(&item, &user(&["eggs", "onions"])), 2);
        // "egg" and "eggs" both cover the same required token.
        assert_eq!(match_count(&item, &user(&["egg", "eggs"])), 1);
        assert_eq!(match_count(&item, &user(&["tofu"])), 0);
    }

    #[test]
    fn one_user_token_can_cover_several_required_tokens() {
        let item = recipe(&["green onion", "onion"]);
        assert_eq!(match_count(&item, &user(&["onion"])), 2);
    }

    #[test]
    fn unadmitted_required_tokens_are_canonicalized() {
        let item = recipe(&["  RICE ", "Rice", "", "Eggs"]);
        assert_eq!(match_count(&item, &user(&["rice", "eggs"])), 2);
        assert_eq!(match_count(&recipe(&["", "  "]), &user(&["rice"])), 0);
    }

    #[test]
    fn covered_count_agrees_with_match_count() {
        let item = recipe(&["Rice", "EGGS", "green onion"]);
        let required = canonical::normalize_tokens(&item.required_tokens);
        let users = user(&["onion", "egg"]);
        assert_eq!(covered_count(&required, &users), 2);
        assert_eq!(covered_count(&required, &users), match_count(&item, &users));
    }
}
