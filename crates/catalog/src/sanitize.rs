use crate::error::CatalogError;

/// Strips control characters (when asked) and trims; `None` if nothing is left.
pub(crate) fn sanitize_optional_string(
    value: Option<String>,
    strip_control: bool,
) -> Option<String> {
    value.and_then(|raw| {
        let filtered = if strip_control {
            raw.chars().filter(|c| !c.is_control()).collect::<String>()
        } else {
            raw
        };
        let trimmed = filtered.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

/// Like [`sanitize_optional_string`] but an empty result is an error.
pub(crate) fn sanitize_required_field(
    recipe_id: &str,
    field: &str,
    value: String,
    strip_control: bool,
) -> Result<String, CatalogError> {
    sanitize_optional_string(Some(value), strip_control)
        .ok_or_else(|| CatalogError::invalid(recipe_id, format!("{field} empty")))
}

/// Sanitizes each line and drops the ones that end up empty.
pub(crate) fn sanitize_lines(lines: Vec<String>, strip_control: bool) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| sanitize_optional_string(Some(line), strip_control))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_control_and_trims() {
        assert_eq!(
            sanitize_optional_string(Some("  Fried\x07 Rice ".into()), true),
            Some("Fried Rice".into())
        );
        assert_eq!(sanitize_optional_string(Some("   ".into()), true), None);
        assert_eq!(sanitize_optional_string(None, true), None);
    }

    #[test]
    fn keeps_control_when_disabled() {
        assert_eq!(
            sanitize_optional_string(Some("a\x07b".into()), false),
            Some("a\x07b".into())
        );
    }

    #[test]
    fn required_field_names_the_recipe() {
        let err = sanitize_required_field("recipe-9", "title", " ".into(), true).unwrap_err();
        match err {
            CatalogError::InvalidRecipe { id, reason } => {
                assert_eq!(id, "recipe-9");
                assert_eq!(reason, "title empty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
