//! In-page anchor links.

/// Element id an in-page link points at, or `None` when there is nothing to scroll to.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_fragment_links() {
        assert_eq!(anchor_target("#heatmap"), Some("heatmap"));
        assert_eq!(anchor_target(" #trends "), Some("trends"));
    }

    #[test]
    fn ignores_bare_hash_and_external_links() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.org/#x"), None);
        assert_eq!(anchor_target("#two words"), None);
    }
}
