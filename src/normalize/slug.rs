//! URL slug derivation.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, keeps ASCII letters and digits, folds runs of whitespace
/// and hyphens into a single hyphen, and drops every other character.
/// Hyphens never appear at the edges and never double up, so the result
/// is stable under repeated application.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("Admiral Markets"), "admiral-markets");
    }

    #[test]
    fn test_drops_punctuation_without_splitting_words() {
        assert_eq!(slugify("Broker's Best & Co."), "brokers-best-co");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("IC  Markets -- Global"), "ic-markets-global");
    }

    #[test]
    fn test_no_edge_hyphens() {
        assert_eq!(slugify("  Admirals  "), "admirals");
        assert_eq!(slugify("- Admirals -"), "admirals");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Caf\u{e9} Trade\u{2122}"), "caf-trade");
    }

    #[test]
    fn test_idempotent() {
        let once = slugify("Broker's Best & Co.");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_empty_and_symbol_only_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
