//! Name and description cleaning.

use std::borrow::Cow;

use regex::Regex;

use crate::record::RawValue;

/// CSS junk that scrapers pick up when a broker name sits next to a logo.
pub(crate) const CSS_FRAGMENT_PATTERN: &str = r"(?i)url\([^)]*\)";

/// Legal boilerplate that broker pages repeat under every description.
pub(crate) const BOILERPLATE_PATTERN: &str = r"(?i)(?:\d+(?:\.\d+)?(?:\s*[-\u{2013}]\s*\d+(?:\.\d+)?)?%\s*of retail (?:investor|client) accounts lose money[^.!?]*[.!?]?|your capital is at risk\.?|risk warning:?)";

/// Collapse whitespace runs to single spaces and trim both ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Characters a cleaned name may end with.
fn is_name_tail_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '&' | '-' | '.' | '\'')
}

/// Clean a scraped display name.
///
/// Strips CSS fragments, collapses whitespace, then trims leading
/// non-letters and trailing symbols. Scraper artifacts cluster at the
/// edges of a name; interior oddities are left for the format rules to
/// flag rather than silently rewritten.
///
/// Non-text input and names that clean down to nothing yield `None`.
pub(crate) fn clean_name(css_fragments: &Regex, raw: Option<&RawValue>) -> Option<String> {
    let text = match raw {
        Some(RawValue::Text(text)) => text,
        _ => return None,
    };

    let stripped = css_fragments.replace_all(text, " ");
    let collapsed = collapse_whitespace(&stripped);
    let headless = collapsed.trim_start_matches(|ch: char| !ch.is_ascii_alphabetic());
    let trimmed = headless.trim_end_matches(|ch: char| !is_name_tail_char(ch));
    let cleaned = collapse_whitespace(trimmed);

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Clean a scraped description.
///
/// Removes known boilerplate sentences and collapses whitespace.
/// Stripping a sentence can butt the fragments around it together into
/// a new boilerplate match, so the strip reruns until nothing matches.
/// Non-text input and descriptions that clean down to nothing yield
/// `None`.
pub(crate) fn clean_description(boilerplate: &Regex, raw: Option<&RawValue>) -> Option<String> {
    let text = match raw {
        Some(RawValue::Text(text)) => text,
        _ => return None,
    };

    // Terminates: every match spans several characters and is replaced
    // by one space, so each pass strictly shortens the text.
    let mut cleaned = collapse_whitespace(text);
    loop {
        let stripped = match boilerplate.replace_all(&cleaned, " ") {
            Cow::Borrowed(_) => break,
            Cow::Owned(stripped) => stripped,
        };
        cleaned = collapse_whitespace(&stripped);
    }

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
