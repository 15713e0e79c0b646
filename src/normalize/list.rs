//! List cleaning: junk filtering, synonym folding, deduplication.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::record::RawValue;

use super::text::collapse_whitespace;

/// Words that carry no meaning on their own in a regulator list.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "on", "at", "to", "by", "for", "with", "from",
    "as", "is", "are",
];

/// Class names and asset words that scrapers lift out of page markup.
const CSS_TOKENS: &[&str] = &[
    "img",
    "image",
    "logo",
    "icon",
    "svg",
    "sprite",
    "thumbnail",
    "container",
    "wrapper",
    "row",
    "col",
    "hidden",
    "visible",
    "active",
    "disabled",
    "lazy",
    "loading",
    "broker-logo",
    "img-fluid",
    "img-responsive",
    "aligncenter",
    "alignnone",
];

/// Recognizes scraper junk in free-text list entries.
///
/// An entry is junk when it is empty, carries no letters, consists only
/// of stop words, or looks like page markup rather than content: a CSS
/// length, a URL, an image filename, a lazy-loading artifact, a code
/// fragment, or a known class name.
#[derive(Debug, Clone)]
pub struct JunkFilter {
    pixel_value: Regex,
    url_like: Regex,
    image_file: Regex,
    lazy_load: Regex,
    code_fragment: Regex,
}

impl JunkFilter {
    /// Compile the junk patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pixel_value: Regex::new(r"^\d+(?:\.\d+)?(?:px|em|rem|vh|vw|%)$")?,
            url_like: Regex::new(r"^(?:https?:)?//|^www\.|://")?,
            image_file: Regex::new(r"\.(?:png|jpe?g|gif|svg|webp|ico|bmp)$")?,
            lazy_load: Regex::new(r"lazy[\s-]*load")?,
            code_fragment: Regex::new(r"[{}<>;=]")?,
        })
    }

    /// Whether a trimmed entry should be discarded.
    pub fn is_junk(&self, entry: &str) -> bool {
        if entry.is_empty() {
            return true;
        }
        if !entry.chars().any(char::is_alphabetic) {
            return true;
        }

        let lower = entry.to_lowercase();
        if self.pixel_value.is_match(&lower)
            || self.url_like.is_match(&lower)
            || self.image_file.is_match(&lower)
            || self.lazy_load.is_match(&lower)
            || self.code_fragment.is_match(entry)
        {
            return true;
        }
        if CSS_TOKENS.contains(&lower.as_str()) {
            return true;
        }

        entry.split_whitespace().all(|word| {
            let word = word.to_lowercase();
            STOP_WORDS.contains(&word.as_str())
        })
    }
}

/// Alias-to-canonical-form table for short list tokens.
///
/// Lookups are keyed by lowercased alias, so `"MT4"`, `"mt4"`, and
/// `"Mt4"` all resolve to the same canonical form.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: BTreeMap<String, String>,
}

impl SynonymTable {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), canonical.to_string()))
            .collect();
        Self { entries }
    }

    /// Trading platform aliases.
    pub fn platforms() -> Self {
        Self::from_pairs([
            ("mt4", "MetaTrader 4"),
            ("metatrader4", "MetaTrader 4"),
            ("metatrader 4", "MetaTrader 4"),
            ("meta trader 4", "MetaTrader 4"),
            ("mt5", "MetaTrader 5"),
            ("metatrader5", "MetaTrader 5"),
            ("metatrader 5", "MetaTrader 5"),
            ("meta trader 5", "MetaTrader 5"),
            ("ctrader", "cTrader"),
            ("c trader", "cTrader"),
            ("webtrader", "Web Trader"),
            ("web trader", "Web Trader"),
            ("mobile trader", "Mobile Trader"),
        ])
    }

    /// Account type aliases, folding the bare tier name and the
    /// `"<tier> account"` spelling onto one canonical form.
    pub fn account_types() -> Self {
        Self::from_pairs([
            ("standard", "Standard Account"),
            ("standard account", "Standard Account"),
            ("islamic", "Islamic Account"),
            ("islamic account", "Islamic Account"),
            ("swap-free", "Islamic Account"),
            ("mini", "Mini Account"),
            ("mini account", "Mini Account"),
            ("micro", "Micro Account"),
            ("micro account", "Micro Account"),
            ("vip", "VIP Account"),
            ("vip account", "VIP Account"),
            ("ecn", "ECN Account"),
            ("ecn account", "ECN Account"),
            ("stp", "STP Account"),
            ("stp account", "STP Account"),
        ])
    }

    /// Look up the canonical form for a lowercased token.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coerce a raw value to list entries.
///
/// Lone text becomes a single-entry list; anything else that is not
/// already a list degrades to no entries.
fn coerce_entries(raw: &RawValue) -> Vec<String> {
    match raw {
        RawValue::List(items) => items.clone(),
        RawValue::Text(text) => vec![text.clone()],
        RawValue::Number(_) => Vec::new(),
    }
}

/// Clean a regulator list: trim, drop junk, dedupe keeping first
/// occurrence. Entries keep their original casing because regulator
/// abbreviations are case-sensitive names.
pub(crate) fn clean_regulations(filter: &JunkFilter, raw: Option<&RawValue>) -> Option<Vec<String>> {
    let raw = raw?;
    let mut seen = BTreeSet::new();
    let mut kept = Vec::new();

    for entry in coerce_entries(raw) {
        let entry = entry.trim();
        if filter.is_junk(entry) {
            continue;
        }
        if seen.insert(entry.to_string()) {
            kept.push(entry.to_string());
        }
    }

    Some(kept)
}

fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for (index, word) in token.split_whitespace().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Clean a token list (platforms, account types): collapse whitespace
/// and lowercase, drop tokens of two characters or fewer, fold known
/// synonyms onto their canonical form, title-case the rest, dedupe
/// keeping first occurrence.
pub(crate) fn clean_tokens(table: &SynonymTable, raw: Option<&RawValue>) -> Option<Vec<String>> {
    let raw = raw?;
    let mut seen = BTreeSet::new();
    let mut kept = Vec::new();

    for entry in coerce_entries(raw) {
        // Aliases are keyed on single-spaced forms, so interior runs of
        // whitespace must fold before the lookup.
        let token = collapse_whitespace(&entry).to_lowercase();
        if token.chars().count() <= 2 {
            continue;
        }
        let canonical = match table.resolve(&token) {
            Some(known) => known.to_string(),
            None => title_case(&token),
        };
        if seen.insert(canonical.clone()) {
            kept.push(canonical);
        }
    }

    Some(kept)
}
