//! Field normalizer dispatch.

use regex::Regex;

use crate::normalize::{list, numeric, text, JunkFilter, SynonymTable};
use crate::record::{CanonicalValue, RawValue};

use super::errors::RulesetResult;

/// A named normalization applied to one field before its rules run.
///
/// Each variant owns whatever compiled state its cleaning step needs, so
/// applying a transform allocates nothing but the output. Construction
/// goes through the associated functions, which compile patterns and
/// build lookup tables once.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Display name: strip CSS fragments, collapse whitespace, trim edges.
    Name { css_fragments: Regex },
    /// Marketing copy: strip boilerplate sentences, collapse whitespace.
    Description { boilerplate: Regex },
    /// Star rating: parse and clamp to `[0, 5]`, defaulting to 0.
    Rating,
    /// Minimum deposit: reduce to a digit string.
    MinDeposit,
    /// Spread: parse and clamp to non-negative.
    Spread,
    /// Leverage: keep digits and colons, preserving empty results.
    Leverage,
    /// Regulator list: drop junk entries, dedupe.
    Regulations(JunkFilter),
    /// Platform list: fold synonyms, dedupe.
    Platforms(SynonymTable),
    /// Account type list: fold synonyms, dedupe.
    AccountTypes(SynonymTable),
}

impl Transform {
    pub fn name() -> RulesetResult<Self> {
        Ok(Self::Name {
            css_fragments: Regex::new(text::CSS_FRAGMENT_PATTERN)?,
        })
    }

    pub fn description() -> RulesetResult<Self> {
        Ok(Self::Description {
            boilerplate: Regex::new(text::BOILERPLATE_PATTERN)?,
        })
    }

    pub fn rating() -> Self {
        Self::Rating
    }

    pub fn min_deposit() -> Self {
        Self::MinDeposit
    }

    pub fn spread() -> Self {
        Self::Spread
    }

    pub fn leverage() -> Self {
        Self::Leverage
    }

    pub fn regulations() -> RulesetResult<Self> {
        Ok(Self::Regulations(JunkFilter::new()?))
    }

    pub fn platforms() -> Self {
        Self::Platforms(SynonymTable::platforms())
    }

    pub fn account_types() -> Self {
        Self::AccountTypes(SynonymTable::account_types())
    }

    /// Normalize one field value.
    ///
    /// `None` in means the field is absent from the raw record; `None`
    /// out means it is absent from the canonical record. Only `Rating`
    /// manufactures a value for an absent field.
    pub fn apply(&self, raw: Option<&RawValue>) -> Option<CanonicalValue> {
        match self {
            Self::Name { css_fragments } => {
                text::clean_name(css_fragments, raw).map(CanonicalValue::Text)
            }
            Self::Description { boilerplate } => {
                text::clean_description(boilerplate, raw).map(CanonicalValue::Text)
            }
            Self::Rating => Some(CanonicalValue::Number(numeric::clean_rating(raw))),
            Self::MinDeposit => numeric::clean_min_deposit(raw).map(CanonicalValue::Text),
            Self::Spread => numeric::clean_spread(raw).map(CanonicalValue::Number),
            Self::Leverage => numeric::clean_leverage(raw).map(CanonicalValue::Text),
            Self::Regulations(filter) => {
                list::clean_regulations(filter, raw).map(CanonicalValue::List)
            }
            Self::Platforms(table) => list::clean_tokens(table, raw).map(CanonicalValue::List),
            Self::AccountTypes(table) => list::clean_tokens(table, raw).map(CanonicalValue::List),
        }
    }
}
