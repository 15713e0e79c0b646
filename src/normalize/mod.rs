//! Field normalizers.
//!
//! Pure cleaning functions and the lookup tables they consult. The rule
//! subsystem wires these to field names; nothing here knows about rules,
//! records as a whole, or verdicts.
//!
//! # Design Principles
//!
//! - Normalizers never fail. Input of the wrong shape degrades to a safe
//!   default (absent value or empty list) instead of erroring, because a
//!   malformed scrape must never abort a batch.
//! - Idempotent by construction: feeding a normalizer its own output
//!   returns that output unchanged.
//! - All regexes are compiled once, when a rule set is built, never per
//!   record.

pub(crate) mod list;
pub(crate) mod numeric;
mod slug;
pub(crate) mod text;

pub use list::{JunkFilter, SynonymTable};
pub use slug::slugify;
