//! Record model for the intake pipeline.
//!
//! Two record shapes flow through validation:
//!
//! - [`RawRecord`] is what a scraper hands us: string-keyed fields whose
//!   values are text, numbers, or lists of text, in whatever state the
//!   source page left them.
//! - [`CanonicalRecord`] is what validation emits: the same keys after
//!   normalization, stamped with a URL slug and a validation timestamp.
//!
//! # Design Principles
//!
//! - Closed value types: a field is text, a number, or a list of text.
//!   Anything else never enters the pipeline.
//! - Absence is modeled by a missing key, never by a sentinel value.
//! - Canonical records keep every raw key. A value the normalizer had to
//!   discard survives as an explicit null so no field silently vanishes.
//! - BTreeMap storage for deterministic field ordering.

mod canonical;
mod raw;

pub use canonical::{CanonicalRecord, CanonicalValue};
pub use raw::{RawRecord, RawValue};

/// Field names understood by the standard rule catalog.
pub mod fields {
    pub const NAME: &str = "name";
    pub const RATING: &str = "rating";
    pub const DESCRIPTION: &str = "description";
    pub const MIN_DEPOSIT: &str = "minDeposit";
    pub const SPREAD: &str = "spread";
    pub const LEVERAGE: &str = "leverage";
    pub const REGULATIONS: &str = "regulations";
    pub const PLATFORMS: &str = "platforms";
    pub const ACCOUNT_TYPES: &str = "accountTypes";
    pub const SOURCE_FILE: &str = "sourceFile";
}
