//! Rule tables for record validation.
//!
//! A [`RuleSet`] pairs two ordered tables: normalizers, which rewrite one
//! field each before anything is judged, and rules, which judge the
//! rewritten values. Rules come in three kinds with different gating and
//! severity; see [`RuleKind`].
//!
//! # Design Principles
//!
//! - Everything is resolved up front: patterns compile and tables build
//!   when the set is constructed, and construction is the only place
//!   errors can occur.
//! - Tagged variants over trait objects. The closed [`Check`] and
//!   [`Transform`] enums keep rule sets inspectable, cloneable, and
//!   cheap to share.
//! - Declaration order is evaluation order.

mod check;
mod errors;
mod ruleset;
mod transform;

pub use check::{Check, RuleKind};
pub use errors::{RulesetError, RulesetResult};
pub use ruleset::{FieldRule, RuleSet, RuleSetBuilder};
pub use transform::Transform;
