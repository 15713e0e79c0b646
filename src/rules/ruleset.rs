//! Rule tables and the standard catalog.

use regex::Regex;

use crate::record::fields;

use super::check::{Check, RuleKind};
use super::errors::{RulesetError, RulesetResult};
use super::transform::Transform;

/// Pattern a cleaned name must match to pass its format rule.
const NAME_CHARSET_PATTERN: &str = r"^[A-Za-z0-9 &.'-]+$";
/// Pattern a cleaned minimum deposit must match.
const MIN_DEPOSIT_PATTERN: &str = r"^\d+$";
/// Pattern a cleaned leverage string must match.
const LEVERAGE_PATTERN: &str = r"^[\d:]+$";

/// One rule: a field name, a kind that decides gating and severity, a
/// check, and the message attached to issues when the check fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: String,
    pub kind: RuleKind,
    pub check: Check,
    pub message: String,
}

impl FieldRule {
    pub fn new(
        field: impl Into<String>,
        kind: RuleKind,
        check: Check,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            check,
            message: message.into(),
        }
    }
}

/// Builder for [`RuleSet`].
///
/// Registration order is evaluation order, and issues surface in that
/// same order, so a rule set reads top to bottom like the report it
/// produces. Duplicate registrations are rejected here, at build time,
/// rather than surprising anyone during validation.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<FieldRule>,
    transforms: Vec<(String, Transform)>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RulesetError::DuplicateRule`] when the field already has
    /// a rule of the same kind. A field may carry one rule of each kind.
    pub fn register_rule(&mut self, rule: FieldRule) -> RulesetResult<()> {
        if self
            .rules
            .iter()
            .any(|existing| existing.field == rule.field && existing.kind == rule.kind)
        {
            return Err(RulesetError::DuplicateRule {
                field: rule.field,
                kind: rule.kind,
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Register a normalizer for a field.
    ///
    /// # Errors
    ///
    /// Returns [`RulesetError::DuplicateTransform`] when the field
    /// already has one; a field is normalized exactly once per record.
    pub fn register_transform(
        &mut self,
        field: impl Into<String>,
        transform: Transform,
    ) -> RulesetResult<()> {
        let field = field.into();
        if self.transforms.iter().any(|(existing, _)| *existing == field) {
            return Err(RulesetError::DuplicateTransform { field });
        }
        self.transforms.push((field, transform));
        Ok(())
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            rules: self.rules,
            transforms: self.transforms,
        }
    }
}

/// An immutable, fully compiled set of rules and normalizers.
///
/// All patterns and lookup tables are resolved at construction. After
/// that the set is read-only and shared freely across threads.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
    transforms: Vec<(String, Transform)>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// The standard catalog for scraped broker records.
    ///
    /// Required rules block validity; format and business rules only
    /// warn. Note that two of the format rules (`minDeposit`, `spread`)
    /// restate what their normalizers already guarantee. They stay in
    /// the catalog so custom normalizers still get checked.
    ///
    /// # Errors
    ///
    /// Returns [`RulesetError::InvalidPattern`] if a catalog pattern
    /// fails to compile.
    pub fn standard() -> RulesetResult<Self> {
        let mut builder = RuleSetBuilder::new();

        builder.register_transform(fields::NAME, Transform::name()?)?;
        builder.register_transform(fields::DESCRIPTION, Transform::description()?)?;
        builder.register_transform(fields::RATING, Transform::rating())?;
        builder.register_transform(fields::MIN_DEPOSIT, Transform::min_deposit())?;
        builder.register_transform(fields::SPREAD, Transform::spread())?;
        builder.register_transform(fields::LEVERAGE, Transform::leverage())?;
        builder.register_transform(fields::REGULATIONS, Transform::regulations()?)?;
        builder.register_transform(fields::PLATFORMS, Transform::platforms())?;
        builder.register_transform(fields::ACCOUNT_TYPES, Transform::account_types())?;

        builder.register_rule(FieldRule::new(
            fields::NAME,
            RuleKind::Required,
            Check::PresentText { min_len: 2 },
            "must be text longer than 2 characters",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::RATING,
            RuleKind::Required,
            Check::BoundedNumber { min: 0.0, max: 5.0 },
            "must be a number between 0 and 5",
        ))?;

        builder.register_rule(FieldRule::new(
            fields::NAME,
            RuleKind::Format,
            Check::TextMatches(Regex::new(NAME_CHARSET_PATTERN)?),
            "contains characters outside letters, digits, spaces, and &.'-",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::DESCRIPTION,
            RuleKind::Format,
            Check::TextLength { min: 50, max: 2000 },
            "length must be between 50 and 2000 characters",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::MIN_DEPOSIT,
            RuleKind::Format,
            Check::TextMatches(Regex::new(MIN_DEPOSIT_PATTERN)?),
            "must be a whole number of digits",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::SPREAD,
            RuleKind::Format,
            Check::NonNegativeNumber,
            "must be a non-negative number",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::LEVERAGE,
            RuleKind::Format,
            Check::TextMatches(Regex::new(LEVERAGE_PATTERN)?),
            "must contain only digits and ':' like 1:500",
        ))?;

        builder.register_rule(FieldRule::new(
            fields::REGULATIONS,
            RuleKind::Business,
            Check::NonEmptyList,
            "no regulator entries survived cleaning",
        ))?;
        builder.register_rule(FieldRule::new(
            fields::PLATFORMS,
            RuleKind::Business,
            Check::NonEmptyList,
            "no platform entries survived cleaning",
        ))?;

        Ok(builder.build())
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Normalizers in registration order.
    pub fn transforms(&self) -> impl Iterator<Item = (&str, &Transform)> {
        self.transforms
            .iter()
            .map(|(field, transform)| (field.as_str(), transform))
    }

    /// The normalizer registered for a field, if any.
    pub fn transform_for(&self, field: &str) -> Option<&Transform> {
        self.transforms
            .iter()
            .find(|(existing, _)| existing == field)
            .map(|(_, transform)| transform)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }
}
