//! Match evaluation over enum values.
//!
//! Two forms, kept distinct:
//! - `match_identity`: patterns are singletons (unit or primitive-backed
//!   variants); an arm fires iff the value is the very same record.
//! - `match_type`: patterns are variant descriptors; an arm fires iff the
//!   value carries that variant, whatever its fields.
//!
//! Arms are tried in the order they were added. With no matching arm and no
//! default the match fails with `NonExhaustiveMatch`. Patterns must belong
//! to the value's own type.

use adt_diagnostic::DispatchError;
use adt_types::{EnumType, EnumValue, SharedDescriptor, VariantId};

/// Handler run by the arm that matches. Consumed on use.
pub type ArmHandler<'h, T> = Box<dyn FnOnce(&EnumValue) -> T + 'h>;

/// A pattern an arm can be keyed on.
pub trait MatchPattern {
    /// The variant this pattern covers.
    fn variant_id(&self) -> VariantId;

    /// For diagnostics.
    fn describe(&self) -> String;
}

impl MatchPattern for EnumValue {
    fn variant_id(&self) -> VariantId {
        EnumValue::variant_id(self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl MatchPattern for SharedDescriptor {
    fn variant_id(&self) -> VariantId {
        self.id
    }

    fn describe(&self) -> String {
        self.qualified_name()
    }
}

/// Ordered arms plus an optional default.
pub struct MatchArms<'h, P, T> {
    arms: Vec<(P, ArmHandler<'h, T>)>,
    default: Option<ArmHandler<'h, T>>,
}

impl<'h, P: MatchPattern, T> MatchArms<'h, P, T> {
    pub fn new() -> Self {
        MatchArms {
            arms: Vec::new(),
            default: None,
        }
    }

    /// Append an arm.
    #[must_use]
    pub fn arm(mut self, pattern: P, handler: impl FnOnce(&EnumValue) -> T + 'h) -> Self {
        self.arms.push((pattern, Box::new(handler)));
        self
    }

    /// Set the default arm, run when no other arm matches.
    #[must_use]
    pub fn otherwise(mut self, handler: impl FnOnce(&EnumValue) -> T + 'h) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Variants of `ty` no arm covers. Empty when a default is present.
    pub fn uncovered_variants<'t>(&self, ty: &'t EnumType) -> Vec<&'t SharedDescriptor> {
        if self.has_default() {
            return Vec::new();
        }
        ty.variants()
            .iter()
            .filter(|descriptor| {
                !self
                    .arms
                    .iter()
                    .any(|(pattern, _)| pattern.variant_id() == descriptor.id)
            })
            .collect()
    }

    /// Reject patterns from another type.
    fn check_owners(&self, value: &EnumValue) -> Result<(), DispatchError> {
        match self
            .arms
            .iter()
            .find(|(pattern, _)| pattern.variant_id().owner() != value.type_id())
        {
            Some((pattern, _)) => Err(DispatchError::MatchKindMismatch {
                reason: format!(
                    "pattern `{}` does not belong to `{}`",
                    pattern.describe(),
                    value.type_name()
                ),
            }),
            None => Ok(()),
        }
    }
}

impl<P: MatchPattern, T> Default for MatchArms<'_, P, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Match a unit or primitive-backed value against singleton patterns by
/// reference identity.
pub fn match_identity<T>(
    value: &EnumValue,
    arms: MatchArms<'_, EnumValue, T>,
) -> Result<T, DispatchError> {
    if value.is_associated() {
        return Err(DispatchError::MatchKindMismatch {
            reason: format!("identity match on associated value `{value:?}`; match on its type"),
        });
    }
    if let Some((pattern, _)) = arms.arms.iter().find(|(pattern, _)| pattern.is_associated()) {
        return Err(DispatchError::MatchKindMismatch {
            reason: format!("pattern `{pattern:?}` is not a singleton"),
        });
    }
    arms.check_owners(value)?;

    let MatchArms { arms, default } = arms;
    for (pattern, handler) in arms {
        if pattern.is_identical(value) {
            return Ok(handler(value));
        }
    }
    fall_through(value, default)
}

/// Match any enum value against variant descriptors, ignoring fields.
pub fn match_type<T>(
    value: &EnumValue,
    arms: MatchArms<'_, SharedDescriptor, T>,
) -> Result<T, DispatchError> {
    arms.check_owners(value)?;

    let MatchArms { arms, default } = arms;
    for (pattern, handler) in arms {
        if pattern.id == value.variant_id() {
            return Ok(handler(value));
        }
    }
    fall_through(value, default)
}

fn fall_through<T>(
    value: &EnumValue,
    default: Option<ArmHandler<'_, T>>,
) -> Result<T, DispatchError> {
    match default {
        Some(handler) => Ok(handler(value)),
        None => Err(DispatchError::NonExhaustiveMatch {
            type_name: value.type_name().to_owned(),
            variant: value.variant_name().to_owned(),
        }),
    }
}
