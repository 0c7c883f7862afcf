//! Construction of associated-variant values.
//!
//! Each call checks arity and field types against the descriptor, then
//! allocates a fresh record. No shared state is touched, so construction
//! runs in parallel without locking.

use adt_diagnostic::ConstructionError;
use adt_ir::StringLookup;
use smallvec::SmallVec;

use crate::registry::{VariantDescriptor, VariantKind};
use crate::value::{EnumValue, Value};
use crate::SharedDescriptor;

/// Field values for a construction call.
#[derive(Clone, Debug)]
pub enum Args<'a> {
    /// Values in field declaration order.
    Positional(Vec<Value>),
    /// Values keyed by field name, in any order.
    Named(Vec<(&'a str, Value)>),
}

impl Args<'_> {
    pub fn len(&self) -> usize {
        match self {
            Args::Positional(values) => values.len(),
            Args::Named(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for Args<'_> {
    fn from(values: Vec<Value>) -> Self {
        Args::Positional(values)
    }
}

/// Allocate a new value of an associated variant.
///
/// Two calls with equal arguments produce equal, never identical, values.
pub fn make_associated(
    interner: &impl StringLookup,
    descriptor: &SharedDescriptor,
    args: Args<'_>,
) -> Result<EnumValue, ConstructionError> {
    let VariantKind::Associated(fields) = &descriptor.kind else {
        return Err(ConstructionError::NotConstructible {
            variant: descriptor.qualified_name(),
        });
    };

    let values = match args {
        Args::Positional(values) => {
            if values.len() != fields.len() {
                return Err(arity(descriptor, values.len()));
            }
            values
        }
        Args::Named(pairs) => {
            let given = pairs.len();
            let mut slots: SmallVec<[Option<Value>; 4]> =
                (0..fields.len()).map(|_| None).collect();
            for (label, value) in pairs {
                let index = fields
                    .iter()
                    .position(|field| field.label == label)
                    .ok_or_else(|| ConstructionError::UnknownField {
                        variant: descriptor.qualified_name(),
                        field: label.to_owned(),
                    })?;
                if slots[index].replace(value).is_some() {
                    return Err(ConstructionError::DuplicateArgument {
                        variant: descriptor.qualified_name(),
                        field: label.to_owned(),
                    });
                }
            }
            slots
                .into_iter()
                .collect::<Option<Vec<Value>>>()
                .ok_or_else(|| arity(descriptor, given))?
        }
    };

    if let Some((field, value)) = fields
        .iter()
        .zip(&values)
        .find(|(field, value)| !value.matches_type(field.ty))
    {
        return Err(ConstructionError::FieldType {
            variant: descriptor.qualified_name(),
            field: field.label.to_owned(),
            expected: field.ty.display(interner),
            got: value.type_name().to_owned(),
        });
    }

    tracing::trace!(variant = descriptor.label, "constructed associated value");
    Ok(EnumValue::new(descriptor.clone(), values.into_boxed_slice()))
}

fn arity(descriptor: &VariantDescriptor, got: usize) -> ConstructionError {
    ConstructionError::Arity {
        variant: descriptor.qualified_name(),
        expected: descriptor.arity(),
        got,
    }
}
