use std::fmt;

use adt_ir::{Literal, Name, Visibility};

use super::{Heap, Value};
use crate::ids::{TypeId, VariantId};
use crate::registry::{FieldDef, SharedDescriptor, VariantDescriptor};

/// Tag plus promoted fields. Never mutated after allocation.
struct EnumRecord {
    descriptor: SharedDescriptor,
    fields: Box<[Value]>,
}

/// A value of a registered enum type.
///
/// Cloning shares the record. Two handles are identical (`is_identical`)
/// iff they share a record; they are equal (`==`) iff they carry the same
/// variant and equal fields.
#[derive(Clone)]
pub struct EnumValue(Heap<EnumRecord>);

impl EnumValue {
    /// Allocate a record. Only the registry (singletons) and the
    /// construction engine call this.
    pub(crate) fn new(descriptor: SharedDescriptor, fields: Box<[Value]>) -> Self {
        EnumValue(Heap::new(EnumRecord { descriptor, fields }))
    }

    /// The variant this value is tagged with.
    #[inline]
    pub fn descriptor(&self) -> &VariantDescriptor {
        &self.0.descriptor
    }

    #[inline]
    pub fn shared_descriptor(&self) -> &SharedDescriptor {
        &self.0.descriptor
    }

    #[inline]
    pub fn variant_id(&self) -> VariantId {
        self.0.descriptor.id
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.0.descriptor.id.owner()
    }

    pub fn type_name(&self) -> &'static str {
        self.0.descriptor.owner_label
    }

    pub fn variant_name(&self) -> &'static str {
        self.0.descriptor.label
    }

    /// Position of the variant in declaration order.
    pub fn ordinal(&self) -> usize {
        self.0.descriptor.id.index()
    }

    /// All field values in declaration order, private ones included.
    ///
    /// Empty for unit and primitive-backed variants.
    pub fn fields(&self) -> &[Value] {
        &self.0.fields
    }

    /// A public field by interned name.
    pub fn field(&self, name: Name) -> Option<&Value> {
        self.field_where(|def| def.name == name, false)
    }

    /// A public field by name.
    pub fn field_by_label(&self, label: &str) -> Option<&Value> {
        self.field_where(|def| def.label == label, false)
    }

    /// A field by name regardless of visibility, for the enum's own methods.
    pub fn own_field(&self, label: &str) -> Option<&Value> {
        self.field_where(|def| def.label == label, true)
    }

    fn field_where(
        &self,
        pred: impl Fn(&FieldDef) -> bool,
        include_private: bool,
    ) -> Option<&Value> {
        let index = self.descriptor().fields().iter().position(|def| {
            pred(def) && (include_private || def.visibility == Visibility::Public)
        })?;
        self.0.fields.get(index)
    }

    /// The backing literal of a primitive-backed variant.
    pub fn literal(&self) -> Option<&Literal> {
        self.descriptor().literal()
    }

    /// Reference identity: both handles share one record.
    #[inline]
    pub fn is_identical(&self, other: &EnumValue) -> bool {
        Heap::ptr_eq(&self.0, &other.0)
    }

    pub fn is_unit(&self) -> bool {
        self.descriptor().is_unit()
    }

    pub fn is_associated(&self) -> bool {
        self.descriptor().is_associated()
    }

    pub fn is_primitive_backed(&self) -> bool {
        self.descriptor().is_primitive_backed()
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.is_identical(other)
            || (self.variant_id() == other.variant_id() && self.fields() == other.fields())
    }
}

/// String conversion: variant hook, then type hook (both resolved into the
/// descriptor at registration), then the backing literal, then the bare
/// variant name.
impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.descriptor();
        if let Some(hook) = &descriptor.string_hook {
            return f.write_str(&hook.call(self));
        }
        match descriptor.literal() {
            Some(literal) => fmt::Display::fmt(literal, f),
            None => f.write_str(descriptor.label),
        }
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.type_name(), self.variant_name())?;
        if self.is_associated() {
            f.write_str("(")?;
            for (i, value) in self.fields().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value:?}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
