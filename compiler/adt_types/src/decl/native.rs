//! Native method bodies and string-conversion hooks.

#![expect(
    clippy::disallowed_types,
    reason = "Arc shares one body between a declaration and its descriptors"
)]

use std::fmt;
use std::sync::Arc;

use adt_diagnostic::AdtResult;
use adt_ir::StringInterner;

use crate::{EnumValue, Value};

/// Services available to a running method body.
///
/// Implemented by the evaluator; lets bodies hand back sibling singletons
/// (state transitions) and call other methods on any enum value.
pub trait MethodContext {
    /// The interner all names of the running registry live in.
    fn interner(&self) -> &StringInterner;

    /// The singleton of a unit or primitive-backed variant.
    fn unit(&self, type_name: &str, variant: &str) -> AdtResult<EnumValue>;

    /// Invoke a method through the normal dispatch path.
    fn invoke(&self, receiver: &EnumValue, method: &str, args: &[Value]) -> AdtResult<Value>;
}

type MethodFn = dyn Fn(&dyn MethodContext, &EnumValue, &[Value]) -> AdtResult<Value> + Send + Sync;

/// A method body: receiver plus already type-checked arguments.
#[derive(Clone)]
pub struct NativeMethod(Arc<MethodFn>);

impl NativeMethod {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&dyn MethodContext, &EnumValue, &[Value]) -> AdtResult<Value> + Send + Sync + 'static,
    {
        NativeMethod(Arc::new(body))
    }

    /// A body that ignores its inputs and returns `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        NativeMethod::new(move |_, _, _| Ok(value.clone()))
    }

    #[inline]
    pub fn call(
        &self,
        cx: &dyn MethodContext,
        receiver: &EnumValue,
        args: &[Value],
    ) -> AdtResult<Value> {
        (self.0)(cx, receiver, args)
    }
}

impl fmt::Debug for NativeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeMethod(..)")
    }
}

/// Overrides the default string conversion of a variant or a whole type.
///
/// A hook must not format its argument with `Display`, which would call
/// the hook again; use `variant_name()` or the fields instead.
#[derive(Clone)]
pub struct StringHook(Arc<dyn Fn(&EnumValue) -> String + Send + Sync>);

impl StringHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&EnumValue) -> String + Send + Sync + 'static,
    {
        StringHook(Arc::new(hook))
    }

    #[inline]
    pub fn call(&self, value: &EnumValue) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for StringHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StringHook(..)")
    }
}
