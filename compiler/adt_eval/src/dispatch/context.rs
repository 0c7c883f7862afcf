use adt_diagnostic::AdtResult;
use adt_ir::StringInterner;
use adt_types::{EnumValue, MethodContext, Value};

use crate::Runtime;

/// Context handed to a running method body.
///
/// Carries the nesting depth so calls made from inside a body are counted
/// against the runtime's depth limit.
pub(crate) struct CallContext<'r> {
    runtime: &'r Runtime,
    depth: usize,
}

impl<'r> CallContext<'r> {
    pub(crate) fn new(runtime: &'r Runtime, depth: usize) -> Self {
        CallContext { runtime, depth }
    }
}

impl MethodContext for CallContext<'_> {
    fn interner(&self) -> &StringInterner {
        self.runtime.interner()
    }

    fn unit(&self, type_name: &str, variant: &str) -> AdtResult<EnumValue> {
        self.runtime.make_unit(type_name, variant)
    }

    fn invoke(&self, receiver: &EnumValue, method: &str, args: &[Value]) -> AdtResult<Value> {
        self.runtime.invoke_at(self.depth, receiver, method, args)
    }
}
