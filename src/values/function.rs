use crate::debugging::{DebugRepresentation, Renderer};
use crate::object_pool::ObjectPointer;
use crate::primordials::Realm;
use crate::result::ChainResult;
use crate::values::value::Value;
use std::fmt::{Debug, Formatter};

/// Signature of every behavior member, `init` included. `target` is the
/// object the member was invoked on, `args` the caller's arguments forwarded
/// verbatim, `context` the value captured when the function was attached.
pub type NativeFn = fn(
    realm: &mut Realm,
    target: ObjectPointer,
    args: &[Value],
    context: Option<&Value>,
) -> ChainResult<Option<Value>>;

#[derive(Clone)]
pub struct NativeFunction {
    pub op: NativeFn,
    pub context: Option<Box<Value>>,
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.op as usize == other.op as usize && self.context == other.context
    }
}

impl NativeFunction {
    pub fn new(op: NativeFn) -> NativeFunction {
        NativeFunction { op, context: None }
    }

    pub fn with_context(op: NativeFn, context: impl Into<Value>) -> NativeFunction {
        NativeFunction {
            op,
            context: Some(Box::new(context.into())),
        }
    }

    pub fn apply(
        &self,
        realm: &mut Realm,
        target: ObjectPointer,
        args: &[Value],
    ) -> ChainResult<Option<Value>> {
        let context = match &self.context {
            Some(value) => Some(value.as_ref()),
            None => None,
        };

        (self.op)(realm, target, args, context)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl DebugRepresentation for NativeFunction {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        renderer.function("native")
    }
}
