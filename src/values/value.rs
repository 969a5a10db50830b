use crate::debugging::{DebugRepresentation, Renderer};
use crate::names::Name;
use crate::object_pool::ObjectPointer;
use crate::values::function::NativeFunction;
use std::fmt::Write;

/// A member value. Objects compare by handle, never structurally, which is
/// the reference-equality identity the delegation model is built on.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Boolean(bool),
    Float(f64),
    String(Name),
    Object(ObjectPointer),
    Function(NativeFunction),
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Name> for Value {
    fn from(value: Name) -> Self {
        Value::String(value)
    }
}

impl From<ObjectPointer> for Value {
    fn from(value: ObjectPointer) -> Self {
        Value::Object(value)
    }
}

impl From<NativeFunction> for Value {
    fn from(value: NativeFunction) -> Self {
        Value::Function(value)
    }
}

impl DebugRepresentation for Value {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        match self {
            Value::Undefined => renderer.literal("undefined"),
            Value::Boolean(true) => renderer.literal("true"),
            Value::Boolean(false) => renderer.literal("false"),
            Value::Float(value) => {
                let mut buffer = String::new();
                buffer.write_fmt(format_args!("{}", value))?;
                renderer.literal(&buffer)
            }
            Value::String(name) => {
                let realm = renderer.realm;
                renderer.string_literal(realm.names.get(*name))
            }
            Value::Object(pointer) => renderer.render(pointer),
            Value::Function(function) => function.render(renderer),
        }
    }
}
