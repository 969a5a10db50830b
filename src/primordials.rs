use crate::names::{Name, NamePool};
use crate::object_pool::{ObjectPointer, ObjectPool, ProtoObject};
use crate::result::ChainResult;
use crate::values::function::NativeFunction;
use crate::values::value::Value;

/// Pre-interned member names.
#[derive(Clone, Copy)]
pub struct Constants {
    pub init: Name,
}

/// Owns the object and name pools plus the two primordial objects: the
/// terminal base object every chain ends at, and the root prototype all
/// others derive from. Both are built once and never change parents.
#[derive(Clone)]
pub struct Realm {
    pub(crate) objects: ObjectPool,
    pub(crate) names: NamePool,
    pub(crate) constants: Constants,
    object_base: ObjectPointer,
    proto: ObjectPointer,
}

impl Default for Realm {
    fn default() -> Self {
        Realm::new()
    }
}

fn default_init(
    _realm: &mut Realm,
    _target: ObjectPointer,
    _args: &[Value],
    _context: Option<&Value>,
) -> ChainResult<Option<Value>> {
    Ok(None)
}

impl Realm {
    pub fn new() -> Realm {
        let mut objects = ObjectPool::new();
        let mut names = NamePool::new();

        let constants = Constants {
            init: names.intern("init"),
        };

        let object_base = ProtoObject::builder()
            .with_name(names.intern("Object"))
            .build(&mut objects);

        let proto = ProtoObject::builder()
            .with_parent(object_base)
            .with_name(names.intern("Proto"))
            .with_member(constants.init, NativeFunction::new(default_init))
            .build(&mut objects);

        Realm {
            objects,
            names,
            constants,
            object_base,
            proto,
        }
    }

    /// The root prototype. Every prototype and instance this realm produces
    /// descends from it.
    pub fn proto(&self) -> ObjectPointer {
        self.proto
    }

    /// The terminal base object at which every delegation chain ends.
    pub fn object_base(&self) -> ObjectPointer {
        self.object_base
    }

    pub fn constants(&self) -> Constants {
        self.constants
    }

    pub fn intern(&mut self, value: impl AsRef<str>) -> Name {
        self.names.intern(value)
    }
}
