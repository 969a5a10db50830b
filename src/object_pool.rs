use crate::debugging::{DebugRepresentation, Renderer, Representation};
use crate::names::Name;
use crate::pool::{Pool, PoolPointer};
use crate::primordials::Realm;
use crate::result::{ChainResult, InternalError};
use crate::values::value::Value;
use ahash::AHashMap;
use log::trace;
use std::fmt::{Display, Formatter, Write};

/// A pooled object: a member map, an optional delegation parent and an
/// optional debug name. Prototypes and instances share this one shape; the
/// difference between them is purely how they are used.
#[derive(Clone, Debug, Default)]
pub(crate) struct ProtoObject {
    pub(crate) members: AHashMap<Name, Value>,
    pub(crate) parent: Option<ObjectPointer>,
    pub(crate) name: Option<Name>,
}

impl ProtoObject {
    pub(crate) fn builder() -> ProtoObjectBuilder {
        ProtoObjectBuilder {
            inner: ProtoObject::default(),
        }
    }
}

pub(crate) struct ProtoObjectBuilder {
    inner: ProtoObject,
}

impl ProtoObjectBuilder {
    pub fn with_parent(mut self, parent: ObjectPointer) -> Self {
        self.inner.parent = Some(parent);
        self
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.inner.name = Some(name);
        self
    }

    pub fn with_member(mut self, key: Name, value: impl Into<Value>) -> Self {
        self.inner.members.insert(key, value.into());
        self
    }

    pub(crate) fn build(self, pool: &mut ObjectPool) -> ObjectPointer {
        pool.allocate(self.inner)
    }
}

#[derive(Clone)]
pub struct ObjectPool {
    objects: Pool<ProtoObject>,
}

impl ObjectPool {
    pub(crate) fn new() -> ObjectPool {
        ObjectPool {
            objects: Pool::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, index: ObjectPointer) -> &ProtoObject {
        &self.objects[index.inner]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, index: ObjectPointer) -> &mut ProtoObject {
        &mut self.objects[index.inner]
    }

    #[inline(always)]
    pub(crate) fn allocate(&mut self, object: ProtoObject) -> ObjectPointer {
        ObjectPointer {
            inner: self.objects.put(object),
        }
    }

    pub(crate) fn free(&mut self, index: ObjectPointer) -> Option<ProtoObject> {
        self.objects.take(index.inner)
    }
}

/// Handle to a pooled object. Two handles are equal exactly when they point
/// at the same pool slot, which is the model's notion of identity.
#[derive(Clone, PartialEq, Debug, Copy, Hash, Eq)]
pub struct ObjectPointer {
    inner: PoolPointer<ProtoObject>,
}

impl Display for ObjectPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Object@{}", self.inner))
    }
}

impl ObjectPointer {
    /// Resolves a member through the delegation chain, nearest override
    /// first. Shadowed parent members stay reachable by resolving on the
    /// parent handle directly.
    pub fn get_member(self, realm: &Realm, key: Name) -> Option<Value> {
        trace!("{} resolving member {}", self, realm.names.get(key));

        let mut current = Some(self);

        while let Some(pointer) = current {
            let object = realm.objects.get(pointer);

            if let Some(value) = object.members.get(&key) {
                return Some(value.clone());
            }

            current = object.parent;
        }

        None
    }

    pub fn get(self, realm: &Realm, key: Name) -> Value {
        self.get_member(realm, key).unwrap_or_default()
    }

    /// Own-member test; does not consult the chain.
    pub fn has(self, realm: &Realm, key: Name) -> bool {
        realm.objects.get(self).members.contains_key(&key)
    }

    pub fn set(self, realm: &mut Realm, key: Name, value: impl Into<Value>) {
        realm.objects.get_mut(self).members.insert(key, value.into());
    }

    /// Interns `key` and assigns an own member, shadowing any inherited
    /// member of the same name.
    pub fn define_value(self, realm: &mut Realm, key: &str, value: impl Into<Value>) {
        let key = realm.names.intern(key);

        self.set(realm, key, value)
    }

    pub fn set_name(self, realm: &mut Realm, name: &str) {
        let name = realm.names.intern(name);

        realm.objects.get_mut(self).name = Some(name);
    }

    pub fn parent(self, realm: &Realm) -> Option<ObjectPointer> {
        realm.objects.get(self).parent
    }

    /// Resolves `key` through the chain and invokes it on this object. The
    /// member must resolve to a function value.
    pub fn call_member(
        self,
        realm: &mut Realm,
        key: Name,
        args: &[Value],
    ) -> ChainResult<Option<Value>> {
        let function = match self.get_member(realm, key) {
            Some(Value::Function(function)) => function,
            _ => {
                return Err(InternalError::new(format!(
                    "{} is not a function",
                    realm.names.get(key)
                ))
                .into())
            }
        };

        function.apply(realm, self, args)
    }
}

impl DebugRepresentation for ObjectPointer {
    fn render(&self, renderer: &mut Renderer<'_, '_, '_>) -> std::fmt::Result {
        let realm = renderer.realm;
        let object = realm.objects.get(*self);

        if let Some(name) = object.name {
            renderer
                .formatter
                .write_fmt(format_args!("{} ", realm.names.get(name)))?;
        } else {
            renderer.formatter.write_fmt(format_args!("{} ", self))?;
        }

        if renderer.representation != Representation::Compact {
            renderer.formatter.write_char('{')?;

            for (key, value) in &object.members {
                renderer.internal_key(realm.names.get(*key))?;
                renderer.render(value)?;
                renderer.formatter.write_str(", ")?;
            }

            renderer.formatter.write_char('}')?;
        }

        Ok(())
    }
}
