use crate::pool::{Pool, PoolPointer};
use ahash::AHashMap;

#[derive(Debug, Clone)]
pub(crate) struct NameValue {
    value: String,
}

impl AsRef<str> for NameValue {
    fn as_ref(&self) -> &str {
        self.value.as_str()
    }
}

/// Interned member name. Equality and hashing operate on the pool index, so
/// member maps never touch string data after interning.
#[derive(Clone, PartialEq, Debug, Copy, Hash, Eq)]
pub struct Name {
    inner: PoolPointer<NameValue>,
}

#[derive(Clone)]
pub struct NamePool {
    pool: Pool<NameValue>,
    lookup: AHashMap<String, Name>,
}

impl NamePool {
    pub(crate) fn new() -> NamePool {
        NamePool {
            pool: Pool::default(),
            lookup: AHashMap::with_capacity(64),
        }
    }

    pub(crate) fn intern(&mut self, value: impl AsRef<str>) -> Name {
        let value_str = value.as_ref();

        self.lookup.get(value_str).cloned().unwrap_or_else(|| {
            let id = self.pool.put(NameValue {
                value: value_str.to_owned(),
            });

            let identifier = Name { inner: id };

            self.lookup.insert(value_str.to_owned(), identifier);

            identifier
        })
    }

    pub(crate) fn get(&self, name: Name) -> &str {
        self.pool[name.inner].as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::NamePool;

    #[test]
    fn test_intern_is_stable() {
        let mut names = NamePool::new();

        let first = names.intern("init");
        let second = names.intern("init");

        assert_eq!(first, second);
        assert_eq!("init", names.get(first))
    }

    #[test]
    fn test_distinct_names_get_distinct_handles() {
        let mut names = NamePool::new();

        let init = names.intern("init");
        let other = names.intern("other");

        assert_ne!(init, other);
        assert_eq!("other", names.get(other))
    }
}
