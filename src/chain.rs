use crate::object_pool::{ObjectPointer, ProtoObject};
use crate::primordials::Realm;
use crate::result::ChainResult;
use crate::values::value::Value;
use log::trace;

impl ObjectPointer {
    /// Allocates a new, empty prototype delegating to this one. Nothing is
    /// copied; parent members stay visible through the chain walk.
    pub fn derive(self, realm: &mut Realm) -> ObjectPointer {
        let derived = ProtoObject::builder()
            .with_parent(self)
            .build(&mut realm.objects);

        trace!("{} derived from {}", derived, self);

        derived
    }

    /// Allocates an instance delegating to this prototype and invokes the
    /// nearest-in-chain `init` on it, forwarding `args` verbatim. An error
    /// raised by `init` propagates unchanged and the instance is discarded,
    /// so no handle to a half-built object ever escapes.
    pub fn create(self, realm: &mut Realm, args: &[Value]) -> ChainResult<ObjectPointer> {
        let instance = ProtoObject::builder()
            .with_parent(self)
            .build(&mut realm.objects);

        trace!("{} created from {}", instance, self);

        let init = realm.constants.init;

        match instance.call_member(realm, init, args) {
            Ok(_) => Ok(instance),
            Err(err) => {
                realm.objects.free(instance);

                Err(err)
            }
        }
    }

    /// True when `candidate` is on the self-inclusive delegation chain of
    /// this object. Three identity short-circuits run before any traversal:
    /// the object itself, the root prototype and the terminal base object
    /// are each an ancestor of everything the realm produces. Any other
    /// value is matched against the chain walk and yields `false` once the
    /// chain is exhausted; the query never fails.
    pub fn is_descendant_of(self, realm: &Realm, candidate: impl Into<Value>) -> bool {
        let candidate = candidate.into();

        trace!("{} tested against {:?}", self, candidate);

        if candidate == Value::Object(self)
            || candidate == Value::Object(realm.proto())
            || candidate == Value::Object(realm.object_base())
        {
            return true;
        }

        let parent = match self.parent(realm) {
            Some(parent) => parent,
            None => return false,
        };

        candidate == Value::Object(parent) || parent.is_descendant_of(realm, candidate)
    }
}

#[cfg(test)]
mod test {
    use crate::debugging::Unwrap;
    use crate::object_pool::ObjectPointer;
    use crate::primordials::Realm;
    use crate::result::{ChainError, ChainResult};
    use crate::values::function::NativeFunction;
    use crate::values::value::Value;

    fn init_recording_args(
        realm: &mut Realm,
        target: ObjectPointer,
        args: &[Value],
        _context: Option<&Value>,
    ) -> ChainResult<Option<Value>> {
        let first = args.first().cloned().unwrap_or_default();
        let second = args.get(1).cloned().unwrap_or_default();

        target.define_value(realm, "first", first);
        target.define_value(realm, "second", second);

        Ok(None)
    }

    fn init_marking_base(
        realm: &mut Realm,
        target: ObjectPointer,
        _args: &[Value],
        _context: Option<&Value>,
    ) -> ChainResult<Option<Value>> {
        target.define_value(realm, "base", true);

        Ok(None)
    }

    fn init_delegating_to_parent(
        realm: &mut Realm,
        target: ObjectPointer,
        args: &[Value],
        _context: Option<&Value>,
    ) -> ChainResult<Option<Value>> {
        // Explicit base-initialization: resolve the parent prototype's init
        // and invoke it on the instance before doing our own work.
        let init = realm.constants().init;

        let owning_prototype = target.parent(realm).unwrap();
        let parent_prototype = owning_prototype.parent(realm).unwrap();

        if let Value::Function(function) = parent_prototype.get(realm, init) {
            function.apply(realm, target, args)?;
        }

        target.define_value(realm, "child", true);

        Ok(None)
    }

    fn init_throwing(
        _realm: &mut Realm,
        _target: ObjectPointer,
        _args: &[Value],
        _context: Option<&Value>,
    ) -> ChainResult<Option<Value>> {
        Err(ChainError::Thrown(Value::Float(7.0)))
    }

    fn init_tagging_from_context(
        realm: &mut Realm,
        target: ObjectPointer,
        _args: &[Value],
        context: Option<&Value>,
    ) -> ChainResult<Option<Value>> {
        let tag = context.cloned().unwrap_or_default();

        target.define_value(realm, "tag", tag);

        Ok(None)
    }

    #[test]
    fn test_derived_prototypes_descend_from_the_root() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let parent = root.derive(&mut realm);
        let child = parent.derive(&mut realm);
        let grandchild = child.derive(&mut realm);

        assert!(parent.is_descendant_of(&realm, root));
        assert!(child.is_descendant_of(&realm, root));
        assert!(grandchild.is_descendant_of(&realm, root))
    }

    #[test]
    fn test_ancestry_is_self_inclusive() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let prototype = root.derive(&mut realm);

        assert!(prototype.is_descendant_of(&realm, prototype));
        assert!(root.is_descendant_of(&realm, root))
    }

    #[test]
    fn test_everything_descends_from_the_base_object() {
        let mut realm = Realm::new();
        let base = realm.object_base();

        let prototype = realm.proto().derive(&mut realm);
        let instance = prototype.create(&mut realm, &[]).unwrap_value(&realm);

        assert!(realm.proto().is_descendant_of(&realm, base));
        assert!(prototype.is_descendant_of(&realm, base));
        assert!(instance.is_descendant_of(&realm, base));
        assert!(base.is_descendant_of(&realm, base))
    }

    #[test]
    fn test_unrelated_prototypes_are_not_ancestors() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let left = root.derive(&mut realm);
        let right = root.derive(&mut realm);

        assert!(!left.is_descendant_of(&realm, right));
        assert!(!right.is_descendant_of(&realm, left))
    }

    #[test]
    fn test_created_instances_descend_from_their_prototype() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let prototype = root.derive(&mut realm);
        let instance = prototype.create(&mut realm, &[]).unwrap_value(&realm);

        assert!(instance.is_descendant_of(&realm, prototype));
        assert!(instance.is_descendant_of(&realm, root))
    }

    #[test]
    fn test_parent_child_scenario() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let parent = root.derive(&mut realm);
        let child = parent.derive(&mut realm);

        let parent_obj = parent.create(&mut realm, &[]).unwrap_value(&realm);
        let child_obj = child.create(&mut realm, &[]).unwrap_value(&realm);

        assert!(parent.is_descendant_of(&realm, root));
        assert!(child.is_descendant_of(&realm, parent));
        assert!(child.is_descendant_of(&realm, root));

        assert!(parent_obj.is_descendant_of(&realm, parent));
        assert!(child_obj.is_descendant_of(&realm, child));
        assert!(child_obj.is_descendant_of(&realm, parent));
        assert!(child_obj.is_descendant_of(&realm, root));

        assert!(!parent.is_descendant_of(&realm, child));
        assert!(!parent_obj.is_descendant_of(&realm, child));

        let other = root.derive(&mut realm);

        assert!(!other.is_descendant_of(&realm, child))
    }

    #[test]
    fn test_non_object_candidates_are_never_ancestors() {
        let mut realm = Realm::new();

        let prototype = realm.proto().derive(&mut realm);

        assert!(!prototype.is_descendant_of(&realm, Value::Float(1.0)));
        assert!(!prototype.is_descendant_of(&realm, Value::Boolean(true)));
        assert!(!prototype.is_descendant_of(&realm, Value::Undefined))
    }

    #[test]
    fn test_ancestry_queries_are_idempotent() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let parent = root.derive(&mut realm);
        let child = parent.derive(&mut realm);
        let other = root.derive(&mut realm);

        for _ in 0..3 {
            assert!(child.is_descendant_of(&realm, parent));
            assert!(!child.is_descendant_of(&realm, other))
        }
    }

    #[test]
    fn test_overridden_init_receives_the_arguments() {
        let mut realm = Realm::new();

        let prototype = realm.proto().derive(&mut realm);
        prototype.define_value(&mut realm, "init", NativeFunction::new(init_recording_args));

        let a = realm.intern("a");
        let instance = prototype
            .create(&mut realm, &[Value::String(a), Value::Float(2.0)])
            .unwrap_value(&realm);

        let first = realm.intern("first");
        let second = realm.intern("second");

        assert_eq!(Value::String(a), instance.get(&realm, first));
        assert_eq!(Value::Float(2.0), instance.get(&realm, second))
    }

    #[test]
    fn test_child_init_shadows_the_parent_init() {
        let mut realm = Realm::new();

        let parent = realm.proto().derive(&mut realm);
        parent.define_value(&mut realm, "init", NativeFunction::new(init_marking_base));

        let child = parent.derive(&mut realm);
        child.define_value(&mut realm, "init", NativeFunction::new(init_recording_args));

        let instance = child.create(&mut realm, &[]).unwrap_value(&realm);

        let base = realm.intern("base");
        let first = realm.intern("first");

        // The parent's init never ran; only the override was invoked.
        assert_eq!(Value::Undefined, instance.get(&realm, base));
        assert!(instance.has(&realm, first))
    }

    #[test]
    fn test_init_can_delegate_to_the_parent_explicitly() {
        let mut realm = Realm::new();

        let parent = realm.proto().derive(&mut realm);
        parent.define_value(&mut realm, "init", NativeFunction::new(init_marking_base));

        let child = parent.derive(&mut realm);
        child.define_value(
            &mut realm,
            "init",
            NativeFunction::new(init_delegating_to_parent),
        );

        let instance = child.create(&mut realm, &[]).unwrap_value(&realm);

        let base = realm.intern("base");
        let child_mark = realm.intern("child");

        assert_eq!(Value::Boolean(true), instance.get(&realm, base));
        assert_eq!(Value::Boolean(true), instance.get(&realm, child_mark))
    }

    #[test]
    fn test_an_init_with_captured_context_reads_it_back() {
        let mut realm = Realm::new();

        let prototype = realm.proto().derive(&mut realm);
        prototype.define_value(
            &mut realm,
            "init",
            NativeFunction::with_context(init_tagging_from_context, Value::Float(3.0)),
        );

        let instance = prototype.create(&mut realm, &[]).unwrap_value(&realm);

        let tag = realm.intern("tag");

        assert_eq!(Value::Float(3.0), instance.get(&realm, tag))
    }

    #[test]
    fn test_a_throwing_init_propagates_unchanged() {
        let mut realm = Realm::new();

        let prototype = realm.proto().derive(&mut realm);
        prototype.define_value(&mut realm, "init", NativeFunction::new(init_throwing));

        let result = prototype.create(&mut realm, &[]);

        assert_eq!(Err(ChainError::Thrown(Value::Float(7.0))), result)
    }

    #[test]
    fn test_a_non_callable_init_is_an_internal_error() {
        let mut realm = Realm::new();

        let prototype = realm.proto().derive(&mut realm);
        prototype.define_value(&mut realm, "init", Value::Float(1.0));

        let result = prototype.create(&mut realm, &[]);

        assert!(matches!(result, Err(ChainError::InternalError(_))))
    }

    #[test]
    fn test_instances_of_siblings_are_unrelated() {
        let mut realm = Realm::new();
        let root = realm.proto();

        let left = root.derive(&mut realm);
        let right = root.derive(&mut realm);

        let left_instance = left.create(&mut realm, &[]).unwrap_value(&realm);

        assert!(!left_instance.is_descendant_of(&realm, right))
    }
}
