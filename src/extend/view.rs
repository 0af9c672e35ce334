//! The composed view: all reads through the resolver, all writes to the
//! target.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ds::error::{ExtendError, ValueResult};
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::extend::resolver::Resolver;

/// Composed access surface over a target object and a resolver.
///
/// A view owns no field storage. Every read is routed through the
/// resolver; every write and delete lands on the target's own storage.
/// Cloning a view is cheap and yields a handle to the same target.
pub struct View {
    target: ObjectRef,
    resolver: Rc<Resolver>,
}

/// Wrap an object value in a composed view.
///
/// Fails fast with [`ExtendError::InvalidArgument`] when `target` is not
/// an object, rather than producing a view that can never resolve.
pub fn extend(target: &Value, resolver: Rc<Resolver>) -> Result<View, ExtendError> {
    match target {
        Value::Object(o) => Ok(extend_object(o.clone(), resolver)),
        other => Err(ExtendError::InvalidArgument(format!(
            "extend target must be an object, got {}",
            other
        ))),
    }
}

/// Wrap an object handle in a composed view.
pub fn extend_object(target: ObjectRef, resolver: Rc<Resolver>) -> View {
    trace!(sources = resolver.sources().len(), "view composed");
    View { target, resolver }
}

impl View {
    /// Read a field through the resolver.
    pub fn get(&self, name: &str) -> ValueResult {
        self.resolver.resolve(name, &self.target, self)
    }

    /// Write a field. Writes always land on the target's own storage;
    /// sources are never mutated, under either priority mode.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        // The conversion may read the target, so it must run before the
        // write borrow is taken.
        let value = value.into();
        (*self.target).borrow_mut().set_own(name, value);
    }

    /// Remove the target's own field. Returns whether a field was removed.
    ///
    /// A source may still supply the name on later reads.
    pub fn delete(&self, name: &str) -> bool {
        (*self.target).borrow_mut().delete_own(name)
    }

    /// Existence check across the target and every source.
    pub fn contains(&self, name: &str) -> bool {
        self.resolver.knows(name, &self.target)
    }

    /// Resolve `name` and call it.
    ///
    /// The target is passed as the receiver; a cooked (bound) method
    /// ignores it in favour of its own.
    pub fn invoke(&self, name: &str, args: Vec<Value>) -> ValueResult {
        match self.get(name)? {
            Value::Method(method) => method.call(Value::Object(self.target.clone()), args),
            _ => Err(ExtendError::NotCallable(name.to_string())),
        }
    }

    pub fn target(&self) -> &ObjectRef {
        &self.target
    }

    pub fn resolver(&self) -> &Rc<Resolver> {
        &self.resolver
    }
}

impl Clone for View {
    fn clone(&self) -> Self {
        View {
            target: self.target.clone(),
            resolver: self.resolver.clone(),
        }
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target) && Rc::ptr_eq(&self.resolver, &other.resolver)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view over {}", (*self.target).borrow().to_string())
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("target", &(*self.target).borrow())
            .field("resolver", &self.resolver)
            .finish()
    }
}
