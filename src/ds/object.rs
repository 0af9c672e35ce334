use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::error::ValueResult;
use crate::ds::method::{Method, NativeFn};
use crate::ds::value::Value;

/// Shared handle to an object's mutable field storage.
pub type ObjectRef = Rc<RefCell<Object>>;

/// Plain field storage. The single owner of mutable state for any view
/// composed over it.
pub struct Object {
    fields: HashMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object {
            fields: HashMap::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a method field backed by a function pointer.
    pub fn with_native(mut self, name: impl Into<String>, func: NativeFn) -> Self {
        let name = name.into();
        let method = Method::native(name.clone(), func);
        self.fields.insert(name, Value::Method(method));
        self
    }

    /// Add a method field backed by a closure.
    pub fn with_method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ValueResult + 'static,
    {
        let name = name.into();
        let method = Method::boxed(name.clone(), func);
        self.fields.insert(name, Value::Method(method));
        self
    }

    /// Wrap this object into a shared handle.
    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    pub fn set_own(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove an own field. Returns whether a field was actually removed.
    pub fn delete_own(&mut self, name: &str) -> bool {
        self.fields.remove(name).is_some()
    }

    /// Own field names, sorted for deterministic iteration.
    pub fn own_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.fields.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "object")
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:?})", self.own_keys())
    }
}
