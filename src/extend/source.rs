//! Extension sources: ordered bags of override and fallback fields.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::ds::error::{ExtendError, ValueResult};
use crate::ds::method::{Method, NativeFn};
use crate::ds::value::Value;

/// One extension source, a plain mapping from field name to value.
///
/// Sources are consulted in the order they were registered with a
/// [`Resolver`](crate::extend::resolver::Resolver); the earliest source
/// defining a name shadows the later ones.
pub struct Source {
    /// Debug label. Anonymous sources draw a random one.
    label: String,
    entries: HashMap<String, Value>,
}

impl Source {
    /// Create an anonymous source.
    pub fn new() -> Self {
        Source {
            label: Uuid::new_v4().to_hyphenated().to_string(),
            entries: HashMap::new(),
        }
    }

    /// Create a labelled source. The label only shows up in debug output.
    pub fn labelled(label: impl Into<String>) -> Self {
        Source {
            label: label.into(),
            entries: HashMap::new(),
        }
    }

    /// Adopt the own fields of an object value.
    ///
    /// Anything that is not an object is rejected up front rather than
    /// producing a source that can never resolve.
    pub fn from_value(label: impl Into<String>, value: &Value) -> Result<Self, ExtendError> {
        match value {
            Value::Object(o) => {
                let mut source = Source::labelled(label);
                let obj = (**o).borrow();
                for key in obj.own_keys() {
                    if let Some(v) = obj.get_own(&key) {
                        source.entries.insert(key, v);
                    }
                }
                Ok(source)
            }
            other => Err(ExtendError::InvalidArgument(format!(
                "extension source must be an object, got {}",
                other
            ))),
        }
    }

    /// Add a plain value entry.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Add a method entry backed by a function pointer.
    pub fn with_native(mut self, name: impl Into<String>, func: NativeFn) -> Self {
        let name = name.into();
        let method = Method::native(name.clone(), func);
        self.entries.insert(name, Value::Method(method));
        self
    }

    /// Add a method entry backed by a closure.
    pub fn with_method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ValueResult + 'static,
    {
        let name = name.into();
        let method = Method::boxed(name.clone(), func);
        self.entries.insert(name, Value::Method(method));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Does this source define the given name?
    ///
    /// This is a cheap check. It must not allocate.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The raw, uncooked entry for a name.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Entry names, sorted for deterministic iteration.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source({}, {} entries)", self.label, self.entries.len())
    }
}
