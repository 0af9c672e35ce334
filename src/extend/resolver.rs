//! Name resolution across a target object and ordered extension sources.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ds::error::{ExtendError, ValueResult};
use crate::ds::method::Method;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::extend::cook::{default_cook, CookFn};
use crate::extend::source::Source;
use crate::extend::view::View;

/// Which side wins when both the target and a source define a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Priority {
    /// The target object's own fields shadow the sources.
    Object,
    /// The sources shadow the target object's own fields.
    Extender,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Object
    }
}

/// Resolution policy: ordered sources, a cook hook and a priority mode.
///
/// Immutable once built, and shared via `Rc` across every view composed
/// with it.
pub struct Resolver {
    /// Registered sources, scanned in order. First match wins.
    sources: Vec<Source>,
    /// Adaptation hook for resolved callables.
    cook: CookFn,
    priority: Priority,
}

impl Resolver {
    /// Build a resolver over a single source with default options.
    pub fn new(source: Source) -> Rc<Self> {
        Self::builder().source(source).build()
    }

    /// Build a resolver over several sources with default options.
    pub fn with_sources(sources: Vec<Source>) -> Rc<Self> {
        Self::builder().sources(sources).build()
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Find the first source, in registration order, defining `name`.
    fn find_source_index(&self, name: &str) -> Option<usize> {
        for (i, source) in self.sources.iter().enumerate() {
            if source.contains(name) {
                return Some(i);
            }
        }
        None
    }

    /// Resolve `name` against the target and the registered sources.
    ///
    /// Callables are cooked before they come back; everything else passes
    /// through untouched. An unresolved name yields `Value::Undefined`,
    /// never an error.
    pub fn resolve(&self, name: &str, target: &ObjectRef, view: &View) -> ValueResult {
        let found = match self.priority {
            Priority::Object => self
                .lookup_target(name, target)
                .or_else(|| self.lookup_sources(name)),
            Priority::Extender => self
                .lookup_sources(name)
                .or_else(|| self.lookup_target(name, target)),
        };
        match found {
            Some((Value::Method(method), origin)) => {
                trace!(name, origin, "resolved callable");
                let cooked = (self.cook)(method, target, view)?;
                Ok(Value::Method(cooked))
            }
            Some((value, origin)) => {
                trace!(name, origin, "resolved value");
                Ok(value)
            }
            None => {
                trace!(name, "unresolved");
                Ok(Value::Undefined)
            }
        }
    }

    fn lookup_target(&self, name: &str, target: &ObjectRef) -> Option<(Value, &str)> {
        (**target)
            .borrow()
            .get_own(name)
            .map(|value| (value, "target"))
    }

    fn lookup_sources(&self, name: &str) -> Option<(Value, &str)> {
        let idx = self.find_source_index(name)?;
        let source = &self.sources[idx];
        source.raw(name).map(|value| (value.clone(), source.label()))
    }

    /// Existence check across the target and every source.
    ///
    /// Priority does not matter for existence.
    pub fn knows(&self, name: &str, target: &ObjectRef) -> bool {
        (**target).borrow().has_own(name) || self.find_source_index(name).is_some()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.sources.iter().map(|s| s.label()).collect();
        f.debug_struct("Resolver")
            .field("sources", &labels)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Builder for [`Resolver`] options.
pub struct ResolverBuilder {
    sources: Vec<Source>,
    cook: Option<CookFn>,
    priority: Priority,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        ResolverBuilder {
            sources: Vec::new(),
            cook: None,
            priority: Priority::default(),
        }
    }

    /// Append a source. Sources are consulted in the order they were added.
    pub fn source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    /// Append several sources, keeping their order.
    pub fn sources(mut self, sources: Vec<Source>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the default receiver-binding cook hook.
    pub fn cook<F>(mut self, cook: F) -> Self
    where
        F: Fn(Method, &ObjectRef, &View) -> Result<Method, ExtendError> + 'static,
    {
        self.cook = Some(Rc::new(cook));
        self
    }

    pub fn build(self) -> Rc<Resolver> {
        let cook = self.cook.unwrap_or_else(|| Rc::new(default_cook));
        Rc::new(Resolver {
            sources: self.sources,
            cook,
            priority: self.priority,
        })
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
