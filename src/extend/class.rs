//! Class composition: wrap a constructor so instances come out composed.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ds::error::ExtendError;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::extend::resolver::Resolver;
use crate::extend::view::{extend_object, View};

/// Constructor signature: arguments in, fresh instance out.
pub type ConstructorFn = Rc<dyn Fn(Vec<Value>) -> Result<ObjectRef, ExtendError>>;

/// A class modelled as a named instance factory.
#[derive(Clone)]
pub struct ClassDef {
    name: String,
    constructor: ConstructorFn,
}

impl ClassDef {
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<ObjectRef, ExtendError> + 'static,
    {
        ClassDef {
            name: name.into(),
            constructor: Rc::new(constructor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the constructor, producing an unwrapped instance.
    pub fn construct(&self, args: Vec<Value>) -> Result<ObjectRef, ExtendError> {
        (self.constructor)(args)
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassDef({})", self.name)
    }
}

/// A class whose construction signature is unchanged but whose instances
/// come out wrapped in a composed view.
pub struct ExtendedClass {
    class: ClassDef,
    resolver: Rc<Resolver>,
}

/// Wrap a class. Instances built through the result behave exactly like
/// [`extend`](crate::extend::view::extend)-wrapped instances of the
/// original class.
pub fn extend_class(class: ClassDef, resolver: Rc<Resolver>) -> ExtendedClass {
    ExtendedClass { class, resolver }
}

impl ExtendedClass {
    /// Construct an instance through the original constructor, then wrap it.
    ///
    /// Constructor failures propagate before any wrapping happens.
    pub fn construct(&self, args: Vec<Value>) -> Result<View, ExtendError> {
        let instance = self.class.construct(args)?;
        trace!(class = %self.class.name(), "instance composed");
        Ok(extend_object(instance, self.resolver.clone()))
    }

    pub fn class(&self) -> &ClassDef {
        &self.class
    }

    pub fn resolver(&self) -> &Rc<Resolver> {
        &self.resolver
    }
}

impl fmt::Debug for ExtendedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtendedClass({})", self.class.name)
    }
}
