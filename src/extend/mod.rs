//! Object composition over ordered extension sources.
//!
//! This module implements the composition layer. A [`Resolver`] decides,
//! per field access, which side answers (the target object or one of the
//! registered extension sources) and a [`View`] applies that policy to an
//! object without copying anything onto it.
//!
//! ```text
//! Field read order (object priority, the default):
//!   1. Target's own fields
//!   2. Sources, in registration order (first match wins)
//!   3. Undefined
//! ```
//!
//! ## Key Components
//!
//! - [`Source`]: one plain name-to-value bag of fallback/override fields
//! - [`Resolver`]: ordered sources plus a cook hook plus a priority mode
//! - [`View`]: the composed access surface returned by [`extend`]
//! - [`ExtendedClass`]: a wrapped constructor producing composed instances
//!
//! ## Resolution Flow
//!
//! When a name is read through a view:
//!
//! 1. The resolver scans the winning side first (target or sources,
//!    depending on priority)
//! 2. The first source defining the name shadows later ones
//! 3. A resolved callable is cooked; by default its receiver is bound to
//!    the target
//! 4. An unresolved name yields `Value::Undefined`
//!
//! Writes never consult the resolver. They land on the target's own
//! storage, and sources are never mutated.
//!
//! ## Example
//!
//! ```
//! use veneer::ds::object::Object;
//! use veneer::ds::value::Value;
//! use veneer::extend::resolver::Resolver;
//! use veneer::extend::source::Source;
//! use veneer::extend::view::extend;
//!
//! let counters = Source::labelled("counters").with_method("bump", |this, _args| {
//!     let n = this.get("count")?.as_int().unwrap_or(0);
//!     this.set("count", n + 1)?;
//!     this.get("count")
//! });
//!
//! let target = Value::Object(Object::new().with_field("count", 0).into_ref());
//! let view = extend(&target, Resolver::new(counters)).unwrap();
//!
//! assert_eq!(view.invoke("bump", Vec::new()).unwrap(), Value::from(1));
//! assert_eq!(view.invoke("bump", Vec::new()).unwrap(), Value::from(2));
//! assert_eq!(view.get("count").unwrap(), Value::from(2));
//! ```

pub mod class;
pub mod cook;
pub mod resolver;
pub mod source;
pub mod view;

pub use class::{extend_class, ClassDef, ConstructorFn, ExtendedClass};
pub use cook::{default_cook, CookFn};
pub use resolver::{Priority, Resolver, ResolverBuilder};
pub use source::Source;
pub use view::{extend, extend_object, View};
