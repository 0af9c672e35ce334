//! # veneer - dynamic object composition
//!
//! Mixin-style extension for dynamically typed values, without touching
//! the original object and without static inheritance, featuring:
//! - Plain objects behind cheap shared handles
//! - Extension sources: ordered bags of override and fallback fields
//! - A resolver with target-first or extender-first priority
//! - Receiver rebinding ("cooking"), so extension methods operate on the
//!   real target object
//! - Class wrapping that leaves construction signatures intact
//!
//! ## Quick Start
//!
//! ### Extending an object
//!
//! ```
//! use veneer::{extend, Object, Resolver, Source, Value};
//!
//! let greeter = Source::labelled("greeter").with_method("greet", |this, _args| {
//!     let name = this.get("name")?;
//!     Ok(Value::from(format!(
//!         "Hello, {}!",
//!         name.as_str().unwrap_or("stranger")
//!     )))
//! });
//!
//! let target = Value::Object(Object::new().with_field("name", "Alice").into_ref());
//! let view = extend(&target, Resolver::new(greeter)).unwrap();
//!
//! assert_eq!(
//!     view.invoke("greet", Vec::new()).unwrap(),
//!     Value::from("Hello, Alice!")
//! );
//! ```
//!
//! ### Priority modes
//!
//! ```
//! use veneer::{extend, Object, Priority, Resolver, Source, Value};
//!
//! let target = Value::Object(Object::new().with_field("color", "blue").into_ref());
//!
//! // Object priority (the default): the target's own field wins.
//! let object_first = extend(
//!     &target,
//!     Resolver::new(Source::labelled("overrides").with_value("color", "red")),
//! )
//! .unwrap();
//! assert_eq!(object_first.get("color").unwrap(), Value::from("blue"));
//!
//! // Extender priority: the source wins.
//! let resolver = Resolver::builder()
//!     .source(Source::labelled("overrides").with_value("color", "red"))
//!     .priority(Priority::Extender)
//!     .build();
//! let extender_first = extend(&target, resolver).unwrap();
//! assert_eq!(extender_first.get("color").unwrap(), Value::from("red"));
//! ```
//!
//! ### Extending a class
//!
//! ```
//! use veneer::{extend_class, ClassDef, Object, Resolver, Source, Value};
//!
//! let point = ClassDef::new("Point", |args| {
//!     let x = args.get(0).and_then(Value::as_int).unwrap_or(0);
//!     let y = args.get(1).and_then(Value::as_int).unwrap_or(0);
//!     Ok(Object::new().with_field("x", x).with_field("y", y).into_ref())
//! });
//!
//! let measured = Source::labelled("measured").with_method("manhattan", |this, _args| {
//!     let x = this.get("x")?.as_int().unwrap_or(0);
//!     let y = this.get("y")?.as_int().unwrap_or(0);
//!     Ok(Value::from(x.abs() + y.abs()))
//! });
//!
//! let extended = extend_class(point, Resolver::new(measured));
//! let instance = extended
//!     .construct(vec![Value::from(3), Value::from(-4)])
//!     .unwrap();
//!
//! assert_eq!(instance.get("x").unwrap(), Value::from(3));
//! assert_eq!(instance.invoke("manhattan", Vec::new()).unwrap(), Value::from(7));
//! ```
//!
//! ## Architecture
//!
//! Composition never copies. A view holds a handle to the target and a
//! shared resolver; reads are answered per access by scanning the target
//! and the ordered sources, while writes always land on the target.
//!
//! - **[`ds`]**: dynamic values, object storage, methods and errors
//! - **[`extend`]**: sources, resolver, cooking, view and class wrapping

pub mod ds;
pub mod extend;

pub use ds::error::{ExtendError, ValueResult};
pub use ds::method::{Method, MethodFn, NativeFn};
pub use ds::object::{Object, ObjectRef};
pub use ds::value::{NumberType, Value};
pub use extend::class::{extend_class, ClassDef, ConstructorFn, ExtendedClass};
pub use extend::cook::{default_cook, CookFn};
pub use extend::resolver::{Priority, Resolver, ResolverBuilder};
pub use extend::source::Source;
pub use extend::view::{extend, extend_object, View};
