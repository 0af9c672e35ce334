use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::error::ValueResult;
use crate::ds::value::Value;

/// Function signature for compiled-in methods.
///
/// Methods receive the receiver value and the call arguments.
pub type NativeFn = fn(this: Value, args: Vec<Value>) -> ValueResult;

/// Method body, either a plain function pointer or a capturing closure.
pub enum MethodFn {
    /// Direct function pointer. Zero-cost dispatch for compiled-in methods.
    Native(NativeFn),
    /// Capturing closure. Small vtable indirection cost.
    Boxed(Box<dyn Fn(Value, Vec<Value>) -> ValueResult>),
}

/// A callable field value, optionally carrying a fixed receiver.
pub struct Method {
    name: String,
    func: Rc<MethodFn>,
    bound_this: Option<Rc<Value>>,
}

impl Method {
    /// Create a method from a function pointer.
    pub fn native(name: impl Into<String>, func: NativeFn) -> Self {
        Method {
            name: name.into(),
            func: Rc::new(MethodFn::Native(func)),
            bound_this: None,
        }
    }

    /// Create a method from a closure.
    pub fn boxed<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> ValueResult + 'static,
    {
        Method {
            name: name.into(),
            func: Rc::new(MethodFn::Boxed(Box::new(func))),
            bound_this: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.bound_this.is_some()
    }

    /// Fix the receiver. A bound method ignores the receiver passed at call
    /// time, and a later `bind` cannot replace the stored receiver: the
    /// first bind wins. Rebinding requires going back to the unbound method.
    pub fn bind(&self, this: Value) -> Self {
        if self.bound_this.is_some() {
            return self.clone();
        }
        Method {
            name: self.name.clone(),
            func: self.func.clone(),
            bound_this: Some(Rc::new(this)),
        }
    }

    /// Execute the method body with `this` as the receiver, unless a bound
    /// receiver overrides it.
    pub fn call(&self, this: Value, args: Vec<Value>) -> ValueResult {
        let receiver = match &self.bound_this {
            Some(bound) => (**bound).clone(),
            None => this,
        };
        match &*self.func {
            MethodFn::Native(f) => f(receiver, args),
            MethodFn::Boxed(f) => f(receiver, args),
        }
    }
}

impl Clone for Method {
    fn clone(&self) -> Self {
        Method {
            name: self.name.clone(),
            func: self.func.clone(),
            bound_this: self.bound_this.clone(),
        }
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
            && match (&self.bound_this, &other.bound_this) {
                (None, None) => true,
                (Some(a), Some(b)) => a.as_ref() == b.as_ref(),
                _ => false,
            }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_bound() {
            write!(f, "function [bound {}]() {{ [native code] }}", self.name)
        } else {
            write!(f, "function {}() {{ [native code] }}", self.name)
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Method({}, bound: {})", self.name, self.is_bound())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::object::Object;

    fn echo_this(this: Value, _args: Vec<Value>) -> ValueResult {
        Ok(this)
    }

    #[test]
    fn test_unbound_method_uses_passed_receiver() {
        let m = Method::native("echo", echo_this);
        let result = m.call(Value::from("caller"), Vec::new()).unwrap();
        assert_eq!(result, Value::from("caller"));
    }

    #[test]
    fn test_bound_method_ignores_passed_receiver() {
        let target = Object::new().with_field("tag", "bound").into_ref();
        let m = Method::native("echo", echo_this).bind(Value::Object(target.clone()));
        let result = m.call(Value::from("caller"), Vec::new()).unwrap();
        assert_eq!(result, Value::Object(target));
    }

    #[test]
    fn test_bind_is_non_destructive() {
        let m = Method::native("echo", echo_this);
        let bound = m.bind(Value::from(1));
        assert!(!m.is_bound());
        assert!(bound.is_bound());
    }

    #[test]
    fn test_rebinding_keeps_the_first_receiver() {
        let m = Method::native("echo", echo_this)
            .bind(Value::from("first"))
            .bind(Value::from("second"));
        let result = m.call(Value::from("caller"), Vec::new()).unwrap();
        assert_eq!(result, Value::from("first"));
    }

    #[test]
    fn test_boxed_method_captures_environment() {
        let suffix = "!".to_string();
        let m = Method::boxed("shout", move |this, _args| {
            Ok(Value::from(format!("{}{}", this.as_str().unwrap_or(""), suffix)))
        });
        let result = m.call(Value::from("hey"), Vec::new()).unwrap();
        assert_eq!(result, Value::from("hey!"));
    }

    #[test]
    fn test_method_identity_equality() {
        let a = Method::native("echo", echo_this);
        let b = a.clone();
        let c = Method::native("echo", echo_this);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
