use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::error::{ExtendError, ValueResult};
use crate::ds::method::Method;
use crate::ds::object::ObjectRef;
use crate::extend::view::View;

pub enum Value {
    Undefined,
    Boolean(bool),
    Number(NumberType),
    String(String),
    List(Vec<Value>),
    Object(ObjectRef),
    Method(Method),
    View(View),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Method(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Number(NumberType::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Number(NumberType::Integer(i)) => Some(*i as f64),
            Value::Number(NumberType::Float(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&View> {
        match self {
            Value::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> ValueResult {
        match self {
            Value::Object(o) => Ok((**o).borrow().get_own(name).unwrap_or(Value::Undefined)),
            Value::View(v) => v.get(name),
            _ => Err(ExtendError::InvalidArgument(format!(
                "cannot read '{}' of {}",
                name, self
            ))),
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Result<(), ExtendError> {
        let name = name.into();
        // The conversion may read this same object, so it must run before
        // the write borrow is taken.
        let value = value.into();
        match self {
            Value::Object(o) => {
                (**o).borrow_mut().set_own(name, value);
                Ok(())
            }
            Value::View(v) => {
                v.set(name, value);
                Ok(())
            }
            _ => Err(ExtendError::InvalidArgument(format!(
                "cannot set '{}' on {}",
                name, self
            ))),
        }
    }

    pub fn invoke(&self, name: &str, args: Vec<Value>) -> ValueResult {
        match self {
            Value::Object(o) => {
                let field = (**o).borrow().get_own(name);
                match field {
                    Some(Value::Method(m)) => m.call(Value::Object(o.clone()), args),
                    _ => Err(ExtendError::NotCallable(name.to_string())),
                }
            }
            Value::View(v) => v.invoke(name, args),
            _ => Err(ExtendError::InvalidArgument(format!(
                "cannot call '{}' on {}",
                name, self
            ))),
        }
    }

    /// Existence check through an object handle or a composed view.
    /// Non-object receivers contain nothing; this reports `false` rather
    /// than an error.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Value::Object(o) => (**o).borrow().has_own(name),
            Value::View(v) => v.contains(name),
            _ => false,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Number(n) => Value::Number(n.clone()),
            Value::String(s) => Value::String(s.clone()),
            Value::List(items) => Value::List(items.clone()),
            Value::Object(o) => Value::Object(o.clone()),
            Value::Method(m) => Value::Method(m.clone()),
            Value::View(v) => Value::View(v.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => a == b,
            (Value::View(a), Value::View(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Value::Undefined => "undefined".to_string(),
                Value::Boolean(b) => format!("bool({})", b),
                Value::Number(n) => n.to_string(),
                Value::String(s) => format!("\"{}\"", s),
                Value::List(items) => format!(
                    "[{}]",
                    items
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                ),
                Value::Object(o) => (**o).borrow().to_string(),
                Value::Method(m) => m.to_string(),
                Value::View(v) => v.to_string(),
            }
        )
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Value::Undefined"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::List(items) => write!(f, "Value::List({:?})", items),
            Value::Object(o) => write!(f, "Value::Object({:?})", (**o).borrow()),
            Value::Method(m) => write!(f, "Value::Method({:?})", m),
            Value::View(v) => write!(f, "Value::View({:?})", v),
        }
    }
}

pub enum NumberType {
    Integer(i64),
    Float(f64),
}

impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Float(f) => NumberType::Float(*f),
        }
    }
}

impl PartialEq for NumberType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NumberType::Integer(a), NumberType::Integer(b)) => a == b,
            (NumberType::Float(a), NumberType::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Debug for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "Integer({})", i),
            NumberType::Float(v) => write!(f, "Float({})", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(NumberType::Integer(v as i64))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(NumberType::Integer(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(NumberType::Float(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl From<Method> for Value {
    fn from(v: Method) -> Self {
        Value::Method(v)
    }
}

impl From<View> for Value {
    fn from(v: View) -> Self {
        Value::View(v)
    }
}
