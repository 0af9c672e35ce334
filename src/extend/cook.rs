//! Adaptation of resolved callables.

use std::rc::Rc;

use crate::ds::error::ExtendError;
use crate::ds::method::Method;
use crate::ds::object::ObjectRef;
use crate::ds::value::Value;
use crate::extend::view::View;

/// Hook applied to every resolved method before it is handed to the caller.
///
/// Runs on callables only; plain values bypass it entirely. The hook sees
/// the target handle and the composed view, and may return the method
/// unchanged, a rewrapped one, or an error.
pub type CookFn = Rc<dyn Fn(Method, &ObjectRef, &View) -> Result<Method, ExtendError>>;

/// The default cook: fix the method's receiver to the target object.
///
/// Extension method bodies read and write the target's live storage
/// directly and do not re-enter resolution through the view. A method
/// that already carries a receiver passes through unchanged.
pub fn default_cook(
    method: Method,
    target: &ObjectRef,
    _view: &View,
) -> Result<Method, ExtendError> {
    Ok(method.bind(Value::Object(target.clone())))
}
