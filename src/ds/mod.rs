//! Data structures backing composition: dynamically typed values, shared
//! object storage, callable methods and the error type.

pub mod error;
pub mod method;
pub mod object;
pub mod value;

pub use error::{ExtendError, ValueResult};
pub use method::{Method, MethodFn, NativeFn};
pub use object::{Object, ObjectRef};
pub use value::{NumberType, Value};
