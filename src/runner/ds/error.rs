use thiserror::Error;

use crate::runner::ds::value::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JErrorType {
    #[error("Uncaught reference error: {0}.")]
    ReferenceError(String),
    #[error("Uncaught type error: {0}.")]
    TypeError(String),
    #[error("Uncaught range error: {0}.")]
    RangeError(String),
    /// A value raised by a caller-supplied function body.
    #[error("Uncaught {0}")]
    Thrown(JsValue),
}
impl JErrorType {
    pub fn throw(value: impl Into<JsValue>) -> Self {
        JErrorType::Thrown(value.into())
    }
}
