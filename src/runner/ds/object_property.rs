use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runner::ds::value::JsValue;

lazy_static! {
    pub static ref KEY_PROTOTYPE: PropertyKey = PropertyKey::from("prototype");
    pub static ref KEY_CONSTRUCTOR: PropertyKey = PropertyKey::from("constructor");
    pub static ref KEY_EXTEND: PropertyKey = PropertyKey::from("extend");
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Int(u32),
}
impl From<&str> for PropertyKey {
    /// Canonical array-index strings ("0", "17", but not "017") become integer keys.
    fn from(s: &str) -> Self {
        match s.parse::<u32>() {
            Ok(i) if i != u32::MAX && i.to_string() == s => PropertyKey::Int(i),
            _ => PropertyKey::Str(s.to_string()),
        }
    }
}
impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::from(s.as_str())
    }
}
impl From<u32> for PropertyKey {
    fn from(i: u32) -> Self {
        PropertyKey::Int(i)
    }
}
impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => write!(f, "{}", s),
            PropertyKey::Int(i) => write!(f, "{}", i),
        }
    }
}

/// Data property. Accessor properties are not modelled.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub value: JsValue,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}
impl PropertyDescriptor {
    pub fn new_data(value: JsValue) -> Self {
        PropertyDescriptor {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn new_hidden(value: JsValue) -> Self {
        PropertyDescriptor {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}
