//! Builder for the property bag handed to `extend`.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::function_object::{new_closure_function, new_native_function, NativeFn};
use crate::runner::ds::object::{object_create, JsObjectType};
use crate::runner::ds::object_property::{PropertyDescriptor, PropertyKey};
use crate::runner::ds::value::JsValue;

/// An ordinary object with no prototype whose own enumerable properties are the members
/// of a class definition. Adding a name twice keeps the later value in the earlier position.
pub struct PropertyBag {
    object: JsObjectType,
}

impl PropertyBag {
    pub fn new() -> Self {
        PropertyBag {
            object: object_create(None),
        }
    }

    /// Add a data member, or an existing function object.
    pub fn add_property(self, name: &str, value: impl Into<JsValue>) -> Self {
        self.object
            .borrow_mut()
            .as_js_object_mut()
            .get_object_base_mut()
            .replace_property(PropertyKey::from(name), PropertyDescriptor::new_data(value.into()));
        self
    }

    /// Add a method backed by a function pointer.
    pub fn add_native_method(self, name: &str, f: NativeFn) -> Self {
        let function = new_native_function(name, f);
        self.add_property(name, function)
    }

    /// Add a method backed by a closure.
    pub fn add_method<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType> + 'static,
    {
        let function = new_closure_function(name, f);
        self.add_property(name, function)
    }

    pub fn as_object(&self) -> &JsObjectType {
        &self.object
    }

    pub fn into_value(self) -> JsValue {
        JsValue::Object(self.object)
    }
}

impl Default for PropertyBag {
    fn default() -> Self {
        Self::new()
    }
}
