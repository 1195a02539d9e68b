//! Classes on top of the prototype object model.
//!
//! A class is a class-constructor function object with a `prototype` own property and an
//! `extend` own property. `extend` derives a new class from a property bag; the derived
//! prototype inherits from the parent prototype, and bag methods that shadow a parent
//! method are wrapped (see [`override_fn`]) so the parent implementation stays reachable
//! from inside the override.

pub mod base;
pub mod construct;
pub mod extend;
pub mod override_fn;
pub mod property_bag;

use crate::runner::ds::function_object::{new_function_object, FunctionKind};
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{
    PropertyDescriptor, KEY_CONSTRUCTOR, KEY_EXTEND, KEY_PROTOTYPE,
};
use crate::runner::ds::value::JsValue;

/// Creates the constructor for `prototype` and links the two together. `prototype` is
/// expected to be freshly created, so the writes cannot be rejected.
///
/// `class.prototype` and `prototype.constructor` are strong references to each other, so
/// a class and its prototype are never freed, even after every handle is dropped. The
/// root `Class` of a realm is kept alive the same way. Callers that create many
/// short-lived realms or classes should expect that memory to stay allocated for the
/// life of the process.
pub(crate) fn new_class(
    name: &str,
    prototype: &JsObjectType,
    extend: &JsObjectType,
    link_constructor: bool,
) -> JsObjectType {
    let class = new_function_object(name, FunctionKind::ClassConstructor);
    {
        let mut c = class.borrow_mut();
        let base = c.as_js_object_mut().get_object_base_mut();
        base.replace_property(
            KEY_PROTOTYPE.clone(),
            PropertyDescriptor::new_hidden(JsValue::Object(prototype.clone()))
                .with_configurable(false),
        );
        base.replace_property(
            KEY_EXTEND.clone(),
            PropertyDescriptor::new_data(JsValue::Object(extend.clone())),
        );
    }
    if link_constructor {
        prototype
            .borrow_mut()
            .as_js_object_mut()
            .get_object_base_mut()
            .replace_property(
                KEY_CONSTRUCTOR.clone(),
                PropertyDescriptor::new_hidden(JsValue::Object(class.clone())),
            );
    }
    class
}
