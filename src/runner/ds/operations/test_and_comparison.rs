use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::KEY_PROTOTYPE;
use crate::runner::ds::operations::object::get;
use crate::runner::ds::value::JsValue;

pub fn is_callable(v: &JsValue) -> bool {
    match v {
        JsValue::Object(o) => o.borrow().is_callable(),
        _ => false,
    }
}

pub fn is_class_constructor(v: &JsValue) -> bool {
    match v {
        JsValue::Object(o) => match o.borrow().as_js_function_object() {
            Some(f) => f.is_class_constructor(),
            None => false,
        },
        _ => false,
    }
}

pub fn same_object(a: &JsObjectType, b: &JsObjectType) -> bool {
    Rc::ptr_eq(a, b)
}

/// `o instanceof c`: true when `c.prototype` appears anywhere on the prototype chain of `o`.
pub fn instance_of(o: &JsValue, c: &JsValue) -> Result<bool, JErrorType> {
    let c = match c {
        JsValue::Object(c) if c.borrow().is_callable() => c,
        _ => {
            return Err(JErrorType::TypeError(format!(
                "Right-hand side of 'instanceof' is not callable: {}",
                c
            )))
        }
    };
    let o = match o {
        JsValue::Object(o) => o,
        _ => return Ok(false),
    };
    let prototype = match get(c, &KEY_PROTOTYPE)? {
        JsValue::Object(p) => p,
        _ => {
            return Err(JErrorType::TypeError(
                "Function has non-object prototype in instanceof check".to_string(),
            ))
        }
    };
    let mut current = o.borrow().as_js_object().get_prototype_of();
    while let Some(p) = current {
        if same_object(&p, &prototype) {
            return Ok(true);
        }
        current = p.borrow().as_js_object().get_prototype_of();
    }
    Ok(false)
}
