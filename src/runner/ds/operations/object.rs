use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::function_object::call;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{PropertyDescriptor, PropertyKey};
use crate::runner::ds::value::JsValue;

/// Looks `p` up on `o` and then along its prototype chain.
pub fn get(o: &JsObjectType, p: &PropertyKey) -> Result<JsValue, JErrorType> {
    Ok(get_property(o, p)
        .map(|pd| pd.value)
        .unwrap_or(JsValue::Undefined))
}

/// Returns the first descriptor for `p` found on `o` or its prototype chain.
pub fn get_property(o: &JsObjectType, p: &PropertyKey) -> Option<PropertyDescriptor> {
    let mut current = Some(o.clone());
    while let Some(obj) = current {
        let obj = obj.borrow();
        let obj = obj.as_js_object();
        if let Some(pd) = obj.get_own_property(p) {
            return Some(pd.clone());
        }
        current = obj.get_prototype_of();
    }
    None
}

pub fn get_v(v: &JsValue, p: &PropertyKey) -> Result<JsValue, JErrorType> {
    match v {
        JsValue::Object(o) => get(o, p),
        JsValue::Undefined | JsValue::Null => Err(JErrorType::TypeError(format!(
            "Cannot read property '{}' of {}",
            p, v
        ))),
        _ => Ok(JsValue::Undefined),
    }
}

/// Assigns `value` to `p` on `o`. Fails (returns false) when the nearest descriptor for `p`
/// is read-only; otherwise the property is written as an own property of `o`.
pub fn set(o: &JsObjectType, p: PropertyKey, value: JsValue) -> Result<bool, JErrorType> {
    let mut o = o.borrow_mut();
    let obj = o.as_js_object_mut();
    let own = obj.get_own_property(&p).cloned();
    match own {
        Some(mut pd) => {
            if !pd.writable {
                return Ok(false);
            }
            pd.value = value;
            Ok(obj.define_own_property(p, pd))
        }
        None => {
            let inherited = match obj.get_prototype_of() {
                Some(proto) => get_property(&proto, &p),
                None => None,
            };
            match inherited {
                Some(pd) if !pd.writable => Ok(false),
                _ => Ok(obj.define_own_property(p, PropertyDescriptor::new_data(value))),
            }
        }
    }
}

pub fn set_v(v: &JsValue, p: PropertyKey, value: JsValue) -> Result<bool, JErrorType> {
    match v {
        JsValue::Object(o) => set(o, p, value),
        _ => Err(JErrorType::TypeError(format!(
            "Cannot set property '{}' on {}",
            p, v
        ))),
    }
}

pub fn define_property_or_throw(
    o: &JsObjectType,
    p: PropertyKey,
    descriptor: PropertyDescriptor,
) -> Result<(), JErrorType> {
    let mut o = o.borrow_mut();
    if o.as_js_object_mut().define_own_property(p.clone(), descriptor) {
        Ok(())
    } else {
        Err(JErrorType::TypeError(format!(
            "Cannot redefine property: {}",
            p
        )))
    }
}

pub fn has_own_property(v: &JsValue, p: &PropertyKey) -> bool {
    match v {
        JsValue::Object(o) => o.borrow().as_js_object().has_own_property(p),
        _ => false,
    }
}

pub fn has_property(o: &JsObjectType, p: &PropertyKey) -> bool {
    get_property(o, p).is_some()
}

pub fn delete(o: &JsObjectType, p: &PropertyKey) -> bool {
    o.borrow_mut().as_js_object_mut().delete(p)
}

pub fn own_property_keys(o: &JsObjectType) -> Vec<PropertyKey> {
    o.borrow().as_js_object().own_property_keys()
}

/// Own enumerable properties of `o` as (key, value) pairs in own-key order.
pub fn enumerable_own_entries(o: &JsObjectType) -> Vec<(PropertyKey, JsValue)> {
    let o = o.borrow();
    let obj = o.as_js_object();
    obj.own_property_keys()
        .into_iter()
        .filter_map(|key| match obj.get_own_property(&key) {
            Some(pd) if pd.enumerable => {
                let value = pd.value.clone();
                Some((key, value))
            }
            _ => None,
        })
        .collect()
}

/// Calls the method `p` of `v` with `v` as `this`.
pub fn invoke(
    ctx: &mut EvalContext,
    v: &JsValue,
    p: &PropertyKey,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let f = get_v(v, p)?;
    call(ctx, &f, v.clone(), args)
}
