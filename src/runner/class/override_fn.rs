//! Dispatch for property bag methods that shadow a parent prototype method.
//!
//! While the override body runs, the receiver carries an own property (the super slot,
//! `sup` unless configured otherwise) holding the parent's implementation bound to the
//! receiver. The slot is installed right before the body is called and put back to its
//! previous state as soon as the body finishes, however it finishes.

use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::function_object::{
    call, new_bound_function, new_function_object, FunctionKind,
};
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{PropertyDescriptor, PropertyKey};
use crate::runner::ds::operations::object::get;
use crate::runner::ds::value::JsValue;

pub struct OverrideFunction {
    key: PropertyKey,
    body: JsValue,
    parent_prototype: JsObjectType,
}

impl OverrideFunction {
    /// The function supplied in the property bag.
    pub fn body(&self) -> &JsValue {
        &self.body
    }

    pub(crate) fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        let receiver = match &this {
            JsValue::Object(o) => o.clone(),
            // Primitives cannot hold the slot.
            _ => return call(ctx, &self.body, this, args),
        };

        // Resolved per call so later changes to the parent prototype are visible.
        let parent = match get(&self.parent_prototype, &self.key)? {
            JsValue::Object(f) if f.borrow().is_callable() => {
                JsValue::Object(new_bound_function(&f, this.clone(), Vec::new()))
            }
            other => other,
        };
        let slot = PropertyKey::from(ctx.realm().config().super_slot.as_str());

        let _guard = SuperSlotGuard::install(receiver, slot, parent)?;
        call(ctx, &self.body, this, args)
    }
}

pub fn new_override_function(
    key: PropertyKey,
    body: JsValue,
    parent_prototype: JsObjectType,
) -> JsObjectType {
    new_function_object(
        key.to_string(),
        FunctionKind::Override(Rc::new(OverrideFunction {
            key,
            body,
            parent_prototype,
        })),
    )
}

struct SuperSlotGuard {
    receiver: JsObjectType,
    slot: PropertyKey,
    saved: Option<PropertyDescriptor>,
}

impl SuperSlotGuard {
    fn install(
        receiver: JsObjectType,
        slot: PropertyKey,
        value: JsValue,
    ) -> Result<Self, JErrorType> {
        let saved = {
            let mut r = receiver.try_borrow_mut().map_err(|_| {
                JErrorType::TypeError(format!("Cannot set '{}' on a receiver in use", slot))
            })?;
            r.as_js_object_mut()
                .get_object_base_mut()
                .replace_property(slot.clone(), PropertyDescriptor::new_data(value))
        };
        tracing::trace!(slot = %slot, had_value = saved.is_some(), "super slot installed");
        Ok(SuperSlotGuard {
            receiver,
            slot,
            saved,
        })
    }
}

impl Drop for SuperSlotGuard {
    fn drop(&mut self) {
        match self.receiver.try_borrow_mut() {
            Ok(mut r) => {
                let base = r.as_js_object_mut().get_object_base_mut();
                match self.saved.take() {
                    Some(pd) => {
                        base.replace_property(self.slot.clone(), pd);
                    }
                    None => {
                        base.remove_property(&self.slot);
                    }
                }
                tracing::trace!(slot = %self.slot, "super slot restored");
            }
            Err(_) => {
                tracing::warn!(slot = %self.slot, "receiver borrowed, super slot not restored")
            }
        }
    }
}
