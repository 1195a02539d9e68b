use crate::runner::class::new_class;
use crate::runner::class::override_fn::new_override_function;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::object::object_create;
use crate::runner::ds::object_property::{PropertyDescriptor, KEY_CONSTRUCTOR, KEY_PROTOTYPE};
use crate::runner::ds::operations::object::{enumerable_own_entries, get};
use crate::runner::ds::operations::test_and_comparison::{is_callable, is_class_constructor};
use crate::runner::ds::realm::WellKnownIntrinsics;
use crate::runner::ds::value::JsValue;

/// `Parent.extend(bag)`.
///
/// Every own enumerable entry of `bag` lands on the new prototype. Functions whose name
/// resolves to a function through the parent prototype are wrapped as overrides; anything
/// else, including data entries that collide with parent methods, is installed as given.
/// A missing or non-object bag is an empty bag.
///
/// The derived class gets the currently running `extend` function itself, so every class
/// in a hierarchy shares one `extend`.
pub(crate) fn class_extend(
    ctx: &mut EvalContext,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let parent = match &this {
        JsValue::Object(o) if is_class_constructor(&this) => o.clone(),
        _ => {
            return Err(JErrorType::TypeError(format!(
                "extend called on non-class {}",
                this
            )))
        }
    };
    let parent_prototype = match get(&parent, &KEY_PROTOTYPE)? {
        JsValue::Object(p) => p,
        other => {
            return Err(JErrorType::TypeError(format!(
                "Class prototype is not an object: {}",
                other
            )))
        }
    };
    let entries = match args.first() {
        Some(JsValue::Object(bag)) => enumerable_own_entries(bag),
        _ => Vec::new(),
    };

    let prototype = object_create(Some(parent_prototype.clone()));
    let mut overrides = 0;
    let mut has_constructor = false;
    for (key, value) in entries {
        has_constructor |= key == *KEY_CONSTRUCTOR;
        let value = if is_callable(&value) && is_callable(&get(&parent_prototype, &key)?) {
            overrides += 1;
            JsValue::Object(new_override_function(
                key.clone(),
                value,
                parent_prototype.clone(),
            ))
        } else {
            value
        };
        prototype
            .borrow_mut()
            .as_js_object_mut()
            .get_object_base_mut()
            .replace_property(key, PropertyDescriptor::new_data(value));
    }

    let extend = match ctx.running_function() {
        Some(f) => f,
        None => ctx.realm().get_intrinsic(WellKnownIntrinsics::Extend),
    };
    let class = new_class("", &prototype, &extend, !has_constructor);
    tracing::debug!(
        parent = %this,
        members = prototype.borrow().as_js_object().own_property_keys().len(),
        overrides,
        "derived class"
    );
    Ok(JsValue::Object(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::class::property_bag::PropertyBag;
    use crate::runner::ds::function_object::{call, new_native_function};
    use crate::runner::ds::object_property::{PropertyKey, KEY_EXTEND};
    use crate::runner::ds::operations::object::{has_own_property, invoke};

    fn base(ctx: &EvalContext) -> JsValue {
        JsValue::Object(ctx.realm().get_intrinsic(WellKnownIntrinsics::Class))
    }

    fn noop(
        _ctx: &mut EvalContext,
        _this: JsValue,
        _args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        Ok(JsValue::Undefined)
    }

    #[test]
    fn test_extend_requires_class_receiver() {
        let mut ctx = EvalContext::new();
        let extend = JsValue::Object(ctx.realm().get_intrinsic(WellKnownIntrinsics::Extend));
        let result = call(&mut ctx, &extend, JsValue::from(1), vec![]);
        assert_eq!(
            result,
            Err(JErrorType::TypeError("extend called on non-class 1".to_string()))
        );
        let plain = JsValue::Object(new_native_function("noop", noop));
        assert!(call(&mut ctx, &extend, plain, vec![]).is_err());
    }

    #[test]
    fn test_missing_bag_is_empty_bag() {
        let mut ctx = EvalContext::new();
        let class = base(&ctx);
        for args in vec![vec![], vec![JsValue::Null], vec![JsValue::from("bag")]] {
            let derived = invoke(&mut ctx, &class, &KEY_EXTEND, args).unwrap();
            let prototype = get(derived.as_object().unwrap(), &KEY_PROTOTYPE).unwrap();
            assert_eq!(
                prototype.as_object().unwrap().borrow().as_js_object().own_property_keys(),
                vec![PropertyKey::from("constructor")]
            );
        }
    }

    #[test]
    fn test_data_entry_over_parent_method_is_not_wrapped() {
        let mut ctx = EvalContext::new();
        let class = base(&ctx);
        let parent_bag = PropertyBag::new().add_native_method("foo", noop);
        let parent = invoke(&mut ctx, &class, &KEY_EXTEND, vec![parent_bag.into_value()]).unwrap();
        let child_bag = PropertyBag::new().add_property("foo", 5);
        let child = invoke(&mut ctx, &parent, &KEY_EXTEND, vec![child_bag.into_value()]).unwrap();

        let prototype = get(child.as_object().unwrap(), &KEY_PROTOTYPE).unwrap();
        assert_eq!(
            get(prototype.as_object().unwrap(), &PropertyKey::from("foo")).unwrap(),
            JsValue::from(5)
        );
    }

    #[test]
    fn test_bag_constructor_entry_is_kept() {
        let mut ctx = EvalContext::new();
        let class = base(&ctx);
        let bag = PropertyBag::new().add_property("constructor", "custom");
        let derived = invoke(&mut ctx, &class, &KEY_EXTEND, vec![bag.into_value()]).unwrap();
        let prototype = get(derived.as_object().unwrap(), &KEY_PROTOTYPE).unwrap();
        assert!(has_own_property(&prototype, &KEY_CONSTRUCTOR));
        assert_eq!(
            get(prototype.as_object().unwrap(), &KEY_CONSTRUCTOR).unwrap(),
            JsValue::from("custom")
        );
    }
}
