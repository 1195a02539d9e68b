use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::function_object::call;
use crate::runner::ds::object::object_create;
use crate::runner::ds::object_property::{PropertyKey, KEY_PROTOTYPE};
use crate::runner::ds::operations::object::get;
use crate::runner::ds::operations::test_and_comparison::{is_callable, is_class_constructor};
use crate::runner::ds::realm::WellKnownIntrinsics;
use crate::runner::ds::value::JsValue;

/// `new F(...args)`: creates an instance linked to `F.prototype` and runs the
/// initializer found on its prototype chain with `args` and the instance as `this`.
pub fn construct(
    ctx: &mut EvalContext,
    f: &JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let class = match f {
        JsValue::Object(o) if is_class_constructor(f) => o,
        _ => {
            return Err(JErrorType::TypeError(format!(
                "'{}' is not a constructor",
                f
            )))
        }
    };
    let prototype = match get(class, &KEY_PROTOTYPE)? {
        JsValue::Object(p) => p,
        _ => ctx
            .realm()
            .get_intrinsic(WellKnownIntrinsics::ClassPrototype),
    };
    let instance = object_create(Some(prototype));

    let initializer_key = PropertyKey::from(ctx.realm().config().initializer.as_str());
    let initializer = get(&instance, &initializer_key)?;
    let instance = JsValue::Object(instance);
    match initializer {
        JsValue::Undefined | JsValue::Null => {
            tracing::trace!(initializer = %initializer_key, "constructed without initializer");
        }
        init if is_callable(&init) => {
            tracing::trace!(
                initializer = %initializer_key,
                args = args.len(),
                "running initializer"
            );
            call(ctx, &init, instance.clone(), args)?;
        }
        other => {
            return Err(JErrorType::TypeError(format!(
                "Initializer '{}' is not a function: {}",
                initializer_key, other
            )))
        }
    }
    Ok(instance)
}
