use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::class::override_fn::OverrideFunction;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::{EvalContext, ExecutionContext};
use crate::runner::ds::object::{JsObject, JsObjectType, ObjectBase, ObjectType};
use crate::runner::ds::value::JsValue;

/// Function signature for native functions.
/// Native functions receive the evaluation context, `this` value, and arguments.
pub type NativeFn =
    fn(ctx: &mut EvalContext, this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType>;

pub type ClosureFn = dyn Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType>;

/// Body of a function supplied from Rust.
#[derive(Clone)]
pub enum BuiltInFn {
    /// Direct function pointer.
    Native(NativeFn),

    /// Capturing closure.
    Closure(Rc<ClosureFn>),
}

impl BuiltInFn {
    pub fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        match self {
            BuiltInFn::Native(f) => f(ctx, this, args),
            BuiltInFn::Closure(f) => f(ctx, this, args),
        }
    }
}

#[derive(Clone)]
pub struct BoundFunctionData {
    pub bound_target_function: JsValue,
    pub bound_this: JsValue,
    pub bound_arguments: Vec<JsValue>,
}

#[derive(Clone)]
pub enum FunctionKind {
    BuiltIn(BuiltInFn),
    Bound(BoundFunctionData),
    /// A property bag method that shadows a parent prototype method.
    Override(Rc<OverrideFunction>),
    /// Constructor of a class; only reachable through `construct`.
    ClassConstructor,
}

pub struct FunctionObjectBase {
    pub name: String,
    pub kind: FunctionKind,
}

pub trait JsFunctionObject: JsObject {
    fn get_function_object_base(&self) -> &FunctionObjectBase;

    fn is_class_constructor(&self) -> bool {
        matches!(
            self.get_function_object_base().kind,
            FunctionKind::ClassConstructor
        )
    }
}

pub struct FunctionObject {
    function_object: FunctionObjectBase,
    object_base: ObjectBase,
}
impl FunctionObject {
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        FunctionObject {
            function_object: FunctionObjectBase {
                name: name.into(),
                kind,
            },
            object_base: ObjectBase::new(),
        }
    }
}
impl JsObject for FunctionObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.object_base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.object_base
    }

    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn to_string(&self) -> String {
        let base = &self.function_object;
        match &base.kind {
            FunctionKind::ClassConstructor => format!("class {} {{ [native code] }}", base.name),
            FunctionKind::Bound(_) => {
                format!("function bound {}() {{ [native code] }}", base.name)
            }
            _ => format!("function {}() {{ [native code] }}", base.name),
        }
    }
}
impl JsFunctionObject for FunctionObject {
    fn get_function_object_base(&self) -> &FunctionObjectBase {
        &self.function_object
    }
}

pub fn new_function_object(name: impl Into<String>, kind: FunctionKind) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Function(FunctionObject::new(
        name, kind,
    ))))
}

pub fn new_native_function(name: impl Into<String>, f: NativeFn) -> JsObjectType {
    new_function_object(name, FunctionKind::BuiltIn(BuiltInFn::Native(f)))
}

pub fn new_closure_function<F>(name: impl Into<String>, f: F) -> JsObjectType
where
    F: Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType> + 'static,
{
    new_function_object(name, FunctionKind::BuiltIn(BuiltInFn::Closure(Rc::new(f))))
}

/// Creates a function that calls `target` with `this` fixed to `bound_this` and
/// `bound_arguments` prepended to the call arguments.
pub fn new_bound_function(
    target: &JsObjectType,
    bound_this: JsValue,
    bound_arguments: Vec<JsValue>,
) -> JsObjectType {
    let name = match target.borrow().as_js_function_object() {
        Some(f) => f.get_function_object_base().name.clone(),
        None => String::new(),
    };
    new_function_object(
        name,
        FunctionKind::Bound(BoundFunctionData {
            bound_target_function: JsValue::Object(target.clone()),
            bound_this,
            bound_arguments,
        }),
    )
}

/// Calls `f` with the given receiver. The function's kind is cloned out before dispatch so
/// the callee is free to borrow or mutate the function object itself.
pub fn call(
    ctx: &mut EvalContext,
    f: &JsValue,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let (function, name, kind) = match f {
        JsValue::Object(o) => {
            let target = match o.borrow().as_js_function_object() {
                Some(fo) => {
                    let base = fo.get_function_object_base();
                    Some((base.name.clone(), base.kind.clone()))
                }
                None => None,
            };
            match target {
                Some((name, kind)) => (o.clone(), name, kind),
                None => return Err(not_a_function(f)),
            }
        }
        _ => return Err(not_a_function(f)),
    };

    let counted = !matches!(kind, FunctionKind::Bound(_) | FunctionKind::Override(_));
    let _frame = ctx.ctx_stack.push_execution_ctx(ExecutionContext {
        function,
        name: name.clone(),
        counted,
    })?;
    match kind {
        FunctionKind::BuiltIn(b) => b.call(ctx, this, args),
        FunctionKind::Bound(data) => {
            let mut new_args = data.bound_arguments;
            new_args.extend(args);
            call(ctx, &data.bound_target_function, data.bound_this, new_args)
        }
        FunctionKind::Override(o) => o.call(ctx, this, args),
        FunctionKind::ClassConstructor => Err(JErrorType::TypeError(format!(
            "Class constructor '{}' cannot be invoked without 'new'",
            name
        ))),
    }
}

fn not_a_function(v: &JsValue) -> JErrorType {
    JErrorType::TypeError(format!("'{}' is not a function", v))
}
