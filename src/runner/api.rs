//! Typed entry points for Rust callers.
//!
//! ```
//! use chic::runner::api::JsClass;
//! use chic::runner::class::property_bag::PropertyBag;
//! use chic::runner::ds::execution_context::EvalContext;
//! use chic::runner::ds::value::JsValue;
//!
//! let mut ctx = EvalContext::new();
//! let animal = JsClass::base(&ctx)
//!     .extend(&mut ctx, PropertyBag::new()
//!         .add_method("speak", |_, _, _| Ok(JsValue::from("..."))))
//!     .unwrap();
//! let dog = animal
//!     .extend(&mut ctx, PropertyBag::new().add_method("speak", |ctx, this, args| {
//!         let parent = JsClass::call_super(ctx, &this, args)?;
//!         Ok(JsValue::from(format!("woof {}", parent)))
//!     }))
//!     .unwrap();
//!
//! let rex = dog.construct(&mut ctx, vec![]).unwrap();
//! let said = JsClass::invoke(&mut ctx, &rex, "speak", vec![]).unwrap();
//! assert_eq!(said, JsValue::from("woof \"...\""));
//! assert!(animal.is_instance(&rex).unwrap());
//! ```

use crate::runner::class::construct::construct;
use crate::runner::class::property_bag::PropertyBag;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::EvalContext;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{PropertyKey, KEY_EXTEND, KEY_PROTOTYPE};
use crate::runner::ds::operations::object::{get, invoke};
use crate::runner::ds::operations::test_and_comparison::{
    instance_of, is_class_constructor, same_object,
};
use crate::runner::ds::realm::WellKnownIntrinsics;
use crate::runner::ds::value::JsValue;

/// Handle on a class constructor.
#[derive(Clone)]
pub struct JsClass {
    constructor: JsObjectType,
}

impl JsClass {
    /// The realm's root `Class`.
    pub fn base(ctx: &EvalContext) -> Self {
        JsClass {
            constructor: ctx.realm().get_intrinsic(WellKnownIntrinsics::Class),
        }
    }

    pub fn from_value(v: &JsValue) -> Result<Self, JErrorType> {
        match v {
            JsValue::Object(o) if is_class_constructor(v) => Ok(JsClass {
                constructor: o.clone(),
            }),
            _ => Err(JErrorType::TypeError(format!("'{}' is not a class", v))),
        }
    }

    pub fn as_value(&self) -> JsValue {
        JsValue::Object(self.constructor.clone())
    }

    pub fn prototype(&self) -> Result<JsValue, JErrorType> {
        get(&self.constructor, &KEY_PROTOTYPE)
    }

    pub fn extend_function(&self) -> Result<JsValue, JErrorType> {
        get(&self.constructor, &KEY_EXTEND)
    }

    /// Derives a class through this class's `extend` member.
    pub fn extend(&self, ctx: &mut EvalContext, bag: PropertyBag) -> Result<JsClass, JErrorType> {
        let derived = invoke(ctx, &self.as_value(), &KEY_EXTEND, vec![bag.into_value()])?;
        JsClass::from_value(&derived)
    }

    pub fn construct(
        &self,
        ctx: &mut EvalContext,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        construct(ctx, &self.as_value(), args)
    }

    pub fn is_instance(&self, v: &JsValue) -> Result<bool, JErrorType> {
        instance_of(v, &self.as_value())
    }

    /// Calls method `name` of `receiver` with `receiver` as `this`.
    pub fn invoke(
        ctx: &mut EvalContext,
        receiver: &JsValue,
        name: &str,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        invoke(ctx, receiver, &PropertyKey::from(name), args)
    }

    /// From inside an override: calls the parent implementation held in the super slot.
    pub fn call_super(
        ctx: &mut EvalContext,
        this: &JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        let slot = PropertyKey::from(ctx.realm().config().super_slot.as_str());
        invoke(ctx, this, &slot, args)
    }
}

impl PartialEq for JsClass {
    fn eq(&self, other: &Self) -> bool {
        same_object(&self.constructor, &other.constructor)
    }
}

impl std::fmt::Debug for JsClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JsClass({})", self.as_value())
    }
}
