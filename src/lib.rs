//! # chic - classical inheritance on a prototype object model
//!
//! A small object model (values, ordinary objects linked by `[[Prototype]]`, function
//! objects) with a class layer on top:
//! - a root `Class` per realm,
//! - `extend(bag)` to derive a class from a property bag,
//! - override dispatch that keeps the parent implementation reachable through the
//!   super slot (`this.sup(...)`) for the duration of the overriding call,
//! - `construct` running the `init` member with the constructor arguments.
//!
//! ## Quick Start
//!
//! ```
//! use chic::runner::api::JsClass;
//! use chic::runner::class::property_bag::PropertyBag;
//! use chic::runner::ds::execution_context::EvalContext;
//! use chic::runner::ds::object_property::PropertyKey;
//! use chic::runner::ds::operations::object::{get_v, set_v};
//! use chic::runner::ds::value::JsValue;
//!
//! let mut ctx = EvalContext::new();
//! let point = JsClass::base(&ctx)
//!     .extend(&mut ctx, PropertyBag::new()
//!         .add_method("init", |_, this, args| {
//!             let x = args.get(0).cloned().unwrap_or(JsValue::Undefined);
//!             set_v(&this, PropertyKey::from("x"), x)?;
//!             Ok(JsValue::Undefined)
//!         }))
//!     .unwrap();
//!
//! let p = point.construct(&mut ctx, vec![JsValue::from(3)]).unwrap();
//! assert_eq!(get_v(&p, &PropertyKey::from("x")).unwrap(), JsValue::from(3));
//! assert!(JsClass::base(&ctx).is_instance(&p).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Data structures (values, objects, functions, realm, call stack)
//! - **[`runner::class`]** - Root class, `extend`, override dispatch, construction
//! - **[`runner::api`]** - Typed handles for Rust callers
//! - **[`runner::config`]** - Realm configuration

#[macro_use]
extern crate lazy_static;

pub mod runner;
