//! Tests for the root class and single-level extension.

extern crate chic;


use chic::runner::api::JsClass;
use chic::runner::class::property_bag::PropertyBag;
use chic::runner::ds::execution_context::EvalContext;
use chic::runner::ds::object_property::PropertyKey;
use chic::runner::ds::operations::object::{get_v, has_own_property, invoke, set_v};
use chic::runner::ds::operations::test_and_comparison::is_callable;
use chic::runner::ds::operations::type_conversion::get_type;
use chic::runner::ds::value::JsValue;
use spy_util::Spy;

fn key(name: &str) -> PropertyKey {
    PropertyKey::from(name)
}

#[test]
fn test_class_is_a_function() {
    let ctx = EvalContext::new();
    assert_eq!(get_type(&JsClass::base(&ctx).as_value()), "function");
}

#[test]
fn test_class_has_an_extend_function() {
    let ctx = EvalContext::new();
    let extend = JsClass::base(&ctx).extend_function().unwrap();
    assert!(is_callable(&extend));
}

// ============================================================================
// MyClass = Class.extend({ init, foo, bar: 123 })
// ============================================================================

mod my_class {
    use super::*;

    struct Fixture {
        ctx: EvalContext,
        init: Spy,
        foo: Spy,
        my_class: JsClass,
        instance: JsValue,
    }

    fn setup() -> Fixture {
        let mut ctx = EvalContext::new();
        let init = Spy::new("init");
        let foo = Spy::new("foo");
        let my_class = JsClass::base(&ctx)
            .extend(
                &mut ctx,
                PropertyBag::new()
                    .add_property("init", init.function())
                    .add_property("foo", foo.function())
                    .add_property("bar", 123),
            )
            .unwrap();
        let instance = my_class
            .construct(
                &mut ctx,
                vec![JsValue::from("foo"), JsValue::from("bar"), JsValue::from("baz")],
            )
            .unwrap();
        Fixture {
            ctx,
            init,
            foo,
            my_class,
            instance,
        }
    }

    #[test]
    fn test_should_be_a_function() {
        let f = setup();
        assert_eq!(get_type(&f.my_class.as_value()), "function");
    }

    #[test]
    fn test_should_have_an_extend_function() {
        let f = setup();
        assert!(is_callable(&f.my_class.extend_function().unwrap()));
    }

    #[test]
    fn test_extend_function_is_a_reference_to_class_extend() {
        let f = setup();
        assert_eq!(
            f.my_class.extend_function().unwrap(),
            JsClass::base(&f.ctx).extend_function().unwrap()
        );
    }

    #[test]
    fn test_prototype_mirrors_properties_of_the_bag() {
        let f = setup();
        let prototype = f.my_class.prototype().unwrap();
        assert!(!get_v(&prototype, &key("foo")).unwrap().is_undefined());
        assert!(!get_v(&prototype, &key("bar")).unwrap().is_undefined());
        assert_eq!(get_v(&prototype, &key("foo")).unwrap(), f.foo.function());
        assert_eq!(get_v(&prototype, &key("bar")).unwrap(), JsValue::from(123));
    }

    #[test]
    fn test_construction_calls_init() {
        let f = setup();
        assert!(f.init.called_once());
    }

    #[test]
    fn test_construction_calls_init_with_the_expected_arguments() {
        let f = setup();
        assert_eq!(
            f.init.calls_with(&[
                JsValue::from("foo"),
                JsValue::from("bar"),
                JsValue::from("baz")
            ]),
            1
        );
    }

    #[test]
    fn test_construction_calls_init_with_the_instance_as_context() {
        let f = setup();
        assert_eq!(f.init.first_call().this, f.instance);
    }

    #[test]
    fn test_instance_is_an_instance_of_class() {
        let f = setup();
        assert!(JsClass::base(&f.ctx).is_instance(&f.instance).unwrap());
        assert!(f.my_class.is_instance(&f.instance).unwrap());
    }

    #[test]
    fn test_instance_reads_data_member_from_prototype() {
        let f = setup();
        assert_eq!(get_v(&f.instance, &key("bar")).unwrap(), JsValue::from(123));
        assert!(!has_own_property(&f.instance, &key("bar")));
    }

    #[test]
    fn test_calling_a_method_calls_the_bag_function() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("foo"), vec![]).unwrap();
        assert!(f.foo.called_once());
    }

    #[test]
    fn test_calling_a_method_passes_the_expected_arguments() {
        let mut f = setup();
        let args = vec![JsValue::from("bar"), JsValue::from("baz"), JsValue::from("qux")];
        invoke(&mut f.ctx, &f.instance, &key("foo"), args.clone()).unwrap();
        assert_eq!(f.foo.calls_with(&args), 1);
    }

    #[test]
    fn test_calling_a_method_uses_the_instance_as_context() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("foo"), vec![]).unwrap();
        assert_eq!(f.foo.first_call().this, f.instance);
    }

    #[test]
    fn test_calling_a_method_leaves_no_sup_property() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("foo"), vec![]).unwrap();
        assert!(!has_own_property(&f.instance, &key("sup")));
    }

    #[test]
    fn test_calling_a_method_keeps_a_preset_sup_property() {
        let mut f = setup();
        set_v(&f.instance, key("sup"), JsValue::Boolean(true)).unwrap();
        invoke(&mut f.ctx, &f.instance, &key("foo"), vec![]).unwrap();
        assert_eq!(get_v(&f.instance, &key("sup")).unwrap(), JsValue::Boolean(true));
    }
}

// ============================================================================
// MyOtherClass = MyClass.extend({ init, foo, bar: function () { this.sup(); } })
// ============================================================================

mod my_other_class {
    use super::*;

    struct Fixture {
        ctx: EvalContext,
        foo: Spy,
        bar: Spy,
        my_class: JsClass,
        my_other_class: JsClass,
        instance: JsValue,
    }

    fn setup() -> Fixture {
        let mut ctx = EvalContext::new();
        let init = Spy::with_body("init", |_, this, _| {
            set_v(&this, PropertyKey::from("test"), JsValue::from(123))?;
            Ok(JsValue::Undefined)
        });
        let foo = Spy::new("foo");
        let bar = Spy::new("bar");
        let my_class = JsClass::base(&ctx)
            .extend(
                &mut ctx,
                PropertyBag::new()
                    .add_property("init", init.function())
                    .add_property("foo", foo.function())
                    .add_property("bar", bar.function()),
            )
            .unwrap();
        let my_other_class = my_class
            .extend(
                &mut ctx,
                PropertyBag::new()
                    .add_method("init", |_, _, _| Ok(JsValue::Undefined))
                    .add_method("foo", |_, _, _| Ok(JsValue::Undefined))
                    .add_method("bar", |ctx, this, _| {
                        JsClass::call_super(ctx, &this, vec![])?;
                        Ok(JsValue::Undefined)
                    }),
            )
            .unwrap();
        let instance = my_other_class.construct(&mut ctx, vec![]).unwrap();
        Fixture {
            ctx,
            foo,
            bar,
            my_class,
            my_other_class,
            instance,
        }
    }

    #[test]
    fn test_constructor_properties_do_not_leak_into_the_prototype() {
        let f = setup();
        let prototype = f.my_other_class.prototype().unwrap();
        assert!(get_v(&prototype, &key("test")).unwrap().is_undefined());
    }

    #[test]
    fn test_overridden_init_does_not_run_parent_init() {
        let f = setup();
        assert!(get_v(&f.instance, &key("test")).unwrap().is_undefined());
    }

    #[test]
    fn test_instance_is_an_instance_of_class() {
        let f = setup();
        assert!(JsClass::base(&f.ctx).is_instance(&f.instance).unwrap());
    }

    #[test]
    fn test_instance_is_an_instance_of_my_class() {
        let f = setup();
        assert!(f.my_class.is_instance(&f.instance).unwrap());
        assert!(f.my_other_class.is_instance(&f.instance).unwrap());
    }

    #[test]
    fn test_calling_an_overridden_method_does_not_call_the_parent() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("foo"), vec![]).unwrap();
        assert!(f.foo.not_called());
    }

    #[test]
    fn test_calling_sup_calls_the_parent_method() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("bar"), vec![]).unwrap();
        assert!(f.bar.called_once());
    }

    #[test]
    fn test_calling_sup_uses_the_new_instance_as_context() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("bar"), vec![]).unwrap();
        assert_eq!(f.bar.first_call().this, f.instance);
    }

    #[test]
    fn test_calling_sup_leaves_no_sup_property() {
        let mut f = setup();
        invoke(&mut f.ctx, &f.instance, &key("bar"), vec![]).unwrap();
        assert!(!has_own_property(&f.instance, &key("sup")));
    }
}
