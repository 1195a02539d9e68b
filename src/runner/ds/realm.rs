use std::rc::Rc;

use crate::runner::class::base::create_base_class;
use crate::runner::class::extend::class_extend;
use crate::runner::config::RealmConfig;
use crate::runner::ds::function_object::new_native_function;
use crate::runner::ds::object::JsObjectType;

pub type JsCodeRealmType = Rc<CodeRealm>;

pub enum WellKnownIntrinsics {
    /// The root class.
    Class,
    ClassPrototype,
    /// The single `extend` function shared by every class of the realm.
    Extend,
}

pub struct CodeRealm {
    config: RealmConfig,
    class: JsObjectType,
    class_prototype: JsObjectType,
    extend: JsObjectType,
}

impl CodeRealm {
    pub fn new(config: RealmConfig) -> Self {
        let extend = new_native_function("extend", class_extend);
        let (class, class_prototype) = create_base_class(&extend);
        CodeRealm {
            config,
            class,
            class_prototype,
            extend,
        }
    }

    pub fn config(&self) -> &RealmConfig {
        &self.config
    }

    pub fn get_intrinsic(&self, intrinsic: WellKnownIntrinsics) -> JsObjectType {
        match intrinsic {
            WellKnownIntrinsics::Class => self.class.clone(),
            WellKnownIntrinsics::ClassPrototype => self.class_prototype.clone(),
            WellKnownIntrinsics::Extend => self.extend.clone(),
        }
    }
}
