use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::runner::ds::function_object::{FunctionObject, JsFunctionObject};
use crate::runner::ds::object_property::{PropertyDescriptor, PropertyKey};

pub type JsObjectType = Rc<RefCell<ObjectType>>;

pub enum ObjectType {
    Ordinary(OrdinaryObject),
    Function(FunctionObject),
}
impl ObjectType {
    pub fn is_callable(&self) -> bool {
        match self {
            ObjectType::Function(_) => true,
            _ => false,
        }
    }

    pub fn as_js_object(&self) -> &dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait(),
            ObjectType::Function(o) => o.as_super_trait(),
        }
    }

    pub fn as_js_object_mut(&mut self) -> &mut dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait_mut(),
            ObjectType::Function(o) => o.as_super_trait_mut(),
        }
    }

    pub fn as_js_function_object(&self) -> Option<&dyn JsFunctionObject> {
        match self {
            ObjectType::Function(o) => Some(o),
            _ => None,
        }
    }
}

pub struct ObjectBase {
    properties: IndexMap<PropertyKey, PropertyDescriptor>,
    prototype: Option<JsObjectType>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            properties: IndexMap::new(),
            prototype: None,
        }
    }

    pub fn with_prototype(prototype: Option<JsObjectType>) -> Self {
        ObjectBase {
            properties: IndexMap::new(),
            prototype,
        }
    }

    /// Writes the descriptor as is, bypassing attribute checks. Returns what was there.
    pub(crate) fn replace_property(
        &mut self,
        property: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> Option<PropertyDescriptor> {
        self.properties.insert(property, descriptor)
    }

    pub(crate) fn remove_property(&mut self, property: &PropertyKey) -> Option<PropertyDescriptor> {
        self.properties.shift_remove(property)
    }
}
impl Default for ObjectBase {
    fn default() -> Self {
        Self::new()
    }
}

pub trait JsObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn get_object_base(&self) -> &ObjectBase;

    fn as_super_trait(&self) -> &dyn JsObject;

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject;

    fn get_prototype_of(&self) -> Option<JsObjectType> {
        self.get_object_base().prototype.clone()
    }

    fn get_own_property(&self, property: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.get_object_base().properties.get(property)
    }

    fn has_own_property(&self, property: &PropertyKey) -> bool {
        self.get_object_base().properties.contains_key(property)
    }

    /// Defines or updates an own data property. An existing non-configurable property can
    /// only have its value replaced, and only while it is writable.
    fn define_own_property(
        &mut self,
        property: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> bool {
        if let Some(current) = self.get_own_property(&property) {
            if !current.configurable {
                if !current.writable
                    || descriptor.configurable
                    || descriptor.enumerable != current.enumerable
                {
                    return false;
                }
            }
        }
        self.get_object_base_mut()
            .properties
            .insert(property, descriptor);
        true
    }

    fn delete(&mut self, property: &PropertyKey) -> bool {
        match self.get_own_property(property) {
            None => true,
            Some(pd) => {
                if pd.configurable {
                    self.get_object_base_mut().remove_property(property);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn own_property_keys(&self) -> Vec<PropertyKey> {
        let mut int_keys = vec![];
        let mut str_keys = vec![];
        for key in self.get_object_base().properties.keys() {
            match key {
                PropertyKey::Str(_) => str_keys.push(key.clone()),
                PropertyKey::Int(d) => int_keys.push(*d),
            }
        }
        int_keys.sort_unstable();

        let mut result = int_keys
            .into_iter()
            .map(PropertyKey::Int)
            .collect::<Vec<PropertyKey>>();
        result.append(&mut str_keys);
        result
    }

    fn to_string(&self) -> String {
        "object".to_string()
    }
}

pub struct OrdinaryObject {
    object_base: ObjectBase,
}
impl OrdinaryObject {
    pub fn new(prototype: Option<JsObjectType>) -> Self {
        OrdinaryObject {
            object_base: ObjectBase::with_prototype(prototype),
        }
    }
}
impl JsObject for OrdinaryObject {
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
}

/// Creates an ordinary object whose `[[Prototype]]` is `prototype`.
pub fn object_create(prototype: Option<JsObjectType>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Ordinary(OrdinaryObject::new(
        prototype,
    ))))
}
