//! The root class every hierarchy descends from.

use crate::runner::class::new_class;
use crate::runner::ds::object::{object_create, JsObjectType};

pub const BASE_CLASS_NAME: &str = "Class";

/// Creates `Class` and its prototype. The prototype has no members besides `constructor`
/// and no prototype of its own.
pub(crate) fn create_base_class(extend: &JsObjectType) -> (JsObjectType, JsObjectType) {
    let prototype = object_create(None);
    let class = new_class(BASE_CLASS_NAME, &prototype, extend, true);
    (class, prototype)
}
