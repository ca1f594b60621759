//! Marks video resources without a host attachment id as external.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Video) {
            return;
        }
        let Some(resource) = element.get_mut("resource").and_then(Value::as_object_mut) else {
            return;
        };
        if resource.contains_key("isExternal") {
            return;
        }
        let has_id = resource.get("id").is_some_and(|id| !id.is_null());
        resource.insert("isExternal".to_string(), Value::from(!has_id));
    });
    doc
}
