//! Renames the video resource's `videoId` to the generic `id`.

use crate::migration::helpers::{
    element_type, for_each_element_in_doc, rename_field, ElementType,
};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Video) {
            return;
        }
        if let Some(resource) = element.get_mut("resource").and_then(Value::as_object_mut) {
            rename_field(resource, "videoId", "id");
        }
    });
    doc
}
