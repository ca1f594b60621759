//! Drops denormalized font metadata that the editor now resolves itself.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        let Some(font) = element.get_mut("font").and_then(Value::as_object_mut) else {
            return;
        };
        font.remove("weights");
        font.remove("styles");
        font.remove("variants");
    });
    doc
}
