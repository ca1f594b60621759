//! Normalizes shape masks to the structured object form.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Shape) {
            return;
        }
        match element.get("mask").cloned() {
            Some(Value::String(kind)) => {
                element.insert("mask".to_string(), json!({ "type": kind }));
            }
            Some(Value::Object(_)) => {}
            _ => {
                element.insert("mask".to_string(), json!({"type": "rectangle"}));
            }
        }
    });
    doc
}
