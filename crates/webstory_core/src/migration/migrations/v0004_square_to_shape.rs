//! Retires the dedicated `square` element type in favor of masked shapes.

use crate::migration::helpers::{backfill_field, for_each_element_in_doc};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element.get("type").and_then(Value::as_str) == Some("square") {
            element.insert("type".to_string(), Value::from("shape"));
            backfill_field(element, "mask", json!({"type": "rectangle"}));
        }
    });
    doc
}
