//! Restructures text padding from a single number into per-axis values.

use crate::migration::helpers::{
    backfill_field, element_type, for_each_element_in_doc, ElementType,
};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        match element.get("padding").cloned() {
            Some(Value::Number(padding)) => {
                element.insert(
                    "padding".to_string(),
                    json!({"horizontal": padding, "vertical": padding}),
                );
            }
            Some(Value::Object(_)) => {
                if let Some(padding) = element
                    .get_mut("padding")
                    .and_then(Value::as_object_mut)
                {
                    backfill_field(padding, "horizontal", Value::from(0));
                    backfill_field(padding, "vertical", Value::from(0));
                }
            }
            _ => {
                element.insert(
                    "padding".to_string(),
                    json!({"horizontal": 0, "vertical": 0}),
                );
            }
        }
    });
    doc
}
