//! Downgrades retired conic gradients to linear gradients.

use crate::migration::helpers::{for_each_element_mut, for_each_page_mut, JsonMap};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        downgrade_conic(page, "backgroundColor");
        for_each_element_mut(page, |element| {
            downgrade_conic(element, "backgroundColor");
        });
    });
    doc
}

fn downgrade_conic(map: &mut JsonMap, key: &str) {
    let Some(pattern) = map.get_mut(key).and_then(Value::as_object_mut) else {
        return;
    };
    if pattern.get("type").and_then(Value::as_str) == Some("conic") {
        pattern.insert("type".to_string(), Value::from("linear"));
    }
}
