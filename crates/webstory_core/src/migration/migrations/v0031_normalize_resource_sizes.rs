//! Coerces stringified media dimensions into numbers.
//!
//! Host REST payloads historically serialized `width`/`height` as strings,
//! both on the resource itself and inside its `sizes` renditions.

use crate::migration::helpers::{for_each_element_in_doc, is_media, JsonMap};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_media(element) {
            return;
        }
        let Some(resource) = element.get_mut("resource").and_then(Value::as_object_mut) else {
            return;
        };
        coerce_dimension(resource, "width");
        coerce_dimension(resource, "height");
        let Some(sizes) = resource.get_mut("sizes").and_then(Value::as_object_mut) else {
            return;
        };
        for rendition in sizes.values_mut() {
            if let Some(rendition) = rendition.as_object_mut() {
                coerce_dimension(rendition, "width");
                coerce_dimension(rendition, "height");
            }
        }
    });
    doc
}

fn coerce_dimension(map: &mut JsonMap, key: &str) {
    let Some(parsed) = map
        .get(key)
        .and_then(Value::as_str)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
    else {
        return;
    };
    map.insert(key.to_string(), Value::from(parsed.round() as i64));
}
