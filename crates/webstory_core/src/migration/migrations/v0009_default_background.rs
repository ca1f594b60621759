//! Guarantees every page has a background element.
//!
//! Pages without a `backgroundElementId` get a synthesized full-bleed white
//! shape prepended to their elements.

use crate::migration::helpers::{for_each_page_mut, new_element_id, solid_white, JsonMap};
use serde_json::{json, Value};

const PAGE_WIDTH: f64 = 1280.0;
const PAGE_HEIGHT: f64 = 1920.0;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, add_default_background);
    doc
}

fn add_default_background(page: &mut JsonMap) {
    if page.contains_key("backgroundElementId") {
        return;
    }

    let id = new_element_id();
    let shape = json!({
        "id": id.clone(),
        "type": "shape",
        "x": 0,
        "y": 0,
        "width": PAGE_WIDTH,
        "height": PAGE_HEIGHT,
        "rotationAngle": 0,
        "opacity": 100,
        "flip": {"horizontal": false, "vertical": false},
        "isFill": true,
        "mask": {"type": "rectangle"},
        "backgroundColor": solid_white(),
    });

    match page.get_mut("elements").and_then(Value::as_array_mut) {
        Some(elements) => elements.insert(0, shape),
        None => {
            page.insert("elements".to_string(), json!([shape]));
        }
    }
    page.insert("backgroundElementId".to_string(), Value::from(id));
}
