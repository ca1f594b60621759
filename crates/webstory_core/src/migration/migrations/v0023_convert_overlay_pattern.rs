//! Moves the page-level overlay enum onto the background media element.
//!
//! The legacy `backgroundOverlay` string selects one of three fixed preset
//! patterns. The page property is always removed; the preset is only
//! attached when the first element is an image or a video.

use crate::migration::helpers::{
    element_type, for_each_page_mut, ElementType, JsonMap,
};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, convert_overlay);
    doc
}

fn convert_overlay(page: &mut JsonMap) {
    let overlay = page
        .remove("backgroundOverlay")
        .as_ref()
        .and_then(Value::as_str)
        .and_then(overlay_preset);
    let Some(preset) = overlay else {
        return;
    };

    let Some(first) = page
        .get_mut("elements")
        .and_then(Value::as_array_mut)
        .and_then(|elements| elements.first_mut())
        .and_then(Value::as_object_mut)
    else {
        return;
    };
    if matches!(
        element_type(first),
        Some(ElementType::Image) | Some(ElementType::Video)
    ) {
        first.insert("backgroundOverlay".to_string(), preset);
    }
}

fn overlay_preset(overlay: &str) -> Option<Value> {
    match overlay {
        "solid" => Some(json!({"color": {"r": 0, "g": 0, "b": 0, "a": 0.3}})),
        "linear" => Some(json!({
            "type": "linear",
            "rotation": 0,
            "stops": [
                {"color": {"r": 0, "g": 0, "b": 0, "a": 0}, "position": 0.4},
                {"color": {"r": 0, "g": 0, "b": 0, "a": 1}, "position": 1},
            ],
            "alpha": 0.9,
        })),
        "radial" => Some(json!({
            "type": "radial",
            "size": {"w": 0.8, "h": 0.5},
            "stops": [
                {"color": {"r": 0, "g": 0, "b": 0, "a": 0}, "position": 0.25},
                {"color": {"r": 0, "g": 0, "b": 0, "a": 1}, "position": 1},
            ],
            "alpha": 0.6,
        })),
        _ => None,
    }
}
