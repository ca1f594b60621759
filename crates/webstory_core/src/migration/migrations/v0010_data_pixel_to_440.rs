//! Scales element geometry from the 1280px canvas to the 440px canvas.
//!
//! Text padding is a per-axis object by this version, so both axes scale
//! individually.

use crate::migration::helpers::{
    element_type, for_each_element_in_doc, scale_field, ElementType,
};
use serde_json::Value;

const RATIO: f64 = 440.0 / 1280.0;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        scale_field(element, "x", RATIO);
        scale_field(element, "y", RATIO);
        scale_field(element, "width", RATIO);
        scale_field(element, "height", RATIO);
        if element_type(element) == Some(ElementType::Text) {
            scale_field(element, "fontSize", RATIO);
            if let Some(padding) = element.get_mut("padding").and_then(Value::as_object_mut) {
                scale_field(padding, "horizontal", RATIO);
                scale_field(padding, "vertical", RATIO);
            }
        }
    });
    doc
}
