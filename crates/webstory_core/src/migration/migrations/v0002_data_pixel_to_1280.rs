//! Scales element geometry from the 320px canvas to the 1280px canvas.
//!
//! Text padding is still a bare number at this version and scales with the
//! same ratio.

use crate::migration::helpers::{
    element_type, for_each_element_in_doc, scale_field, ElementType,
};
use serde_json::Value;

const RATIO: f64 = 1280.0 / 320.0;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        scale_field(element, "x", RATIO);
        scale_field(element, "y", RATIO);
        scale_field(element, "width", RATIO);
        scale_field(element, "height", RATIO);
        if element_type(element) == Some(ElementType::Text) {
            scale_field(element, "fontSize", RATIO);
            scale_field(element, "padding", RATIO);
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn geometry_and_text_metrics_are_scaled_by_four() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "text", "x": 10, "y": 5, "width": 80, "height": 30, "fontSize": 4, "padding": 2},
                {"type": "image", "x": 1, "y": 1, "width": 100, "height": 100, "fontSize": 9},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["x"], 40);
        assert_eq!(elements[0]["width"], 320);
        assert_eq!(elements[0]["fontSize"], 16);
        assert_eq!(elements[0]["padding"], 8);
        // fontSize on non-text elements is stale data, not a metric.
        assert_eq!(elements[1]["fontSize"], 9);
        assert_eq!(elements[1]["width"], 400);
    }
}
