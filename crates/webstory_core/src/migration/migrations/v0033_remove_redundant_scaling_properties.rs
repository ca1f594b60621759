//! Drops media-only scaling properties that leaked onto text elements.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        element.remove("scale");
        element.remove("focalX");
        element.remove("focalY");
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn text_loses_scaling_properties_media_keeps_them() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "text", "scale": 100, "focalX": 50, "focalY": 50},
                {"type": "image", "scale": 120, "focalX": 40, "focalY": 60},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert!(elements[0].get("scale").is_none());
        assert!(elements[0].get("focalX").is_none());
        assert_eq!(elements[1]["scale"], 120);
    }
}
