//! Final sweep over properties no earlier version fully retired.
//!
//! Overlays only make sense on background elements, and element-level text
//! styling has been inline since the span migration; anything left is
//! stale data from partially-edited historical documents.

use crate::migration::helpers::{
    element_type, for_each_element_in_doc, is_flag_set, ElementType,
};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_flag_set(element, "isBackground") {
            element.remove("backgroundOverlay");
        }
        if element_type(element) == Some(ElementType::Text) {
            element.remove("fontWeight");
            element.remove("bold");
            element.remove("fontStyle");
            element.remove("textDecoration");
        }
        element.remove("isFill");
        element.remove("isFullbleed");
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn overlay_survives_only_on_background_elements() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "image", "isBackground": true, "backgroundOverlay": {"color": {"r": 0, "g": 0, "b": 0, "a": 0.3}}},
                {"type": "image", "backgroundOverlay": {"color": {"r": 0, "g": 0, "b": 0, "a": 0.3}}},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert!(elements[0].get("backgroundOverlay").is_some());
        assert!(elements[1].get("backgroundOverlay").is_none());
    }

    #[test]
    fn stale_text_styling_and_fill_flags_are_dropped() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "text", "fontWeight": "700", "bold": true, "content": "Hi"},
                {"type": "shape", "isFill": true, "isFullbleed": false},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert!(elements[0].get("fontWeight").is_none());
        assert!(elements[0].get("bold").is_none());
        assert_eq!(elements[0]["content"], "Hi");
        assert!(elements[1].get("isFill").is_none());
        assert!(elements[1].get("isFullbleed").is_none());
    }
}
