//! Retires `backgroundElementId` in favor of per-element background flags.
//!
//! A background shape is marked `isDefaultBackground` in place. When a
//! media element occupies the backdrop, a default shape is synthesized and
//! nested under `page.defaultBackgroundElement` instead of being inserted
//! into `elements` - consumers depend on that asymmetry. Pages with no
//! elements are left untouched.

use crate::migration::helpers::{
    element_type, for_each_page_mut, is_flag_set, new_element_id, solid_white, ElementType,
    JsonMap,
};
use serde_json::{json, Value};

const PAGE_WIDTH: f64 = 440.0;
const PAGE_HEIGHT: f64 = 660.0;

enum Action {
    MarkInPlace,
    Synthesize,
}

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, normalize_background);
    doc
}

fn normalize_background(page: &mut JsonMap) {
    page.remove("backgroundElementId");

    let action = match first_element(page) {
        Some(first) if is_flag_set(first, "isBackground") => {
            if element_type(first) == Some(ElementType::Shape) {
                Some(Action::MarkInPlace)
            } else {
                Some(Action::Synthesize)
            }
        }
        _ => None,
    };

    match action {
        Some(Action::MarkInPlace) => {
            if let Some(first) = first_element_mut(page) {
                first.insert("isDefaultBackground".to_string(), Value::from(true));
            }
        }
        Some(Action::Synthesize) => {
            page.insert(
                "defaultBackgroundElement".to_string(),
                default_background_shape(),
            );
        }
        None => {}
    }
}

fn first_element(page: &JsonMap) -> Option<&JsonMap> {
    page.get("elements")?
        .as_array()?
        .first()?
        .as_object()
}

fn first_element_mut(page: &mut JsonMap) -> Option<&mut JsonMap> {
    page.get_mut("elements")?
        .as_array_mut()?
        .first_mut()?
        .as_object_mut()
}

fn default_background_shape() -> Value {
    json!({
        "id": new_element_id(),
        "type": "shape",
        "x": 0,
        "y": 0,
        "width": PAGE_WIDTH,
        "height": PAGE_HEIGHT,
        "rotationAngle": 0,
        "opacity": 100,
        "flip": {"horizontal": false, "vertical": false},
        "isBackground": true,
        "isDefaultBackground": true,
        "mask": {"type": "rectangle"},
        "backgroundColor": solid_white(),
    })
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn background_shape_is_marked_in_place() {
        let migrated = migrate(json!({
            "pages": [{
                "backgroundElementId": "bg-1",
                "elements": [{"id": "bg-1", "type": "shape", "isBackground": true}],
            }],
        }));
        let page = &migrated["pages"][0];
        assert!(page.get("backgroundElementId").is_none());
        assert_eq!(page["elements"][0]["isDefaultBackground"], true);
        assert!(page.get("defaultBackgroundElement").is_none());
    }

    #[test]
    fn media_background_gets_a_nested_default_shape() {
        let migrated = migrate(json!({
            "pages": [{
                "backgroundElementId": "img-1",
                "elements": [{"id": "img-1", "type": "image", "isBackground": true}],
            }],
        }));
        let page = &migrated["pages"][0];
        let shape = &page["defaultBackgroundElement"];
        assert_eq!(shape["type"], "shape");
        assert_eq!(shape["isBackground"], true);
        assert_eq!(shape["isDefaultBackground"], true);
        // The media element itself is unchanged and stays in `elements`.
        let first = &page["elements"][0];
        assert_eq!(first["type"], "image");
        assert!(first.get("isDefaultBackground").is_none());
        assert_eq!(page["elements"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn pages_without_elements_are_left_untouched() {
        let migrated = migrate(json!({"pages": [{"id": "p1", "elements": []}]}));
        let page = &migrated["pages"][0];
        assert!(page.get("defaultBackgroundElement").is_none());
    }

    #[test]
    fn non_background_first_element_is_ignored() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{"id": "el-1", "type": "text"}]}],
        }));
        let page = &migrated["pages"][0];
        assert!(page.get("defaultBackgroundElement").is_none());
        assert!(page["elements"][0].get("isDefaultBackground").is_none());
    }
}
