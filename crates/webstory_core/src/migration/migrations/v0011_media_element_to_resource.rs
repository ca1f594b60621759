//! Collects flat media properties into a nested `resource` object.

use crate::migration::helpers::{for_each_element_in_doc, is_media, JsonMap};
use serde_json::{Map, Value};

const RESOURCE_KEYS: &[&str] = &[
    "src",
    "origRatio",
    "mimeType",
    "poster",
    "posterId",
    "videoId",
    "alt",
];

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, nest_resource);
    doc
}

fn nest_resource(element: &mut JsonMap) {
    if !is_media(element) || element.contains_key("resource") {
        return;
    }

    let mut resource = Map::new();
    for key in RESOURCE_KEYS {
        if let Some(value) = element.remove(*key) {
            resource.insert((*key).to_string(), value);
        }
    }
    element.insert("resource".to_string(), Value::Object(resource));
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn flat_media_fields_move_under_resource() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{
                "type": "video",
                "src": "https://cdn.example.com/clip.mp4",
                "mimeType": "video/mp4",
                "poster": "https://cdn.example.com/poster.jpg",
                "videoId": 731,
                "width": 100,
            }]}],
        }));
        let element = &migrated["pages"][0]["elements"][0];
        assert_eq!(element["resource"]["src"], "https://cdn.example.com/clip.mp4");
        assert_eq!(element["resource"]["videoId"], 731);
        assert_eq!(element["width"], 100);
        assert!(element.get("src").is_none());
        assert!(element.get("mimeType").is_none());
    }

    #[test]
    fn non_media_elements_keep_their_src() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{"type": "text", "src": "stale"}]}],
        }));
        let element = &migrated["pages"][0]["elements"][0];
        assert_eq!(element["src"], "stale");
        assert!(element.get("resource").is_none());
    }
}
