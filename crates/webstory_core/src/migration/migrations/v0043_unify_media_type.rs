//! Backfills the resource `type` from the owning element's type.

use crate::migration::helpers::{for_each_element_in_doc, is_media};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_media(element) {
            return;
        }
        let Some(element_kind) = element
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            return;
        };
        let Some(resource) = element.get_mut("resource").and_then(Value::as_object_mut) else {
            return;
        };
        if !resource.contains_key("type") {
            resource.insert("type".to_string(), Value::from(element_kind));
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn missing_resource_type_is_backfilled() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "video", "resource": {"src": "a.mp4"}},
                {"type": "image", "resource": {"src": "b.jpg", "type": "gif"}},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["resource"]["type"], "video");
        // An explicit resource type is authoritative.
        assert_eq!(elements[1]["resource"]["type"], "gif");
    }
}
