//! Marks the page background element with `isBackground`.
//!
//! The element referenced by `backgroundElementId` gains the flag and loses
//! the now-implied `isFill`. The id property itself survives until a later
//! version retires it.

use crate::migration::helpers::{for_each_page_mut, JsonMap};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, flag_background_element);
    doc
}

fn flag_background_element(page: &mut JsonMap) {
    let Some(background_id) = page
        .get("backgroundElementId")
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return;
    };

    let Some(elements) = page.get_mut("elements").and_then(Value::as_array_mut) else {
        return;
    };
    for element in elements {
        let Some(element) = element.as_object_mut() else {
            continue;
        };
        if element.get("id").and_then(Value::as_str) == Some(background_id.as_str()) {
            element.insert("isBackground".to_string(), Value::from(true));
            element.remove("isFill");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn referenced_element_is_flagged_and_loses_is_fill() {
        let migrated = migrate(json!({
            "pages": [{
                "backgroundElementId": "bg-1",
                "elements": [
                    {"id": "bg-1", "type": "shape", "isFill": true},
                    {"id": "el-2", "type": "text", "isFill": true},
                ],
            }],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["isBackground"], true);
        assert!(elements[0].get("isFill").is_none());
        assert!(elements[1].get("isBackground").is_none());
        assert_eq!(elements[1]["isFill"], true);
    }
}
