//! Lifts the default background shape's fill onto the page.
//!
//! Pages whose backdrop is a media element (or that somehow lack a fill)
//! get an opaque white page color so the editor always has one to show
//! behind transparent media.

use crate::migration::helpers::{
    for_each_page_mut, is_flag_set, solid_white, JsonMap,
};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, lift_background_color);
    doc
}

fn lift_background_color(page: &mut JsonMap) {
    match default_background_fill(page) {
        Some(color) => {
            page.insert("backgroundColor".to_string(), color);
        }
        None => {
            if !page.contains_key("backgroundColor") {
                page.insert("backgroundColor".to_string(), solid_white());
            }
        }
    }
}

fn default_background_fill(page: &JsonMap) -> Option<Value> {
    if let Some(nested) = page
        .get("defaultBackgroundElement")
        .and_then(Value::as_object)
    {
        return nested.get("backgroundColor").cloned();
    }
    let first = page.get("elements")?.as_array()?.first()?.as_object()?;
    if !is_flag_set(first, "isDefaultBackground") {
        return None;
    }
    first.get("backgroundColor").cloned()
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn shape_fill_is_copied_to_the_page() {
        let fill = json!({"color": {"r": 10, "g": 20, "b": 30}});
        let migrated = migrate(json!({
            "pages": [{
                "elements": [{
                    "type": "shape",
                    "isBackground": true,
                    "isDefaultBackground": true,
                    "backgroundColor": fill.clone(),
                }],
            }],
        }));
        assert_eq!(migrated["pages"][0]["backgroundColor"], fill);
    }

    #[test]
    fn nested_default_background_fill_wins() {
        let fill = json!({"color": {"r": 1, "g": 2, "b": 3}});
        let migrated = migrate(json!({
            "pages": [{
                "elements": [{"type": "image", "isBackground": true}],
                "defaultBackgroundElement": {
                    "type": "shape",
                    "backgroundColor": fill.clone(),
                },
            }],
        }));
        assert_eq!(migrated["pages"][0]["backgroundColor"], fill);
    }

    #[test]
    fn pages_without_a_fill_get_white() {
        let migrated = migrate(json!({"pages": [{"elements": []}]}));
        assert_eq!(
            migrated["pages"][0]["backgroundColor"],
            json!({"color": {"r": 255, "g": 255, "b": 255}})
        );
    }
}
