//! Replaces the bare `fontFamily` string with a structured font descriptor.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        let Some(family) = element
            .remove("fontFamily")
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            return;
        };
        element.insert(
            "font".to_string(),
            json!({
                "family": family,
                "fallbacks": ["sans-serif"],
                "service": "fonts.google.com",
            }),
        );
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn font_family_string_becomes_font_object() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{"type": "text", "fontFamily": "Roboto"}]}],
        }));
        let element = &migrated["pages"][0]["elements"][0];
        assert_eq!(element["font"]["family"], "Roboto");
        assert_eq!(element["font"]["fallbacks"], json!(["sans-serif"]));
        assert!(element.get("fontFamily").is_none());
    }

    #[test]
    fn text_without_font_family_is_untouched() {
        let doc = json!({"pages": [{"elements": [{"type": "text"}]}]});
        assert_eq!(migrate(doc.clone()), doc);
    }
}
