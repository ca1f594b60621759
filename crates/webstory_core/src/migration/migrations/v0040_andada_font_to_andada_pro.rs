//! Follows the upstream rename of the Andada font family.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        let Some(font) = element.get_mut("font").and_then(Value::as_object_mut) else {
            return;
        };
        if font.get("family").and_then(Value::as_str) == Some("Andada") {
            font.insert("family".to_string(), Value::from("Andada Pro"));
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn andada_is_renamed_and_other_families_kept() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "text", "font": {"family": "Andada"}},
                {"type": "text", "font": {"family": "Roboto"}},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["font"]["family"], "Andada Pro");
        assert_eq!(elements[1]["font"]["family"], "Roboto");
    }
}
