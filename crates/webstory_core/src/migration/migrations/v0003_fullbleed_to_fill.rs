//! Renames the element `isFullbleed` flag to `isFill`.

use crate::migration::helpers::{for_each_element_in_doc, rename_field};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        rename_field(element, "isFullbleed", "isFill");
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn flag_is_renamed_and_value_preserved() {
        let migrated = migrate(json!({
            "pages": [{"elements": [
                {"type": "shape", "isFullbleed": true},
                {"type": "text"},
            ]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["isFill"], true);
        assert!(elements[0].get("isFullbleed").is_none());
        assert!(elements[1].get("isFill").is_none());
    }
}
