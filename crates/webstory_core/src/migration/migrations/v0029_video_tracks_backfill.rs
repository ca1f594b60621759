//! Backfills an empty caption track list on video elements.

use crate::migration::helpers::{
    backfill_field, element_type, for_each_element_in_doc, ElementType,
};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) == Some(ElementType::Video) {
            backfill_field(element, "tracks", json!([]));
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn videos_gain_an_empty_track_list() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{"type": "video"}, {"type": "image"}]}],
        }));
        let elements = &migrated["pages"][0]["elements"];
        assert_eq!(elements[0]["tracks"], json!([]));
        assert!(elements[1].get("tracks").is_none());
    }
}
