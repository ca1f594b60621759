//! Drops the legacy numeric `trackId` from video caption tracks.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Video) {
            return;
        }
        let Some(tracks) = element.get_mut("tracks").and_then(Value::as_array_mut) else {
            return;
        };
        for track in tracks {
            if let Some(track) = track.as_object_mut() {
                track.remove("trackId");
            }
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn track_id_is_removed_and_the_rest_kept() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{
                "type": "video",
                "tracks": [{"track": "captions.vtt", "trackId": 9, "id": "t-1"}],
            }]}],
        }));
        let track = &migrated["pages"][0]["elements"][0]["tracks"][0];
        assert!(track.get("trackId").is_none());
        assert_eq!(track["id"], "t-1");
    }
}
