//! Converts the resource base color from an RGB triple to a hex string.

use crate::migration::helpers::{for_each_element_in_doc, is_media};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_media(element) {
            return;
        }
        let Some(resource) = element.get_mut("resource").and_then(Value::as_object_mut) else {
            return;
        };
        let Some(hex) = resource.get("baseColor").and_then(triple_to_hex) else {
            return;
        };
        resource.insert("baseColor".to_string(), Value::from(hex));
    });
    doc
}

fn triple_to_hex(value: &Value) -> Option<String> {
    let triple = value.as_array()?;
    if triple.len() != 3 {
        return None;
    }
    let channel = |index: usize| -> Option<u8> {
        triple.get(index)?.as_u64().map(|raw| raw.min(255) as u8)
    };
    Some(format!(
        "#{:02x}{:02x}{:02x}",
        channel(0)?,
        channel(1)?,
        channel(2)?
    ))
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn rgb_triple_becomes_hex_string() {
        let migrated = migrate(json!({
            "pages": [{"elements": [{
                "type": "image",
                "resource": {"baseColor": [255, 128, 0]},
            }]}],
        }));
        assert_eq!(
            migrated["pages"][0]["elements"][0]["resource"]["baseColor"],
            "#ff8000"
        );
    }

    #[test]
    fn existing_hex_strings_pass_through() {
        let doc = json!({
            "pages": [{"elements": [{"type": "image", "resource": {"baseColor": "#aabbcc"}}]}],
        });
        assert_eq!(migrate(doc.clone()), doc);
    }
}
