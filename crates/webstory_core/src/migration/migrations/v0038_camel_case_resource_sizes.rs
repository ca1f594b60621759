//! Camel-cases snake_case keys inside resource size renditions.

use crate::migration::helpers::{for_each_element_in_doc, is_media, rename_field};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_media(element) {
            return;
        }
        let Some(sizes) = element
            .get_mut("resource")
            .and_then(Value::as_object_mut)
            .and_then(|resource| resource.get_mut("sizes"))
            .and_then(Value::as_object_mut)
        else {
            return;
        };
        for rendition in sizes.values_mut() {
            if let Some(rendition) = rendition.as_object_mut() {
                rename_field(rendition, "source_url", "sourceUrl");
                rename_field(rendition, "mime_type", "mimeType");
            }
        }
    });
    doc
}
