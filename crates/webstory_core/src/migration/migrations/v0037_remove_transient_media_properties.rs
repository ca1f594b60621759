//! Strips in-flight upload/edit state that was never meant to persist.

use crate::migration::helpers::{for_each_element_in_doc, is_media};
use serde_json::Value;

const TRANSIENT_KEYS: &[&str] = &["isTranscoding", "isMuting", "isTrimming", "trimData"];

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if !is_media(element) {
            return;
        }
        for key in TRANSIENT_KEYS {
            element.remove(*key);
        }
    });
    doc
}
