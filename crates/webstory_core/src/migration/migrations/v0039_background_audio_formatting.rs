//! Wraps the flat page background audio into a resource envelope.

use crate::migration::helpers::for_each_page_mut;
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        let Some(audio) = page.get("backgroundAudio") else {
            return;
        };
        let formatted = match audio {
            Value::String(src) => json!({"resource": {"src": src}}),
            Value::Object(fields) if !fields.contains_key("resource") => {
                json!({ "resource": fields })
            }
            _ => return,
        };
        page.insert("backgroundAudio".to_string(), formatted);
    });
    doc
}
