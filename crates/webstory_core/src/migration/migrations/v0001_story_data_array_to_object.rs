//! Wraps the legacy root array of pages into a root object.

use serde_json::{Map, Value};

pub(crate) fn migrate(doc: Value) -> Value {
    match doc {
        Value::Array(pages) => {
            let mut root = Map::new();
            root.insert("pages".to_string(), Value::Array(pages));
            Value::Object(root)
        }
        other => other,
    }
}
