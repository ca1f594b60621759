//! Generalizes the single animation `target` into a `targets` list.

use crate::migration::helpers::for_each_page_mut;
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        let Some(animations) = page.get_mut("animations").and_then(Value::as_array_mut) else {
            return;
        };
        for animation in animations {
            let Some(animation) = animation.as_object_mut() else {
                continue;
            };
            let Some(target) = animation.remove("target") else {
                continue;
            };
            let targets = match target {
                Value::Array(targets) => Value::Array(targets),
                single => Value::Array(vec![single]),
            };
            animation.insert("targets".to_string(), targets);
        }
    });
    doc
}
