//! Converts animation timing from seconds to milliseconds.

use crate::migration::helpers::{for_each_page_mut, scale_field};
use serde_json::Value;

const MS_PER_SECOND: f64 = 1000.0;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        let Some(animations) = page.get_mut("animations").and_then(Value::as_array_mut) else {
            return;
        };
        for animation in animations {
            if let Some(animation) = animation.as_object_mut() {
                scale_field(animation, "duration", MS_PER_SECOND);
                scale_field(animation, "delay", MS_PER_SECOND);
            }
        }
    });
    doc
}
