//! Expands the uniform border radius into per-corner values.

use crate::migration::helpers::for_each_element_in_doc;
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        let Some(radius) = element.get("borderRadius").and_then(Value::as_f64) else {
            return;
        };
        element.insert(
            "borderRadius".to_string(),
            json!({
                "topLeft": radius,
                "topRight": radius,
                "bottomRight": radius,
                "bottomLeft": radius,
                "locked": true,
            }),
        );
    });
    doc
}
