//! Promotes the boolean `bold` flag into the numeric `fontWeight` scale.
//!
//! `bold: true` forces weight 700. `bold: false` never downgrades a weight
//! that is already present. The flag itself is always removed.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        if element_type(element) != Some(ElementType::Text) {
            return;
        }
        let bold = element.remove("bold");
        if bold.and_then(|value| value.as_bool()) == Some(true) {
            element.insert("fontWeight".to_string(), Value::from("700"));
        }
    });
    doc
}
