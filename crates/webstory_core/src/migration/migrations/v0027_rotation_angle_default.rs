//! Backfills a zero rotation angle on unrotated elements.

use crate::migration::helpers::{backfill_field, for_each_element_in_doc};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        backfill_field(element, "rotationAngle", Value::from(0));
    });
    doc
}
