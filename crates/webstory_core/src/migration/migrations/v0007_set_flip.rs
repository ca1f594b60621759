//! Backfills the mirror state introduced with the flip controls.

use crate::migration::helpers::{backfill_field, for_each_element_in_doc};
use serde_json::{json, Value};

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        backfill_field(
            element,
            "flip",
            json!({"horizontal": false, "vertical": false}),
        );
    });
    doc
}
