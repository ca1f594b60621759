//! Backfills story-level page advancement settings.

use crate::migration::helpers::backfill_field;
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    if let Some(root) = doc.as_object_mut() {
        backfill_field(root, "autoAdvance", Value::from(true));
        backfill_field(root, "defaultPageDuration", Value::from(7));
    }
    doc
}
