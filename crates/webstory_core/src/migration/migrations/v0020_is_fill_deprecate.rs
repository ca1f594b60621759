//! Removes the obsolete `isFill` flag from all elements.

use crate::migration::helpers::for_each_element_in_doc;
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        element.remove("isFill");
    });
    doc
}
