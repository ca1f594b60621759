//! Retires the one-tap link flag and drops links without a destination.

use crate::migration::helpers::for_each_element_in_doc;
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, |element| {
        let Some(link) = element.get_mut("link").and_then(Value::as_object_mut) else {
            return;
        };
        link.remove("oneTap");
        let has_url = link
            .get("url")
            .and_then(Value::as_str)
            .is_some_and(|url| !url.is_empty());
        if !has_url {
            element.remove("link");
        }
    });
    doc
}
