//! Shared traversal and mutation helpers for version transforms.
//!
//! Transforms operate on raw `serde_json` trees because each one sees the
//! document at its own historical schema, which the typed model no longer
//! describes. Helpers here keep the traversal boilerplate out of the
//! individual transform files.

use serde_json::{Map, Value};
use uuid::Uuid;

pub(crate) type JsonMap = Map<String, Value>;

/// Element dispatch for transforms, mirroring the typed model's variants.
///
/// Unknown type strings yield `None`; transforms leave such elements
/// untouched instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementType {
    Text,
    Image,
    Video,
    Shape,
    Sticker,
    Group,
}

pub(crate) fn element_type(element: &JsonMap) -> Option<ElementType> {
    match element.get("type").and_then(Value::as_str)? {
        "text" => Some(ElementType::Text),
        "image" => Some(ElementType::Image),
        "video" => Some(ElementType::Video),
        "shape" => Some(ElementType::Shape),
        "sticker" => Some(ElementType::Sticker),
        "group" => Some(ElementType::Group),
        _ => None,
    }
}

pub(crate) fn is_media(element: &JsonMap) -> bool {
    matches!(
        element_type(element),
        Some(ElementType::Image) | Some(ElementType::Video)
    )
}

/// Runs `f` over every page object of the document.
pub(crate) fn for_each_page_mut(doc: &mut Value, mut f: impl FnMut(&mut JsonMap)) {
    let Some(pages) = doc.get_mut("pages").and_then(Value::as_array_mut) else {
        return;
    };
    for page in pages {
        if let Some(page) = page.as_object_mut() {
            f(page);
        }
    }
}

/// Runs `f` over every element of a page, including the nested
/// `defaultBackgroundElement` when present.
pub(crate) fn for_each_element_mut(page: &mut JsonMap, mut f: impl FnMut(&mut JsonMap)) {
    if let Some(elements) = page.get_mut("elements").and_then(Value::as_array_mut) {
        for element in elements {
            if let Some(element) = element.as_object_mut() {
                f(element);
            }
        }
    }
    if let Some(background) = page
        .get_mut("defaultBackgroundElement")
        .and_then(Value::as_object_mut)
    {
        f(background);
    }
}

/// Runs `f` over every element of every page.
pub(crate) fn for_each_element_in_doc(doc: &mut Value, mut f: impl FnMut(&mut JsonMap)) {
    for_each_page_mut(doc, |page| for_each_element_mut(page, &mut f));
}

/// Multiplies a numeric field by `ratio`, rounding to the nearest integer
/// (half away from zero). Non-numeric or absent fields pass through.
pub(crate) fn scale_field(map: &mut JsonMap, key: &str, ratio: f64) {
    if let Some(number) = map.get(key).and_then(Value::as_f64) {
        map.insert(key.to_string(), Value::from((number * ratio).round() as i64));
    }
}

/// Moves a field to a new key, preserving the value. No-op when absent.
pub(crate) fn rename_field(map: &mut JsonMap, old: &str, new: &str) {
    if let Some(value) = map.remove(old) {
        map.insert(new.to_string(), value);
    }
}

/// Inserts `value` only when `key` is absent.
pub(crate) fn backfill_field(map: &mut JsonMap, key: &str, value: Value) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), value);
    }
}

pub(crate) fn is_flag_set(map: &JsonMap, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool) == Some(true)
}

/// Opaque solid white fill in pattern form.
pub(crate) fn solid_white() -> Value {
    serde_json::json!({"color": {"r": 255, "g": 255, "b": 255}})
}

/// Mints a fresh id for elements synthesized during migration.
pub(crate) fn new_element_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::{for_each_element_in_doc, scale_field, ElementType};
    use serde_json::json;

    #[test]
    fn scale_field_rounds_half_away_from_zero() {
        let mut map = json!({"x": 40, "y": 27.5})
            .as_object()
            .cloned()
            .expect("object fixture");
        scale_field(&mut map, "x", 0.34375);
        scale_field(&mut map, "y", 1.0);
        scale_field(&mut map, "missing", 2.0);
        assert_eq!(map["x"], 14);
        assert_eq!(map["y"], 28);
        assert!(!map.contains_key("missing"));
    }

    #[test]
    fn element_traversal_includes_default_background_element() {
        let mut doc = json!({
            "pages": [{
                "elements": [{"type": "text"}, {"type": "image"}],
                "defaultBackgroundElement": {"type": "shape"},
            }],
        });
        let mut seen = Vec::new();
        for_each_element_in_doc(&mut doc, |element| {
            seen.push(super::element_type(element));
        });
        assert_eq!(
            seen,
            vec![
                Some(ElementType::Text),
                Some(ElementType::Image),
                Some(ElementType::Shape),
            ]
        );
    }
}
