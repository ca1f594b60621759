//! Converts raw hex color strings into structured solid patterns.
//!
//! Applies to element `color` and `backgroundColor` plus page
//! `backgroundColor`. Values that are not parseable hex strings are left
//! as-is.

use crate::migration::helpers::{for_each_element_mut, for_each_page_mut, JsonMap};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{6})([0-9a-fA-F]{2})?$").expect("valid hex regex"));

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        convert_color_field(page, "backgroundColor");
        for_each_element_mut(page, |element| {
            convert_color_field(element, "color");
            convert_color_field(element, "backgroundColor");
        });
    });
    doc
}

fn convert_color_field(map: &mut JsonMap, key: &str) {
    let Some(pattern) = map.get(key).and_then(parse_hex_color) else {
        return;
    };
    map.insert(key.to_string(), pattern);
}

fn parse_hex_color(value: &Value) -> Option<Value> {
    let raw = value.as_str()?;
    let captures = HEX_COLOR_RE.captures(raw)?;
    let rgb = captures.get(1)?.as_str();
    let r = u8::from_str_radix(&rgb[0..2], 16).ok()?;
    let g = u8::from_str_radix(&rgb[2..4], 16).ok()?;
    let b = u8::from_str_radix(&rgb[4..6], 16).ok()?;

    let mut color = json!({"r": r, "g": g, "b": b});
    if let Some(alpha) = captures.get(2) {
        let alpha = u8::from_str_radix(alpha.as_str(), 16).ok()?;
        color["a"] = Value::from(f64::from(alpha) / 255.0);
    }
    Some(json!({ "color": color }))
}
