//! Folds element-level text styling into the text content itself.
//!
//! `fontWeight`, `fontStyle`, `textDecoration`, `color` and `letterSpacing`
//! become an inline span wrapper; the element-level properties are always
//! removed, whether or not they produced a declaration.

use crate::migration::helpers::{element_type, for_each_element_in_doc, ElementType, JsonMap};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_element_in_doc(&mut doc, inline_text_styles);
    doc
}

fn inline_text_styles(element: &mut JsonMap) {
    if element_type(element) != Some(ElementType::Text) {
        return;
    }

    let font_weight = element.remove("fontWeight");
    let font_style = element.remove("fontStyle");
    let text_decoration = element.remove("textDecoration");
    let color = element.remove("color");
    let letter_spacing = element.remove("letterSpacing");

    let mut declarations = Vec::new();
    if let Some(weight) = font_weight.as_ref().and_then(Value::as_str) {
        if weight != "400" && weight != "normal" {
            declarations.push(format!("font-weight: {weight}"));
        }
    }
    if font_style.as_ref().and_then(Value::as_str) == Some("italic") {
        declarations.push("font-style: italic".to_string());
    }
    if text_decoration.as_ref().and_then(Value::as_str) == Some("underline") {
        declarations.push("text-decoration: underline".to_string());
    }
    if let Some(css) = color.as_ref().and_then(pattern_to_css) {
        declarations.push(format!("color: {css}"));
    }
    if let Some(spacing) = letter_spacing.as_ref().and_then(Value::as_f64) {
        declarations.push(format!("letter-spacing: {}em", spacing / 100.0));
    }

    if declarations.is_empty() {
        return;
    }
    let Some(content) = element.get("content").and_then(Value::as_str) else {
        return;
    };
    let wrapped = format!(
        r#"<span style="{}">{}</span>"#,
        declarations.join("; "),
        content
    );
    element.insert("content".to_string(), Value::from(wrapped));
}

fn pattern_to_css(pattern: &Value) -> Option<String> {
    let color = pattern.get("color")?;
    let r = color.get("r").and_then(Value::as_u64)?;
    let g = color.get("g").and_then(Value::as_u64)?;
    let b = color.get("b").and_then(Value::as_u64)?;
    match color.get("a").and_then(Value::as_f64) {
        Some(a) => Some(format!("rgba({r}, {g}, {b}, {a})")),
        None => Some(format!("rgb({r}, {g}, {b})")),
    }
}
