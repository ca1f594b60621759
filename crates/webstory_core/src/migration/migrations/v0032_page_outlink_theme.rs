//! Renames `pageAttachment` to `outlink` and backfills its theme.

use crate::migration::helpers::{backfill_field, for_each_page_mut, rename_field};
use serde_json::Value;

pub(crate) fn migrate(mut doc: Value) -> Value {
    for_each_page_mut(&mut doc, |page| {
        rename_field(page, "pageAttachment", "outlink");
        if let Some(outlink) = page.get_mut("outlink").and_then(Value::as_object_mut) {
            backfill_field(outlink, "theme", Value::from("light"));
        }
    });
    doc
}

#[cfg(test)]
mod tests {
    use super::migrate;
    use serde_json::json;

    #[test]
    fn page_attachment_becomes_outlink_with_theme() {
        let migrated = migrate(json!({
            "pages": [{"pageAttachment": {"url": "https://example.com", "ctaText": "Read more"}}],
        }));
        let page = &migrated["pages"][0];
        assert!(page.get("pageAttachment").is_none());
        assert_eq!(page["outlink"]["url"], "https://example.com");
        assert_eq!(page["outlink"]["theme"], "light");
    }

    #[test]
    fn explicit_theme_is_kept() {
        let migrated = migrate(json!({
            "pages": [{"outlink": {"url": "https://example.com", "theme": "dark"}}],
        }));
        assert_eq!(migrated["pages"][0]["outlink"]["theme"], "dark");
    }
}
