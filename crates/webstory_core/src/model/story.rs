//! Story and page model.
//!
//! # Responsibility
//! - Define the story root document and its page structure.
//! - Provide constructors producing latest-version documents.
//!
//! # Invariants
//! - `Story::new` always stamps the latest registered schema version; the
//!   editor never produces stale documents.
//! - `default_background_element` is nested on the page and is NOT a member
//!   of `elements`. Downstream consumers depend on this asymmetry.

use crate::migration::migrations::latest_version;
use crate::model::element::{new_element_id, Element, ElementId};
use crate::model::pattern::Pattern;
use serde::{Deserialize, Serialize};

/// Canvas width of the current editor coordinate space, in pixels.
pub const PAGE_WIDTH: f64 = 308.0;
/// Canvas height of the current editor coordinate space, in pixels.
pub const PAGE_HEIGHT: f64 = 462.0;

/// Timed effect applied to one or more elements of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<ElementId>,
    /// Milliseconds.
    pub duration: f64,
    /// Milliseconds.
    #[serde(default)]
    pub delay: f64,
}

/// Audio attachment referenced by a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResource {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAudio {
    pub resource: AudioResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<bool>,
}

/// Call-to-action link shown at the bottom of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default = "default_outlink_theme")]
    pub theme: String,
}

fn default_outlink_theme() -> String {
    "light".to_string()
}

/// A single full-screen unit of a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: ElementId,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    /// Synthesized background shape kept when a media element occupies the
    /// backdrop. Nested here rather than inserted into `elements`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_background_element: Option<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<BackgroundAudio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlink: Option<Outlink>,
}

impl Page {
    /// Creates an empty page holding only the default background shape.
    pub fn new() -> Self {
        Page {
            id: new_element_id(),
            elements: vec![Element::default_background(PAGE_WIDTH, PAGE_HEIGHT)],
            animations: Vec::new(),
            default_background_element: None,
            background_color: Some(Pattern::solid(255, 255, 255)),
            background_audio: None,
            outlink: None,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new()
    }
}

/// Root story document at the latest schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub version: u32,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
    /// Seconds a page stays visible when auto-advance is on.
    #[serde(default = "default_page_duration")]
    pub default_page_duration: f64,
}

fn default_auto_advance() -> bool {
    true
}

fn default_page_duration() -> f64 {
    7.0
}

impl Story {
    /// Creates a blank latest-version story with a single default page.
    pub fn new(title: impl Into<String>) -> Self {
        Story {
            version: latest_version(),
            pages: vec![Page::new()],
            title: Some(title.into()),
            author: None,
            excerpt: None,
            auto_advance: true,
            default_page_duration: 7.0,
        }
    }
}
