//! Color and fill patterns shared by pages and elements.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color with optional fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: None,
    };
}

/// Gradient flavor. Conic gradients were retired from the schema and are
/// downgraded to linear during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// Relative gradient extent, as a fraction of the painted box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSize {
    pub w: f64,
    pub h: f64,
}

/// One gradient stop at a relative position in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<GradientSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

/// Solid fill. Serialized as a bare `{ "color": ... }` object, which is why
/// `Pattern` is untagged: gradients carry a `type` discriminator, solids
/// never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPattern {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    Gradient(Gradient),
    Solid(SolidPattern),
}

impl Pattern {
    /// Opaque solid fill from RGB channels.
    pub fn solid(r: u8, g: u8, b: u8) -> Self {
        Pattern::Solid(SolidPattern {
            color: Color { r, g, b, a: None },
        })
    }
}
