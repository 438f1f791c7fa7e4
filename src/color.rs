//! Color synchronization between the picker and the drawing surface.
//!
//! The color picker reports `rgba(r, g, b, a)` strings; the drawing
//! surface wants hex colors inside per-kind shape options. Everything
//! here is a pure function of its input.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};
use crate::state::{MarkerIcon, ShapeStyle};

/// Default draw color (Leaflet blue).
pub const DEFAULT_COLOR: &str = "#3388ff";

// Style policy applied to every themed shape. Matches the stroke and
// fill the surface renders by default.
const FILL_OPACITY: f64 = 0.2;
const STROKE_OPACITY: f64 = 0.5;
const STROKE_WEIGHT: f64 = 4.0;

// Marker icons are square and anchored at their center.
const ICON_SIZE: f64 = 25.0;

/// Convert an `rgba(r, g, b, a)` picker value to a lower-case
/// `#rrggbb` hex string. The alpha component is discarded.
pub fn rgba_to_hex(raw: &str) -> EditorResult<String> {
    let inner = raw
        .trim()
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| EditorError::InvalidColorFormat(raw.to_string()))?;

    let mut channels = inner.splitn(4, ',');
    let mut rgb = [0u8; 3];
    for slot in rgb.iter_mut() {
        *slot = channels
            .next()
            .and_then(|part| part.trim().parse::<u8>().ok())
            .ok_or_else(|| EditorError::InvalidColorFormat(raw.to_string()))?;
    }

    Ok(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]))
}

/// The style record applied to shapes drawn in `hex`.
pub fn shape_style(hex: &str) -> ShapeStyle {
    ShapeStyle {
        color: hex.to_string(),
        fill_color: hex.to_string(),
        fill_opacity: FILL_OPACITY,
        opacity: STROKE_OPACITY,
        weight: STROKE_WEIGHT,
        stroke: true,
        fill: true,
    }
}

/// The icon record applied to a marker for the given image reference.
pub fn marker_icon(icon_url: &str) -> MarkerIcon {
    MarkerIcon {
        icon_url: icon_url.to_string(),
        icon_size: [ICON_SIZE, ICON_SIZE],
        icon_anchor: [ICON_SIZE / 2.0, ICON_SIZE / 2.0],
        popup_anchor: [0.0, -(ICON_SIZE / 2.0)],
    }
}

/// Options for one drawing tool, in the surface's `shapeOptions`
/// wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawToolOptions {
    #[serde(rename = "shapeOptions")]
    pub shape_options: ShapeStyle,
}

/// The per-kind style table republished to the drawing surface for
/// subsequently drawn shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    pub polyline: DrawToolOptions,
    pub polygon: DrawToolOptions,
    pub circle: DrawToolOptions,
    pub rectangle: DrawToolOptions,
}

impl DrawOptions {
    /// Theme every drawing tool with the given hex color.
    pub fn themed(hex: &str) -> Self {
        let tool = DrawToolOptions {
            shape_options: shape_style(hex),
        };
        Self {
            polyline: tool.clone(),
            polygon: tool.clone(),
            circle: tool.clone(),
            rectangle: tool,
        }
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self::themed(DEFAULT_COLOR)
    }
}
