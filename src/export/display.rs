// Display projection of the feature collection, for the actions
// panel. Property names follow the debug view of the original
// surface: the layer id and kind-specific extras are prefixed with
// an underscore, and `color` is always present (null for markers).

use serde::Serialize;

use crate::state::{Bounds, GeometryFeature};

/// Shown instead of an empty feature collection.
pub const NO_FEATURES_PLACEHOLDER: &str = "No features drawn";

#[derive(Debug, Serialize)]
pub struct DisplayCollection {
    #[serde(rename = "type")]
    tag: &'static str,
    features: Vec<DisplayFeature>,
}

#[derive(Debug, Serialize)]
pub struct DisplayFeature {
    #[serde(rename = "type")]
    tag: &'static str,
    properties: DisplayProperties,
    geometry: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct DisplayProperties {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "_leaflet_id")]
    leaflet_id: i64,
    color: Option<String>,
    #[serde(rename = "_radius", skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(rename = "_mRadius", skip_serializing_if = "Option::is_none")]
    m_radius: Option<f64>,
    #[serde(rename = "_bounds", skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<String>,
}

/// Project a snapshot into display records, order preserved.
pub fn project(features: &[GeometryFeature]) -> DisplayCollection {
    DisplayCollection {
        tag: "FeatureCollection",
        features: features.iter().map(display_feature).collect(),
    }
}

/// Render a snapshot as strict double-quoted JSON text, or the
/// placeholder when nothing has been drawn yet.
pub fn render(features: &[GeometryFeature]) -> String {
    if features.is_empty() {
        return NO_FEATURES_PLACEHOLDER.to_string();
    }
    serde_json::to_string(&project(features)).expect("display records serialize to JSON")
}

fn display_feature(feature: &GeometryFeature) -> DisplayFeature {
    DisplayFeature {
        tag: "Feature",
        properties: DisplayProperties {
            kind: feature.kind().name(),
            leaflet_id: feature.leaflet_id,
            color: feature.style().map(|s| s.color.clone()),
            radius: feature.radius(),
            m_radius: feature.m_radius(),
            bounds: feature.bounds().copied(),
            emoji: feature.emoji().map(str::to_string),
        },
        geometry: feature.geometry.clone(),
    }
}
