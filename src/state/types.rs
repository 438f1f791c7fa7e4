//! Core types for drawn map annotations.
//!
//! A drawn feature arrives from the drawing surface as a finished
//! shape or marker; the editor only ever sees it as a value. Geometry
//! payloads (coordinates, rings) stay opaque and are passed through
//! unmodified. Kind-specific extras live on the kind variant itself,
//! so a marker with a fill style or a polygon with an icon cannot be
//! constructed in the first place.

use serde::{Deserialize, Serialize};

/// The shape kinds the drawing surface can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Polyline,
    Polygon,
    Rectangle,
    Circle,
    CircleMarker,
    Marker,
}

impl FeatureKind {
    /// Wire name of the kind, as emitted by the drawing surface.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Polyline => "polyline",
            FeatureKind::Polygon => "polygon",
            FeatureKind::Rectangle => "rectangle",
            FeatureKind::Circle => "circle",
            FeatureKind::CircleMarker => "circlemarker",
            FeatureKind::Marker => "marker",
        }
    }
}

/// A geographic coordinate, Leaflet field order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangle bounds as a `[southWest, northEast]` corner pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds(pub LatLng, pub LatLng);

impl Bounds {
    pub fn south_west(&self) -> LatLng {
        self.0
    }

    pub fn north_east(&self) -> LatLng {
        self.1
    }
}

/// Path styling for a non-marker shape, in the option shape the
/// drawing surface consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Stroke color, `#rrggbb`.
    pub color: String,
    /// Fill color, `#rrggbb`.
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Stroke weight in pixels.
    pub weight: f64,
    pub stroke: bool,
    pub fill: bool,
}

/// Icon description applied to a marker layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    pub popup_anchor: [f64; 2],
}

/// One entry of an image-gallery set bound to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub original: String,
    pub thumbnail: String,
    pub original_height: u32,
    pub original_width: u32,
    pub description: String,
}

/// Kind-specific data of a drawn feature.
///
/// The `type` tag matches the kind names on the wire; field names
/// match the surface's property bag (`mRadius`, `radius`, `bounds`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FeatureDetail {
    Polyline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
    },
    Polygon {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
    },
    Rectangle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bounds: Option<Bounds>,
    },
    Circle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
        /// Radius in meters.
        m_radius: f64,
    },
    CircleMarker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<ShapeStyle>,
        /// Radius in screen pixels.
        radius: f64,
    },
    Marker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<MarkerIcon>,
    },
}

/// One drawn shape or marker, as held in the feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryFeature {
    /// Layer identity assigned by the drawing surface; unique within
    /// a collection and stable across edits.
    pub leaflet_id: i64,
    /// Opaque geometry payload (GeoJSON-shaped in practice).
    pub geometry: serde_json::Value,
    #[serde(flatten)]
    pub detail: FeatureDetail,
}

impl GeometryFeature {
    pub fn polyline(leaflet_id: i64, geometry: serde_json::Value) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::Polyline { style: None },
        }
    }

    pub fn polygon(leaflet_id: i64, geometry: serde_json::Value) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::Polygon { style: None },
        }
    }

    pub fn rectangle(leaflet_id: i64, geometry: serde_json::Value, bounds: Option<Bounds>) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::Rectangle {
                style: None,
                bounds,
            },
        }
    }

    pub fn circle(leaflet_id: i64, geometry: serde_json::Value, m_radius: f64) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::Circle {
                style: None,
                m_radius,
            },
        }
    }

    pub fn circle_marker(leaflet_id: i64, geometry: serde_json::Value, radius: f64) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::CircleMarker {
                style: None,
                radius,
            },
        }
    }

    pub fn marker(leaflet_id: i64, geometry: serde_json::Value) -> Self {
        Self {
            leaflet_id,
            geometry,
            detail: FeatureDetail::Marker {
                emoji: None,
                icon: None,
            },
        }
    }

    /// Attach a style at construction time; ignored for markers.
    pub fn with_style(mut self, new_style: ShapeStyle) -> Self {
        self.set_style(new_style);
        self
    }

    /// Attach an emoji reference at construction time; ignored for
    /// non-marker kinds.
    pub fn with_emoji(mut self, reference: impl Into<String>) -> Self {
        if let FeatureDetail::Marker { emoji, .. } = &mut self.detail {
            *emoji = Some(reference.into());
        }
        self
    }

    pub fn kind(&self) -> FeatureKind {
        match self.detail {
            FeatureDetail::Polyline { .. } => FeatureKind::Polyline,
            FeatureDetail::Polygon { .. } => FeatureKind::Polygon,
            FeatureDetail::Rectangle { .. } => FeatureKind::Rectangle,
            FeatureDetail::Circle { .. } => FeatureKind::Circle,
            FeatureDetail::CircleMarker { .. } => FeatureKind::CircleMarker,
            FeatureDetail::Marker { .. } => FeatureKind::Marker,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.detail, FeatureDetail::Marker { .. })
    }

    pub fn style(&self) -> Option<&ShapeStyle> {
        match &self.detail {
            FeatureDetail::Polyline { style }
            | FeatureDetail::Polygon { style }
            | FeatureDetail::Rectangle { style, .. }
            | FeatureDetail::Circle { style, .. }
            | FeatureDetail::CircleMarker { style, .. } => style.as_ref(),
            FeatureDetail::Marker { .. } => None,
        }
    }

    /// Replace the shape style. No-op on markers, which carry an icon
    /// instead of a path style.
    pub fn set_style(&mut self, new_style: ShapeStyle) {
        match &mut self.detail {
            FeatureDetail::Polyline { style }
            | FeatureDetail::Polygon { style }
            | FeatureDetail::Rectangle { style, .. }
            | FeatureDetail::Circle { style, .. }
            | FeatureDetail::CircleMarker { style, .. } => *style = Some(new_style),
            FeatureDetail::Marker { .. } => {}
        }
    }

    pub fn emoji(&self) -> Option<&str> {
        match &self.detail {
            FeatureDetail::Marker { emoji, .. } => emoji.as_deref(),
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<&MarkerIcon> {
        match &self.detail {
            FeatureDetail::Marker { icon, .. } => icon.as_ref(),
            _ => None,
        }
    }

    /// Set a marker's emoji reference and its derived icon. No-op on
    /// non-marker kinds.
    pub fn set_marker_icon(&mut self, reference: impl Into<String>, new_icon: MarkerIcon) {
        if let FeatureDetail::Marker { emoji, icon } = &mut self.detail {
            *emoji = Some(reference.into());
            *icon = Some(new_icon);
        }
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        match &self.detail {
            FeatureDetail::Rectangle { bounds, .. } => bounds.as_ref(),
            _ => None,
        }
    }

    /// Pixel radius, circle markers only.
    pub fn radius(&self) -> Option<f64> {
        match self.detail {
            FeatureDetail::CircleMarker { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// Meter radius, circles only.
    pub fn m_radius(&self) -> Option<f64> {
        match self.detail {
            FeatureDetail::Circle { m_radius, .. } => Some(m_radius),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names_match_wire_format() {
        assert_eq!(FeatureKind::CircleMarker.name(), "circlemarker");
        assert_eq!(FeatureKind::Polyline.name(), "polyline");
    }

    #[test]
    fn set_style_ignores_markers() {
        let mut marker = GeometryFeature::marker(1, json!({"type": "Point"}));
        let style = ShapeStyle {
            color: "#ff0000".into(),
            fill_color: "#ff0000".into(),
            fill_opacity: 0.2,
            opacity: 0.5,
            weight: 4.0,
            stroke: true,
            fill: true,
        };
        marker.set_style(style);
        assert!(marker.style().is_none());
    }

    #[test]
    fn feature_serializes_with_surface_property_names() {
        let circle = GeometryFeature::circle(9, json!({"type": "Point"}), 1500.0);
        let value = serde_json::to_value(&circle).unwrap();
        assert_eq!(value["leafletId"], json!(9));
        assert_eq!(value["type"], json!("circle"));
        assert_eq!(value["mRadius"], json!(1500.0));
    }

    #[test]
    fn feature_roundtrips_through_json() {
        let rect = GeometryFeature::rectangle(
            3,
            json!({"type": "Polygon", "coordinates": []}),
            Some(Bounds(
                LatLng { lat: 55.0, lng: 9.0 },
                LatLng { lat: 57.0, lng: 11.0 },
            )),
        );
        let text = serde_json::to_string(&rect).unwrap();
        let back: GeometryFeature = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rect);
    }
}
