// Shared constructors for editor scenario tests
#![allow(dead_code)]

use geodraw::color;
use geodraw::state::{GalleryImage, GeometryFeature};
use serde_json::json;

/// A triangle polygon near the default map view.
pub fn create_polygon(id: i64) -> GeometryFeature {
    GeometryFeature::polygon(
        id,
        json!({
            "type": "Polygon",
            "coordinates": [[[9.0, 55.0], [10.0, 55.0], [10.0, 56.0], [9.0, 55.0]]]
        }),
    )
}

/// A polygon already styled in `hex`, as the surface would deliver it.
pub fn create_styled_polygon(id: i64, hex: &str) -> GeometryFeature {
    create_polygon(id).with_style(color::shape_style(hex))
}

pub fn create_polyline(id: i64) -> GeometryFeature {
    GeometryFeature::polyline(
        id,
        json!({
            "type": "LineString",
            "coordinates": [[9.0, 55.0], [10.0, 56.0]]
        }),
    )
}

pub fn create_marker(id: i64) -> GeometryFeature {
    GeometryFeature::marker(id, json!({"type": "Point", "coordinates": [10.0, 56.0]}))
}

pub fn create_circle(id: i64, m_radius: f64) -> GeometryFeature {
    GeometryFeature::circle(
        id,
        json!({"type": "Point", "coordinates": [9.5, 55.5]}),
        m_radius,
    )
}

/// A small image set in the shape the gallery consumes.
pub fn create_image_set(label: &str, count: usize) -> Vec<GalleryImage> {
    (0..count)
        .map(|i| GalleryImage {
            original: format!("https://picsum.photos/80{i}/60{i}"),
            thumbnail: format!("https://picsum.photos/20{i}/15{i}"),
            original_height: 600 + i as u32,
            original_width: 800 + i as u32,
            description: format!("{label} - Image {}", i + 1),
        })
        .collect()
}

/// The stroke color of a feature, if it has one.
pub fn color_of(feature: &GeometryFeature) -> Option<String> {
    feature.style().map(|s| s.color.clone())
}
