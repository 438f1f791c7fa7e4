//! The annotation editor: routes incoming UI events to state
//! mutations and recomputes derived display state.
//!
//! Events are processed one at a time, synchronously, to completion;
//! there is never an in-flight mutation between events. Handlers are
//! organized by concern:
//! - `styling` - color input changes and "apply color to last drawing"
//! - `emoji` - emoji picks applied to the newest marker
//! - `drawing` - features arriving from the drawing surface
//! - `overlay` - panel toggles and the image gallery

mod drawing;
mod emoji;
mod overlay;
mod styling;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{self, DrawOptions};
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::export::display;
use crate::state::{
    FeatureCollection, FeatureSnapshot, GalleryImage, GalleryOverlay, GeometryFeature,
    MarkerIcon, OverlayPanel, OverlayToggle, UndoHistory,
};

/// Everything the environment can tell the editor, as one tagged
/// union. The driver binary feeds these as JSON, one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The color picker value changed; retheme future shapes.
    ColorInputChanged { value: String },
    /// Explicit "apply color to last drawing" action, carrying the
    /// picker value at click time.
    ApplyColorRequested { value: String },
    /// An emoji/icon reference was picked for the newest marker.
    EmojiSelected { emoji: String },
    /// The drawing surface finished a shape or marker.
    FeatureDrawn { feature: GeometryFeature },
    /// The drawing surface edited existing layers.
    FeaturesEdited { features: Vec<GeometryFeature> },
    /// The drawing surface deleted layers.
    FeaturesDeleted { ids: Vec<i64> },
    /// Layers already present when the surface mounted.
    CollectionMounted { features: Vec<GeometryFeature> },
    /// A panel toggle button was clicked.
    OverlayToggled { panel: OverlayPanel },
    /// An image marker was clicked; open its gallery set.
    ImageMarkerClicked { index: usize },
    /// The gallery backdrop was clicked.
    GalleryDismissed,
    Undo,
    Redo,
}

/// Owns the session state: the feature collection, the active style,
/// the overlay toggles and the gallery. The rendering side only ever
/// reads snapshots and derived values.
#[derive(Debug)]
pub struct AnnotationEditor {
    config: EditorConfig,
    collection: FeatureCollection,
    history: UndoHistory,
    current_color: String,
    pending_emoji: Option<String>,
    draw_options: DrawOptions,
    marker_icon: MarkerIcon,
    color_panel: OverlayToggle,
    emoji_panel: OverlayToggle,
    gallery: GalleryOverlay,
    image_sets: Vec<Vec<GalleryImage>>,
}

impl AnnotationEditor {
    pub fn new(config: EditorConfig) -> Self {
        let current_color = config.drawing.default_color.clone();
        let seed = config.overlays.initial_clicks;
        Self {
            history: UndoHistory::new(config.history.max_depth),
            collection: FeatureCollection::new(),
            draw_options: DrawOptions::themed(&current_color),
            marker_icon: color::marker_icon(&current_color),
            color_panel: OverlayToggle::seeded(seed),
            emoji_panel: OverlayToggle::seeded(seed),
            gallery: GalleryOverlay::new(),
            image_sets: Vec::new(),
            pending_emoji: None,
            current_color,
            config,
        }
    }

    /// Process one event to completion.
    ///
    /// A returned error means the event was rejected as a whole: the
    /// editor state is exactly what it was before the call, and the
    /// editor keeps accepting events.
    pub fn handle_event(&mut self, event: EditorEvent) -> EditorResult<()> {
        match event {
            EditorEvent::ColorInputChanged { value } => self.on_color_input(&value),
            EditorEvent::ApplyColorRequested { value } => self.on_apply_color(&value),
            EditorEvent::EmojiSelected { emoji } => self.on_emoji_selected(emoji),
            EditorEvent::FeatureDrawn { feature } => self.on_feature_drawn(feature),
            EditorEvent::FeaturesEdited { features } => self.on_features_edited(features),
            EditorEvent::FeaturesDeleted { ids } => self.on_features_deleted(&ids),
            EditorEvent::CollectionMounted { features } => self.on_collection_mounted(features),
            EditorEvent::OverlayToggled { panel } => {
                self.on_overlay_toggled(panel);
                Ok(())
            }
            EditorEvent::ImageMarkerClicked { index } => {
                self.on_image_marker_clicked(index);
                Ok(())
            }
            EditorEvent::GalleryDismissed => {
                self.on_gallery_dismissed();
                Ok(())
            }
            EditorEvent::Undo => {
                self.on_undo();
                Ok(())
            }
            EditorEvent::Redo => {
                self.on_redo();
                Ok(())
            }
        }
    }

    fn on_undo(&mut self) {
        let current = self.collection.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.collection.restore(previous);
                debug!(count = self.collection.len(), "undo");
            }
            None => debug!("nothing to undo"),
        }
    }

    fn on_redo(&mut self) {
        let current = self.collection.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.collection.restore(next);
                debug!(count = self.collection.len(), "redo");
            }
            None => debug!("nothing to redo"),
        }
    }

    /// Bind an image set to the next image-marker index; returns that
    /// index. The drawing surface refers to the set by index when the
    /// marker is clicked.
    pub fn register_image_set(&mut self, images: Vec<GalleryImage>) -> usize {
        self.image_sets.push(images);
        self.image_sets.len() - 1
    }

    // Read-only queries; the rendering side works off these.

    pub fn features(&self) -> FeatureSnapshot {
        self.collection.snapshot()
    }

    pub fn feature_count(&self) -> usize {
        self.collection.len()
    }

    /// The serialized display rendering of the current collection.
    pub fn display_text(&self) -> String {
        display::render(&self.collection.snapshot())
    }

    pub fn draw_options(&self) -> &DrawOptions {
        &self.draw_options
    }

    pub fn current_color(&self) -> &str {
        &self.current_color
    }

    /// Default icon for markers drawn from now on.
    pub fn marker_icon(&self) -> &MarkerIcon {
        &self.marker_icon
    }

    /// The emoji picker's pending value; always cleared once an
    /// emoji pick has been handled.
    pub fn pending_emoji(&self) -> Option<&str> {
        self.pending_emoji.as_deref()
    }

    pub fn color_panel_visible(&self) -> bool {
        self.color_panel.visible()
    }

    pub fn emoji_panel_visible(&self) -> bool {
        self.emoji_panel.visible()
    }

    pub fn gallery(&self) -> &GalleryOverlay {
        &self.gallery
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

impl Default for AnnotationEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
