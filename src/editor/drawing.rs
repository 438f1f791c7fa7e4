//! Events arriving from the drawing surface.
//!
//! Handles: finished shapes, layer edits, layer deletions and the
//! mount-time seeding of the collection.

use std::collections::HashSet;

use tracing::debug;

use crate::color;
use crate::error::{EditorError, EditorResult};
use crate::state::GeometryFeature;

use super::AnnotationEditor;

impl AnnotationEditor {
    /// Append a finished feature. A marker that arrives with an emoji
    /// reference but no icon gets its derived icon attached here.
    pub(super) fn on_feature_drawn(&mut self, mut feature: GeometryFeature) -> EditorResult<()> {
        if feature.is_marker() && feature.icon().is_none() {
            if let Some(reference) = feature.emoji().map(str::to_string) {
                let icon = color::marker_icon(&reference);
                feature.set_marker_icon(reference, icon);
            }
        }

        let before = self.collection.snapshot();
        self.collection.append(feature)?;
        self.history.push(before);
        debug!(count = self.collection.len(), "feature appended");
        Ok(())
    }

    /// Merge edited layers back in by id; untouched features survive.
    pub(super) fn on_features_edited(
        &mut self,
        features: Vec<GeometryFeature>,
    ) -> EditorResult<()> {
        let before = self.collection.snapshot();
        let replaced = self.collection.merge_edits(features);
        if replaced > 0 {
            self.history.push(before);
            debug!(replaced, "features edited");
        }
        Ok(())
    }

    /// Drop deleted layers by id.
    pub(super) fn on_features_deleted(&mut self, ids: &[i64]) -> EditorResult<()> {
        let before = self.collection.snapshot();
        let removed = self.collection.remove_ids(ids);
        if removed > 0 {
            self.history.push(before);
            debug!(removed, "features deleted");
        }
        Ok(())
    }

    /// Seed the collection wholesale from layers that were already on
    /// the surface when it mounted. A batch carrying a duplicate
    /// layer id is rejected as a whole.
    pub(super) fn on_collection_mounted(
        &mut self,
        features: Vec<GeometryFeature>,
    ) -> EditorResult<()> {
        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(feature.leaflet_id) {
                return Err(EditorError::InvalidFeature(format!(
                    "duplicate layer id {} in mounted batch",
                    feature.leaflet_id
                )));
            }
        }

        let before = self.collection.snapshot();
        self.collection.replace_all(features);
        self.history.push(before);
        debug!(count = self.collection.len(), "collection mounted");
        Ok(())
    }
}
