//! The drawn-feature collection.
//!
//! Owns the ordered list of features for the editing session. Every
//! mutation swaps in a freshly built list behind an `Arc`, so a
//! consumer holding a snapshot always sees either the old list or the
//! new one, never a half-applied update.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{EditorError, EditorResult};
use crate::state::types::GeometryFeature;

/// An immutable view of the collection at one point in time.
pub type FeatureSnapshot = Arc<Vec<GeometryFeature>>;

/// Ordered collection of drawn features, append order = draw order.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    features: FeatureSnapshot,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains_id(&self, leaflet_id: i64) -> bool {
        self.features.iter().any(|f| f.leaflet_id == leaflet_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeometryFeature> {
        self.features.iter()
    }

    /// Cheap immutable view for read-only consumers.
    pub fn snapshot(&self) -> FeatureSnapshot {
        Arc::clone(&self.features)
    }

    /// Append a finished feature at the end of the collection.
    ///
    /// Rejects a feature whose layer id is already present; the
    /// collection is left unchanged in that case.
    pub fn append(&mut self, feature: GeometryFeature) -> EditorResult<()> {
        if self.contains_id(feature.leaflet_id) {
            return Err(EditorError::InvalidFeature(format!(
                "duplicate layer id {}",
                feature.leaflet_id
            )));
        }
        let mut next = self.features.as_ref().clone();
        next.push(feature);
        self.features = Arc::new(next);
        Ok(())
    }

    /// Mutate the most recently appended feature matching `predicate`.
    ///
    /// Scans from the end so that "apply to the last drawing" hits the
    /// newest matching shape even when markers and shapes interleave
    /// in draw order. Returns false without touching the collection
    /// when nothing matches.
    pub fn update_last_matching(
        &mut self,
        predicate: impl Fn(&GeometryFeature) -> bool,
        mutate: impl FnOnce(&mut GeometryFeature),
    ) -> bool {
        let Some(index) = self.features.iter().rposition(predicate) else {
            return false;
        };
        let mut next = self.features.as_ref().clone();
        mutate(&mut next[index]);
        self.features = Arc::new(next);
        true
    }

    /// Atomic wholesale replacement.
    pub fn replace_all(&mut self, features: Vec<GeometryFeature>) {
        self.features = Arc::new(features);
    }

    /// Restore a previously taken snapshot, e.g. for undo/redo.
    pub fn restore(&mut self, snapshot: FeatureSnapshot) {
        self.features = snapshot;
    }

    /// Merge in edited features by layer id, keeping collection order.
    ///
    /// Replacements whose id is not present are ignored; features the
    /// edit did not touch survive as they are. Returns the number of
    /// features replaced.
    pub fn merge_edits(&mut self, edits: Vec<GeometryFeature>) -> usize {
        let mut next = self.features.as_ref().clone();
        let mut replaced = 0;
        for edit in edits {
            if let Some(slot) = next.iter_mut().find(|f| f.leaflet_id == edit.leaflet_id) {
                *slot = edit;
                replaced += 1;
            }
        }
        if replaced > 0 {
            self.features = Arc::new(next);
        }
        replaced
    }

    /// Remove features by layer id. Returns the number removed.
    pub fn remove_ids(&mut self, ids: &[i64]) -> usize {
        let targets: HashSet<i64> = ids.iter().copied().collect();
        let mut next = self.features.as_ref().clone();
        let before = next.len();
        next.retain(|f| !targets.contains(&f.leaflet_id));
        let removed = before - next.len();
        if removed > 0 {
            self.features = Arc::new(next);
        }
        removed
    }
}
