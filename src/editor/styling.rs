//! Color-input handling.
//!
//! Handles: picker value changes (retheme future shapes) and the
//! "apply color to last drawing" action.

use tracing::debug;

use crate::color::{self, DrawOptions};
use crate::error::EditorResult;

use super::AnnotationEditor;

impl AnnotationEditor {
    /// Recompute the active style from a picker value. Existing
    /// features are untouched; a malformed value leaves every derived
    /// value as it was.
    pub(super) fn on_color_input(&mut self, value: &str) -> EditorResult<()> {
        let hex = color::rgba_to_hex(value)?;
        self.draw_options = DrawOptions::themed(&hex);
        self.marker_icon = color::marker_icon(&hex);
        self.current_color = hex;
        debug!(color = %self.current_color, "draw options rethemed");
        Ok(())
    }

    /// Recolor the most recently drawn non-marker shape. An empty
    /// canvas, or a canvas holding only markers, makes this a no-op.
    pub(super) fn on_apply_color(&mut self, value: &str) -> EditorResult<()> {
        let hex = color::rgba_to_hex(value)?;
        if self.collection.is_empty() {
            return Ok(());
        }

        let style = color::shape_style(&hex);
        let before = self.collection.snapshot();
        let matched = self
            .collection
            .update_last_matching(|f| !f.is_marker(), move |f| f.set_style(style));

        if matched {
            self.history.push(before);
            debug!(color = %hex, "applied color to last drawing");
        } else {
            debug!("no shape to recolor");
        }
        Ok(())
    }
}
