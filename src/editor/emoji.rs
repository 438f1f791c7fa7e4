//! Emoji-pick handling.

use tracing::debug;

use crate::color;
use crate::error::EditorResult;

use super::AnnotationEditor;

impl AnnotationEditor {
    /// Stamp the picked emoji onto the most recently drawn marker.
    ///
    /// The pick is one-shot: the pending picker value is cleared once
    /// handled, so selecting the same emoji twice in a row fires
    /// twice. Without a marker on the canvas the pick is a no-op (and
    /// the pending value is still cleared).
    pub(super) fn on_emoji_selected(&mut self, emoji: String) -> EditorResult<()> {
        self.pending_emoji = Some(emoji);
        self.apply_pending_emoji();
        Ok(())
    }

    fn apply_pending_emoji(&mut self) {
        let Some(reference) = self.pending_emoji.take() else {
            return;
        };

        let icon = color::marker_icon(&reference);
        let before = self.collection.snapshot();
        let applied = reference.clone();
        let matched = self
            .collection
            .update_last_matching(|f| f.is_marker(), move |f| f.set_marker_icon(applied, icon));

        if matched {
            self.history.push(before);
            debug!(emoji = %reference, "marker icon updated");
        } else {
            debug!("no marker to decorate");
        }
    }
}
