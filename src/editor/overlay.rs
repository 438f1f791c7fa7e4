//! Overlay panel toggles and the image gallery.

use tracing::{debug, warn};

use crate::state::OverlayPanel;

use super::AnnotationEditor;

impl AnnotationEditor {
    pub(super) fn on_overlay_toggled(&mut self, panel: OverlayPanel) {
        let visible = match panel {
            OverlayPanel::ColorPicker => self.color_panel.click(),
            OverlayPanel::EmojiPicker => self.emoji_panel.click(),
        };
        debug!(?panel, visible, "overlay toggled");
    }

    /// Open the gallery on the image set registered for the clicked
    /// marker. Clicks on unregistered markers are ignored.
    pub(super) fn on_image_marker_clicked(&mut self, index: usize) {
        let Some(images) = self.image_sets.get(index).cloned() else {
            warn!(index, "click on unregistered image marker");
            return;
        };
        debug!(index, items = images.len(), "gallery opened");
        self.gallery.open(index, images);
    }

    /// Close the gallery. The backdrop click is registered and the
    /// counter cleared in the same turn, so the next backdrop click
    /// always arrives as a fresh rising edge.
    pub(super) fn on_gallery_dismissed(&mut self) {
        self.gallery.record_backdrop_click();
        self.gallery.dismiss();
        debug!("gallery dismissed");
    }
}
