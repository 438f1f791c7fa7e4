//! Visibility state for the auxiliary panels.
//!
//! Each panel (color picker, emoji picker) is an independent two-state
//! machine driven by a click counter: visible exactly when the counter
//! is odd. The gallery overlay works differently: it opens on an image
//! marker click and closes on a backdrop click, and its backdrop
//! counter is cleared after every processed click so the next click is
//! always a fresh rising edge.

use serde::{Deserialize, Serialize};

use crate::state::types::GalleryImage;

/// The auxiliary panels toggled independently of the drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPanel {
    ColorPicker,
    EmojiPicker,
}

/// Click-parity visibility toggle for one panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayToggle {
    clicks: u32,
}

impl OverlayToggle {
    /// Start from a given click count. Seed 0 means hidden until the
    /// first click.
    pub fn seeded(clicks: u32) -> Self {
        Self { clicks }
    }

    /// Register a click and return the resulting visibility.
    pub fn click(&mut self) -> bool {
        self.clicks += 1;
        self.visible()
    }

    pub fn visible(&self) -> bool {
        self.clicks % 2 == 1
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }
}

/// The image-gallery overlay: an optional active image set plus the
/// items currently on display.
#[derive(Debug, Clone, Default)]
pub struct GalleryOverlay {
    active: Option<usize>,
    items: Vec<GalleryImage>,
    backdrop_clicks: u32,
}

impl GalleryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the gallery for the image set at `index`.
    pub fn open(&mut self, index: usize, items: Vec<GalleryImage>) {
        self.active = Some(index);
        self.items = items;
    }

    /// Hide the gallery, clear the displayed items and reset the
    /// backdrop counter.
    pub fn dismiss(&mut self) {
        self.active = None;
        self.items.clear();
        self.backdrop_clicks = 0;
    }

    /// Register a click on the backdrop behind the gallery.
    pub fn record_backdrop_click(&mut self) {
        self.backdrop_clicks += 1;
    }

    pub fn visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn items(&self) -> &[GalleryImage] {
        &self.items
    }

    pub fn backdrop_clicks(&self) -> u32 {
        self.backdrop_clicks
    }
}
