// Overlay toggles and the image gallery
// Panel visibility is click parity; the gallery opens on image-marker
// clicks and closes on the backdrop, resetting its counter.

mod common;

use common::create_image_set;
use geodraw::config::EditorConfig;
use geodraw::state::OverlayPanel;
use geodraw::{AnnotationEditor, EditorEvent};

fn toggle(panel: OverlayPanel) -> EditorEvent {
    EditorEvent::OverlayToggled { panel }
}

#[test]
fn one_click_shows_two_clicks_hide() {
    let mut editor = AnnotationEditor::default();
    assert!(!editor.color_panel_visible());

    editor.handle_event(toggle(OverlayPanel::ColorPicker)).unwrap();
    assert!(editor.color_panel_visible());

    editor.handle_event(toggle(OverlayPanel::ColorPicker)).unwrap();
    assert!(!editor.color_panel_visible());
}

#[test]
fn panels_toggle_independently() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(toggle(OverlayPanel::EmojiPicker)).unwrap();

    assert!(editor.emoji_panel_visible());
    assert!(!editor.color_panel_visible());
}

#[test]
fn legacy_seed_starts_panels_visible() {
    let mut config = EditorConfig::default();
    config.overlays.initial_clicks = 1;
    let mut editor = AnnotationEditor::new(config);

    // Parity alone decides: an odd seed means visible before any
    // click, and the first click hides.
    assert!(editor.color_panel_visible());
    editor.handle_event(toggle(OverlayPanel::ColorPicker)).unwrap();
    assert!(!editor.color_panel_visible());
}

#[test]
fn marker_click_opens_the_registered_set() {
    let mut editor = AnnotationEditor::default();
    let first = editor.register_image_set(create_image_set("Image Set 1", 3));
    let second = editor.register_image_set(create_image_set("Image Set 2", 2));

    editor
        .handle_event(EditorEvent::ImageMarkerClicked { index: second })
        .unwrap();

    let gallery = editor.gallery();
    assert!(gallery.visible());
    assert_eq!(gallery.active(), Some(second));
    assert_eq!(gallery.items().len(), 2);
    assert_eq!(gallery.items()[0].description, "Image Set 2 - Image 1");

    editor
        .handle_event(EditorEvent::ImageMarkerClicked { index: first })
        .unwrap();
    assert_eq!(editor.gallery().items().len(), 3);
}

#[test]
fn backdrop_click_dismisses_and_resets_the_counter() {
    let mut editor = AnnotationEditor::default();
    let set = editor.register_image_set(create_image_set("Image Set 1", 3));

    editor
        .handle_event(EditorEvent::ImageMarkerClicked { index: set })
        .unwrap();
    editor.handle_event(EditorEvent::GalleryDismissed).unwrap();

    let gallery = editor.gallery();
    assert!(!gallery.visible());
    assert!(gallery.items().is_empty());
    assert_eq!(gallery.backdrop_clicks(), 0);

    // A second open/dismiss cycle behaves exactly like the first.
    editor
        .handle_event(EditorEvent::ImageMarkerClicked { index: set })
        .unwrap();
    assert!(editor.gallery().visible());
    editor.handle_event(EditorEvent::GalleryDismissed).unwrap();
    assert!(!editor.gallery().visible());
}

#[test]
fn unregistered_marker_click_is_ignored() {
    let mut editor = AnnotationEditor::default();
    editor
        .handle_event(EditorEvent::ImageMarkerClicked { index: 5 })
        .unwrap();
    assert!(!editor.gallery().visible());
}
