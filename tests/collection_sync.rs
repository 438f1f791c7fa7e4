// Collection synchronization with the drawing surface
// Finished shapes append, edits merge by layer id, deletions drop
// layers, and mount seeds the collection wholesale. Every accepted
// mutation is undoable.

mod common;

use common::{color_of, create_circle, create_marker, create_polygon, create_styled_polygon};
use geodraw::{AnnotationEditor, EditorError, EditorEvent};

fn drawn(feature: geodraw::state::GeometryFeature) -> EditorEvent {
    EditorEvent::FeatureDrawn { feature }
}

#[test]
fn drawn_features_append_in_draw_order() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();
    editor.handle_event(drawn(create_marker(2))).unwrap();
    editor.handle_event(drawn(create_circle(3, 1500.0))).unwrap();

    let ids: Vec<i64> = editor.features().iter().map(|f| f.leaflet_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn duplicate_layer_id_is_rejected_whole() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();
    let before = editor.features();

    let display_before = editor.display_text();

    let err = editor.handle_event(drawn(create_marker(1))).unwrap_err();
    assert!(matches!(err, EditorError::InvalidFeature(_)));
    assert_eq!(*editor.features(), *before);
    assert_eq!(editor.display_text(), display_before);
}

#[test]
fn edits_merge_by_id_and_keep_untouched_features() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();
    editor.handle_event(drawn(create_marker(2))).unwrap();

    editor
        .handle_event(EditorEvent::FeaturesEdited {
            features: vec![create_styled_polygon(1, "#00ff00"), create_polygon(42)],
        })
        .unwrap();

    let features = editor.features();
    assert_eq!(features.len(), 2);
    assert_eq!(color_of(&features[0]), Some("#00ff00".into()));
    assert_eq!(features[1].leaflet_id, 2);
}

#[test]
fn deletions_drop_only_named_layers() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();
    editor.handle_event(drawn(create_marker(2))).unwrap();

    editor
        .handle_event(EditorEvent::FeaturesDeleted { ids: vec![1] })
        .unwrap();

    let features = editor.features();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].leaflet_id, 2);
}

#[test]
fn mount_seeds_the_collection_wholesale() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(9))).unwrap();

    editor
        .handle_event(EditorEvent::CollectionMounted {
            features: vec![create_polygon(1), create_marker(2)],
        })
        .unwrap();

    let ids: Vec<i64> = editor.features().iter().map(|f| f.leaflet_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn mount_with_duplicate_ids_is_rejected_whole() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(9))).unwrap();
    let before = editor.features();

    let err = editor
        .handle_event(EditorEvent::CollectionMounted {
            features: vec![create_polygon(1), create_marker(1)],
        })
        .unwrap_err();

    assert!(matches!(err, EditorError::InvalidFeature(_)));
    assert_eq!(*editor.features(), *before);
}

#[test]
fn undo_restores_the_previous_collection_by_value() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();
    let after_first = editor.features();
    editor.handle_event(drawn(create_marker(2))).unwrap();

    editor.handle_event(EditorEvent::Undo).unwrap();
    assert_eq!(*editor.features(), *after_first);

    editor.handle_event(EditorEvent::Redo).unwrap();
    assert_eq!(editor.feature_count(), 2);
}

#[test]
fn noop_events_contribute_no_undo_entries() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();

    // No marker on the canvas: the pick is a no-op and must not
    // become an undo step.
    editor
        .handle_event(EditorEvent::EmojiSelected {
            emoji: "https://twemoji.example/1f600.png".into(),
        })
        .unwrap();

    editor.handle_event(EditorEvent::Undo).unwrap();
    assert!(editor.features().is_empty());
}

#[test]
fn undo_on_a_fresh_editor_is_a_noop() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(EditorEvent::Undo).unwrap();
    editor.handle_event(EditorEvent::Redo).unwrap();
    assert!(editor.features().is_empty());
}

#[test]
fn undo_covers_apply_color() {
    let mut editor = AnnotationEditor::default();
    editor.handle_event(drawn(create_polygon(1))).unwrap();

    editor
        .handle_event(EditorEvent::ApplyColorRequested {
            value: "rgba(255, 0, 0, 1)".into(),
        })
        .unwrap();
    assert_eq!(color_of(&editor.features()[0]), Some("#ff0000".into()));

    editor.handle_event(EditorEvent::Undo).unwrap();
    assert_eq!(color_of(&editor.features()[0]), None);
}
