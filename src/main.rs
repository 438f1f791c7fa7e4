use std::io::{BufRead, IsTerminal};

use serde_json::json;
use tracing::warn;

use geodraw::config;
use geodraw::state::{GalleryImage, GeometryFeature, OverlayPanel};
use geodraw::{AnnotationEditor, EditorEvent};

/// Set up stdout logging, `RUST_LOG` overrides the default level.
fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    setup_logging();

    let config = config::load_config();
    let mut editor = AnnotationEditor::new(config);

    if std::io::stdin().is_terminal() {
        run_demo(&mut editor);
    } else {
        run_event_stream(&mut editor);
    }
}

/// Drive the editor from a newline-delimited JSON event stream on
/// stdin, echoing the display rendering after every line. Malformed
/// lines and rejected events are logged and skipped; the editor stays
/// interactive throughout.
fn run_event_stream(editor: &mut AnnotationEditor) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stdin read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event: EditorEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!("skipping malformed event: {e}");
                continue;
            }
        };

        if let Err(e) = editor.handle_event(event) {
            warn!("event rejected: {e}");
        }
        println!("{}", editor.display_text());
    }
}

/// A scripted session mirroring an interactive run: draw a polygon
/// and a marker, retheme, recolor the last drawing, decorate the
/// marker, then exercise the overlays.
fn run_demo(editor: &mut AnnotationEditor) {
    println!("=== geodraw demo session ===");

    let image_set = editor.register_image_set(vec![
        GalleryImage {
            original: "https://picsum.photos/800/600".into(),
            thumbnail: "https://picsum.photos/200/150".into(),
            original_height: 600,
            original_width: 800,
            description: "Image Set 1 - Image 1".into(),
        },
        GalleryImage {
            original: "https://picsum.photos/801/601".into(),
            thumbnail: "https://picsum.photos/201/151".into(),
            original_height: 601,
            original_width: 801,
            description: "Image Set 1 - Image 2".into(),
        },
    ]);

    // Shapes arrive themed with the style the surface drew them in.
    let polygon_style = editor.draw_options().polygon.shape_options.clone();
    let polygon = GeometryFeature::polygon(
        1,
        json!({
            "type": "Polygon",
            "coordinates": [[[9.0, 55.0], [10.0, 55.0], [10.0, 56.0], [9.0, 55.0]]]
        }),
    )
    .with_style(polygon_style);
    let marker = GeometryFeature::marker(2, json!({"type": "Point", "coordinates": [10.0, 56.0]}));

    let events = vec![
        EditorEvent::FeatureDrawn { feature: polygon },
        EditorEvent::FeatureDrawn { feature: marker },
        EditorEvent::ColorInputChanged {
            value: "rgba(255, 87, 51, 1)".into(),
        },
        EditorEvent::ApplyColorRequested {
            value: "rgba(255, 87, 51, 1)".into(),
        },
        EditorEvent::EmojiSelected {
            emoji: "https://twemoji.example/1f600.png".into(),
        },
        EditorEvent::OverlayToggled {
            panel: OverlayPanel::ColorPicker,
        },
        EditorEvent::ImageMarkerClicked { index: image_set },
        EditorEvent::GalleryDismissed,
        EditorEvent::Undo,
        EditorEvent::Redo,
    ];

    for event in events {
        if let Err(e) = editor.handle_event(event) {
            warn!("event rejected: {e}");
        }
    }

    println!("{}", editor.display_text());
    println!("current color: {}", editor.current_color());
    println!("color panel visible: {}", editor.color_panel_visible());
    println!(
        "gallery visible after dismiss: {}",
        editor.gallery().visible()
    );
}
