//! geodraw: annotation state core for map drawing tools.
//!
//! Keeps a collection of drawn features (polylines, polygons,
//! rectangles, circles, markers) synchronized with auxiliary controls
//! (a color picker, an emoji picker, an image-gallery overlay)
//! purely through reactive state updates. The map surface, gesture
//! capture and widgets are external collaborators: they send
//! [`EditorEvent`]s in and read snapshots and derived values back out.
//!
//! Everything is single-threaded and in-memory; each event is handled
//! synchronously to completion, and the feature collection is swapped
//! copy-on-write so snapshot holders never observe a partial update.

pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod state;

pub use editor::{AnnotationEditor, EditorEvent};
pub use error::{ConfigError, EditorError, EditorResult};
