//! Error types for the annotation editor.

use thiserror::Error;

/// Errors raised while routing editor events.
///
/// Both variants are recoverable: a rejected event leaves the editor
/// state exactly as it was, and the editor keeps accepting events.
/// A mutation that finds no eligible target (empty canvas, no marker
/// yet) is a plain no-op, not an error.
#[derive(Error, Debug)]
pub enum EditorError {
    /// A color value that does not parse as `rgba(r, g, b, a)` with
    /// integer channels in 0-255.
    #[error("invalid color value '{0}': expected rgba(r, g, b, a)")]
    InvalidColorFormat(String),

    /// A feature that cannot join the collection, e.g. a duplicate
    /// layer id.
    #[error("invalid feature: {0}")]
    InvalidFeature(String),
}

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine config directory")]
    Directory,

    /// I/O error while reading or writing the config file.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
