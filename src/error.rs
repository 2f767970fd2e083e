use thiserror::Error;

/// Errors surfaced at the edges of the sketchpad: user input validation,
/// configuration loading and PNG export.
///
/// Pointer handling and undo/redo never fail. An undo with nothing to undo
/// is a silent no-op, not an error.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A sticker glyph was empty or only whitespace
    #[error("sticker glyph must not be empty")]
    EmptyGlyph,

    /// A line thickness was zero, negative or not finite
    #[error("invalid line thickness: {0}")]
    InvalidThickness(f32),

    /// The configuration is internally inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The offscreen export surface could not be allocated
    #[error("raster surface error: {0}")]
    Raster(String),

    /// No usable font data for sticker glyphs
    #[error("font error: {0}")]
    Font(String),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type SketchResult<T> = Result<T, SketchError>;
