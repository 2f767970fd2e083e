use egui::{Color32, Pos2, Rect, Vec2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::{RasterSurface, load_sticker_fonts};
pub use recording::{DrawOp, RecordingSurface};

/// Font used by `fill_text`. Only the size is configurable; the face is
/// whatever the surface has for the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
}

impl Font {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self { size: 10.0 }
    }
}

/// Abstract 2D drawing surface, shaped after an HTML canvas context.
///
/// Coordinates are logical canvas units. `scale` multiplies every following
/// coordinate, width and font size, which is how export renders the same
/// drawables onto a larger surface.
pub trait Surface {
    /// Logical size of the surface (device size divided by the current scale)
    fn size(&self) -> Vec2;

    fn set_stroke_style(&mut self, color: Color32);
    fn set_fill_style(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: Font);

    /// Discard the current path and start an empty one
    fn begin_path(&mut self);
    /// Start a new sub-path at `pos`
    fn move_to(&mut self, pos: Pos2);
    /// Extend the current sub-path with a straight segment to `pos`
    fn line_to(&mut self, pos: Pos2);
    /// Add a full circle as its own sub-path
    fn circle(&mut self, center: Pos2, radius: f32);
    /// Outline the current path with the stroke style and line width
    fn stroke(&mut self);

    /// Paint `text` centered on `pos` with the fill style and font
    fn fill_text(&mut self, text: &str, pos: Pos2);
    fn fill_rect(&mut self, rect: Rect);

    /// Multiply the current scale factor by `factor`
    fn scale(&mut self, factor: f32);
}

/// One sub-path of a `Path`
#[derive(Debug, Clone, PartialEq)]
pub enum SubPath {
    Polyline(Vec<Pos2>),
    Circle { center: Pos2, radius: f32 },
}

/// Path under construction between `begin_path` and `stroke`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, pos: Pos2) {
        self.subpaths.push(SubPath::Polyline(vec![pos]));
    }

    /// Like a canvas context, a `line_to` without a current sub-path acts as
    /// `move_to`.
    pub fn line_to(&mut self, pos: Pos2) {
        match self.subpaths.last_mut() {
            Some(SubPath::Polyline(points)) => points.push(pos),
            _ => self.move_to(pos),
        }
    }

    pub fn circle(&mut self, center: Pos2, radius: f32) {
        self.subpaths.push(SubPath::Circle { center, radius });
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }
}

/// Style and path state shared by every surface implementation.
/// Defaults match a fresh canvas context.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PaintState {
    pub stroke_style: Color32,
    pub fill_style: Color32,
    pub line_width: f32,
    pub font: Font,
    pub scale: f32,
    pub path: Path,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke_style: Color32::BLACK,
            fill_style: Color32::BLACK,
            line_width: 1.0,
            font: Font::default(),
            scale: 1.0,
            path: Path::default(),
        }
    }
}

impl PaintState {
    /// Map a logical position to device units
    pub fn to_device(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }

    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_device(rect.min), self.to_device(rect.max))
    }
}
