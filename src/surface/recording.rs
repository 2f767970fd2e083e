use egui::{Color32, Pos2, Rect, Vec2};

use super::{Font, PaintState, SubPath, Surface};

/// A drawing call with its style resolved and its geometry in device units
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    StrokePath {
        subpaths: Vec<SubPath>,
        color: Color32,
        width: f32,
    },
    FillText {
        text: String,
        pos: Pos2,
        color: Color32,
        size: f32,
    },
}

/// Headless surface that records what would have been painted
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    state: PaintState,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            state: PaintState::default(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    fn scale_subpath(&self, subpath: &SubPath) -> SubPath {
        match subpath {
            SubPath::Polyline(points) => {
                SubPath::Polyline(points.iter().map(|p| self.state.to_device(*p)).collect())
            }
            SubPath::Circle { center, radius } => SubPath::Circle {
                center: self.state.to_device(*center),
                radius: radius * self.state.scale,
            },
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size / self.state.scale
    }

    fn set_stroke_style(&mut self, color: Color32) {
        self.state.stroke_style = color;
    }

    fn set_fill_style(&mut self, color: Color32) {
        self.state.fill_style = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    fn begin_path(&mut self) {
        self.state.path.clear();
    }

    fn move_to(&mut self, pos: Pos2) {
        self.state.path.move_to(pos);
    }

    fn line_to(&mut self, pos: Pos2) {
        self.state.path.line_to(pos);
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.state.path.circle(center, radius);
    }

    fn stroke(&mut self) {
        let subpaths = self
            .state
            .path
            .subpaths()
            .iter()
            .map(|subpath| self.scale_subpath(subpath))
            .collect();
        self.ops.push(DrawOp::StrokePath {
            subpaths,
            color: self.state.stroke_style,
            width: self.state.line_width * self.state.scale,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Pos2) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            pos: self.state.to_device(pos),
            color: self.state.fill_style,
            size: self.state.font.size * self.state.scale,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            rect: self.state.to_device_rect(rect),
            color: self.state.fill_style,
        });
    }

    fn scale(&mut self, factor: f32) {
        self.state.scale *= factor;
    }
}
