use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::{Font, PaintState, SubPath, Surface};

/// On-screen surface drawing through an egui `Painter`.
///
/// Canvas coordinates are offset by `origin`, the top-left corner of the
/// canvas in screen space.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: Vec2,
    state: PaintState,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            size: canvas_rect.size(),
            state: PaintState::default(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + self.state.to_device(pos).to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
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
        let stroke = EguiStroke::new(
            self.state.line_width * self.state.scale,
            self.state.stroke_style,
        );
        for subpath in self.state.path.subpaths() {
            match subpath {
                SubPath::Polyline(points) if points.len() >= 2 => {
                    let points = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter.add(Shape::line(points, stroke));
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    self.painter.circle_stroke(
                        self.to_screen(*center),
                        radius * self.state.scale,
                        stroke,
                    );
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, pos: Pos2) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.state.font.size * self.state.scale),
            self.state.fill_style,
        );
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(rect, 0.0, self.state.fill_style);
    }

    fn scale(&mut self, factor: f32) {
        self.state.scale *= factor;
    }
}
