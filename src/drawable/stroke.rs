use egui::{Color32, Pos2};

use super::{Drawable, DrawableId};
use crate::surface::Surface;

/// Freehand polyline. The first point is the anchor, later points are
/// drag samples appended in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: DrawableId,
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    /// Create a stroke anchored at `anchor`
    pub fn new(anchor: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::new(),
            points: vec![anchor],
            thickness,
            color,
        }
    }

    /// Never empty
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn anchor(&self) -> Pos2 {
        self.points[0]
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Drawable for Stroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.set_stroke_style(self.color);
        surface.set_line_width(self.thickness);
        surface.begin_path();
        surface.move_to(self.points[0]);
        for point in &self.points[1..] {
            surface.line_to(*point);
        }
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface, SubPath};
    use egui::{pos2, vec2};

    #[test]
    fn test_extend_appends_in_order() {
        let mut stroke = Stroke::new(pos2(10.0, 10.0), 3.0, Color32::RED);
        stroke.extend(pos2(20.0, 20.0));
        stroke.extend(pos2(30.0, 10.0));
        assert_eq!(
            stroke.points(),
            &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]
        );
        assert_eq!(stroke.anchor(), pos2(10.0, 10.0));
    }

    #[test]
    fn test_render_uses_own_style() {
        let mut stroke = Stroke::new(pos2(1.0, 1.0), 5.0, Color32::GREEN);
        stroke.extend(pos2(4.0, 5.0));

        let mut surface = RecordingSurface::new(vec2(256.0, 256.0));
        surface.set_stroke_style(Color32::RED);
        surface.set_line_width(1.0);
        stroke.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[DrawOp::StrokePath {
                subpaths: vec![SubPath::Polyline(vec![pos2(1.0, 1.0), pos2(4.0, 5.0)])],
                color: Color32::GREEN,
                width: 5.0,
            }]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Stroke::new(pos2(0.0, 0.0), 1.0, Color32::BLACK);
        let b = Stroke::new(pos2(0.0, 0.0), 1.0, Color32::BLACK);
        assert_ne!(a.id(), b.id());
    }
}
