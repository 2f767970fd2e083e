use std::io::Cursor;

use ab_glyph::{Font as _, FontVec, GlyphId, PxScale, ScaleFont as _, point};
use egui::{Color32, FontDefinitions, Pos2, Rect, Vec2};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use image::{ImageFormat, RgbaImage};
use tiny_skia as sk;

use super::{Font, PaintState, SubPath, Surface};
use crate::error::{SketchError, SketchResult};

/// egui's bundled fonts tried in order for every sticker character
const STICKER_FONTS: [&str; 3] = ["NotoEmoji-Regular", "emoji-icon-font", "Ubuntu-Light"];

/// Installed emoji faces with outline glyphs, tried after egui's fonts
const SYSTEM_EMOJI_FAMILIES: [&str; 4] =
    ["Noto Emoji", "Symbola", "Segoe UI Emoji", "Segoe UI Symbol"];

/// Drawn for characters no font covers, the same placeholder egui shows on screen
const REPLACEMENT_CHARS: [char; 2] = ['\u{25FB}', '?'];

/// Load the fonts used to rasterize sticker glyphs: egui's defaults first,
/// then any emoji font installed on the system
pub fn load_sticker_fonts() -> SketchResult<Vec<FontVec>> {
    let definitions = FontDefinitions::default();
    let mut fonts = Vec::new();
    for name in STICKER_FONTS {
        let Some(data) = definitions.font_data.get(name) else {
            log::warn!("Bundled font {name} not found");
            continue;
        };
        match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
            Ok(font) => fonts.push(font),
            Err(err) => log::warn!("Failed to parse bundled font {name}: {err}"),
        }
    }
    if fonts.is_empty() {
        return Err(SketchError::Font("no bundled font could be loaded".to_owned()));
    }
    fonts.extend(load_system_emoji_fonts());
    Ok(fonts)
}

fn load_system_emoji_fonts() -> Vec<FontVec> {
    let mut db = Database::new();
    db.load_system_fonts();
    SYSTEM_EMOJI_FAMILIES
        .into_iter()
        .filter_map(|name| {
            let query = Query {
                families: &[Family::Name(name)],
                weight: Weight::NORMAL,
                style: Style::Normal,
                stretch: Stretch::Normal,
            };
            let id = db.query(&query)?;
            let font = db.with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index)
            })?;
            match font {
                Ok(font) => {
                    log::debug!("Loaded system emoji font {name}");
                    Some(font)
                }
                Err(err) => {
                    log::warn!("Failed to parse system font {name}: {err}");
                    None
                }
            }
        })
        .collect()
}

/// Zero-width joiners and variation selectors only modify their neighbour
fn is_ignorable(c: char) -> bool {
    matches!(c, '\u{200D}' | '\u{FE00}'..='\u{FE0F}')
}

/// Offscreen CPU surface backed by a tiny-skia pixmap, used for PNG export
pub struct RasterSurface {
    pixmap: sk::Pixmap,
    fonts: Vec<FontVec>,
    state: PaintState,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("fonts", &self.fonts.len())
            .field("state", &self.state)
            .finish()
    }
}

impl RasterSurface {
    /// Create a transparent surface of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        let pixmap = sk::Pixmap::new(width, height).ok_or_else(|| {
            SketchError::Raster(format!("cannot allocate a {width}x{height} pixmap"))
        })?;
        Ok(Self {
            pixmap,
            fonts: Vec::new(),
            state: PaintState::default(),
        })
    }

    /// Use `fonts` for `fill_text`. Without fonts, text is skipped.
    pub fn with_fonts(mut self, fonts: Vec<FontVec>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unmultiplied RGBA of a device pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    pub fn to_image(&self) -> SketchResult<RgbaImage> {
        let raw = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .ok_or_else(|| SketchError::Raster("pixel buffer size mismatch".to_owned()))
    }

    pub fn encode_png(&self) -> SketchResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_image()?
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn transform(&self) -> sk::Transform {
        sk::Transform::from_scale(self.state.scale, self.state.scale)
    }

    fn paint(color: Color32) -> sk::Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = sk::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    /// Pick the first font with a drawable glyph for `c`. Bitmap-only faces
    /// have no outline and are passed over.
    fn glyph_for(&self, c: char) -> Option<(usize, GlyphId)> {
        self.fonts.iter().enumerate().find_map(|(index, font)| {
            let id = font.glyph_id(c);
            let drawable = c.is_whitespace() || font.outline(id).is_some();
            (id.0 != 0 && drawable).then_some((index, id))
        })
    }

    /// Like `glyph_for`, falling back to a placeholder glyph
    fn glyph_or_replacement(&self, c: char) -> Option<(usize, GlyphId)> {
        self.glyph_for(c).or_else(|| {
            log::warn!(
                "No font has a glyph for {c:?} (U+{:04X}), drawing a placeholder",
                c as u32
            );
            REPLACEMENT_CHARS.into_iter().find_map(|r| self.glyph_for(r))
        })
    }
}

/// Source-over blend of a straight-alpha colour into a premultiplied pixel
fn blend(dst: sk::PremultipliedColorU8, rgba: [u8; 4], coverage: f32) -> sk::PremultipliedColorU8 {
    let src_alpha = rgba[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    let inv = 1.0 - src_alpha;
    let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    let a = to_u8(src_alpha * 255.0 + dst.alpha() as f32 * inv);
    let channel = |src: u8, dst: u8| to_u8(src as f32 * src_alpha + dst as f32 * inv).min(a);
    sk::PremultipliedColorU8::from_rgba(
        channel(rgba[0], dst.red()),
        channel(rgba[1], dst.green()),
        channel(rgba[2], dst.blue()),
        a,
    )
    .unwrap_or(dst)
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.pixmap.width() as f32, self.pixmap.height() as f32) / self.state.scale
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
        let mut builder = sk::PathBuilder::new();
        for subpath in self.state.path.subpaths() {
            match subpath {
                SubPath::Polyline(points) if points.len() >= 2 => {
                    builder.move_to(points[0].x, points[0].y);
                    for p in &points[1..] {
                        builder.line_to(p.x, p.y);
                    }
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    builder.push_circle(center.x, center.y, *radius);
                }
            }
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = sk::Stroke {
            width: self.state.line_width,
            line_cap: sk::LineCap::Round,
            line_join: sk::LineJoin::Round,
            ..sk::Stroke::default()
        };
        let paint = Self::paint(self.state.stroke_style);
        let transform = self.transform();
        self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn fill_text(&mut self, text: &str, pos: Pos2) {
        if self.fonts.is_empty() {
            log::warn!("No fonts loaded, skipping text {text:?}");
            return;
        }
        let scale = PxScale::from(self.state.font.size * self.state.scale);

        // Lay the run out horizontally, one font per character
        let mut caret = 0.0;
        let mut glyphs = Vec::new();
        for c in text.chars().filter(|c| !is_ignorable(*c)) {
            let Some((index, id)) = self.glyph_or_replacement(c) else {
                continue;
            };
            glyphs.push((index, id, caret));
            caret += self.fonts[index].as_scaled(scale).h_advance(id);
        }

        let primary = self.fonts[glyphs.first().map_or(0, |(index, _, _)| *index)].as_scaled(scale);
        let center = self.state.to_device(pos);
        let left = center.x - caret / 2.0;
        let baseline = center.y + (primary.ascent() + primary.descent()) / 2.0;

        let rgba = self.state.fill_style.to_srgba_unmultiplied();
        let width = self.pixmap.width() as i64;
        let height = self.pixmap.height() as i64;
        let pixels = self.pixmap.pixels_mut();
        for (index, id, x) in glyphs {
            let glyph = id.with_scale_and_position(scale, point(left + x, baseline));
            let Some(outlined) = self.fonts[index].outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let i = (py * width + px) as usize;
                pixels[i] = blend(pixels[i], rgba, coverage);
            });
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        let Some(rect) = sk::Rect::from_xywh(rect.min.x, rect.min.y, rect.width(), rect.height())
        else {
            return;
        };
        let paint = Self::paint(self.state.fill_style);
        let transform = self.transform();
        self.pixmap.fill_rect(rect, &paint, transform, None);
    }

    fn scale(&mut self, factor: f32) {
        self.state.scale *= factor;
    }
}
