use egui::{Color32, Pos2, Rect, pos2, vec2};
use sketchpad::surface::{DrawOp, RecordingSurface, SubPath};
use sketchpad::{Renderer, SketchConfig, SketchState, Tool};

/// A red stroke, a thick blue stroke and a sticker, with the preview showing
fn sample_state() -> SketchState {
    let mut state = SketchState::default();
    state.set_color(Color32::RED);
    state.select_line(3.0).unwrap();
    state.pointer_down(pos2(10.0, 10.0));
    state.pointer_move(pos2(20.0, 20.0));
    state.pointer_move(pos2(30.0, 10.0));
    state.pointer_up(pos2(30.0, 10.0));

    state.set_color(Color32::BLUE);
    state.select_line(8.0).unwrap();
    state.pointer_down(pos2(20.0, 100.0));
    state.pointer_move(pos2(200.0, 100.0));
    state.pointer_up(pos2(200.0, 100.0));

    state.select_sticker("🤠").unwrap();
    state.pointer_down(pos2(50.0, 50.0));
    state.pointer_up(pos2(50.0, 50.0));
    state.pointer_move(pos2(120.0, 200.0));
    assert!(state.tool().is_visible());
    state
}

/// Pixels that differ from the white background in the square of
/// half-width `half` around `center`
fn ink_around(image: &image::RgbaImage, center: Pos2, half: f32) -> usize {
    let (width, height) = image.dimensions();
    let x0 = (center.x - half).max(0.0) as u32;
    let y0 = (center.y - half).max(0.0) as u32;
    let x1 = ((center.x + half) as u32).min(width);
    let y1 = ((center.y + half) as u32).min(height);
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| (x, y)))
        .filter(|&(x, y)| image.get_pixel(x, y).0 != [255, 255, 255, 255])
        .count()
}

#[test]
fn test_redraw_order() {
    let state = sample_state();
    let mut surface = RecordingSurface::new(vec2(256.0, 256.0));
    Renderer::default().redraw(&mut surface, &state);
    let ops = surface.into_ops();

    assert_eq!(ops.len(), 5);
    assert_eq!(
        ops[0],
        DrawOp::FillRect {
            rect: Rect::from_min_size(Pos2::ZERO, vec2(256.0, 256.0)),
            color: Color32::WHITE,
        }
    );
    assert_eq!(
        ops[1],
        DrawOp::StrokePath {
            subpaths: vec![SubPath::Polyline(vec![
                pos2(10.0, 10.0),
                pos2(20.0, 20.0),
                pos2(30.0, 10.0),
            ])],
            color: Color32::RED,
            width: 3.0,
        }
    );
    assert!(matches!(&ops[2], DrawOp::StrokePath { color, width, .. }
        if *color == Color32::BLUE && *width == 8.0));
    assert!(matches!(&ops[3], DrawOp::FillText { text, pos, .. }
        if text == "🤠" && *pos == pos2(50.0, 50.0)));
    // Preview is topmost
    assert!(matches!(&ops[4], DrawOp::FillText { pos, .. } if *pos == pos2(120.0, 200.0)));
}

#[test]
fn test_redraw_is_idempotent() {
    let state = sample_state();
    let renderer = Renderer::default();
    let mut first = RecordingSurface::new(vec2(256.0, 256.0));
    let mut second = RecordingSurface::new(vec2(256.0, 256.0));
    renderer.redraw(&mut first, &state);
    renderer.redraw(&mut second, &state);
    assert_eq!(first.ops(), second.ops());
}

#[test]
fn test_export_matches_screen_scaled_without_preview() {
    let state = sample_state();
    let config = SketchConfig::default();
    let renderer = Renderer::from_config(&config);

    let mut screen = RecordingSurface::new(vec2(256.0, 256.0));
    renderer.redraw(&mut screen, &state);
    let mut export = RecordingSurface::new(vec2(1024.0, 1024.0));
    renderer.render_export(&mut export, state.history(), config.export_scale());

    let screen_ops = screen.into_ops();
    let export_ops = export.into_ops();
    // Same drawables, minus the preview
    assert_eq!(export_ops.len(), screen_ops.len() - 1);

    assert_eq!(
        export_ops[0],
        DrawOp::FillRect {
            rect: Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 1024.0)),
            color: Color32::WHITE,
        }
    );
    assert_eq!(
        export_ops[1],
        DrawOp::StrokePath {
            subpaths: vec![SubPath::Polyline(vec![
                pos2(40.0, 40.0),
                pos2(80.0, 80.0),
                pos2(120.0, 40.0),
            ])],
            color: Color32::RED,
            width: 12.0,
        }
    );
    assert!(matches!(&export_ops[3], DrawOp::FillText { pos, size, .. }
        if *pos == pos2(200.0, 200.0) && *size == 128.0));
}

#[test]
fn test_export_png() {
    let state = sample_state();
    let config = SketchConfig::default();
    let renderer = Renderer::from_config(&config);

    let png = renderer.export(&state, &config).unwrap();
    let image = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1024, 1024));

    // Background
    assert_eq!(image.get_pixel(2, 2).0, [255, 255, 255, 255]);
    assert_eq!(image.get_pixel(1020, 1020).0, [255, 255, 255, 255]);
    // Middle of the thick blue stroke from (20,100) to (200,100), scaled by 4
    assert_eq!(image.get_pixel(400, 400).0, [0, 0, 255, 255]);
    // The sticker at (50,50) lands around (200,200)
    let ink = ink_around(&image, pos2(200.0, 200.0), 60.0);
    assert!(ink > 200, "sticker painted only {ink} pixels");
    // The sticker preview hovering at (120,200) is not exported
    assert_eq!(image.get_pixel(120 * 4, 200 * 4).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_does_not_touch_state() {
    let mut state = sample_state();
    state.take_redraw();
    let committed = state.history().committed().to_vec();
    let tool = state.tool().clone();

    let config = SketchConfig::default();
    Renderer::from_config(&config).export(&state, &config).unwrap();

    assert_eq!(state.history().committed(), committed.as_slice());
    assert_eq!(state.tool(), &tool);
    assert!(!state.take_redraw());
}

#[test]
fn test_export_to_file() {
    let path = std::env::temp_dir().join(format!("sketchpad-export-{}.png", std::process::id()));
    let config = SketchConfig {
        export_file_name: path.to_string_lossy().into_owned(),
        export_size: 512,
        ..SketchConfig::default()
    };
    let state = SketchState::new(&config);
    let written = Renderer::from_config(&config)
        .export_to_file(&state, &config)
        .unwrap();
    assert_eq!(written, path);

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (512, 512));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_paints_every_palette_sticker() {
    let config = SketchConfig::default();
    let mut state = SketchState::new(&config);
    let palette = state.palette().to_vec();
    for (i, glyph) in palette.iter().enumerate() {
        state.select_sticker(glyph).unwrap();
        let pos = pos2(48.0 + 80.0 * i as f32, 128.0);
        state.pointer_down(pos);
        state.pointer_up(pos);
    }
    state.pointer_leave();
    assert!(!state.tool().is_visible());

    let renderer = Renderer::from_config(&config);
    let mut screen = RecordingSurface::new(vec2(256.0, 256.0));
    renderer.redraw(&mut screen, &state);
    let png = renderer.export(&state, &config).unwrap();
    let image = image::load_from_memory(&png).unwrap().to_rgba8();

    let scale = config.export_scale();
    let stickers: Vec<_> = screen
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, pos, size, .. } => Some((text.clone(), *pos, *size)),
            _ => None,
        })
        .collect();
    assert_eq!(stickers.len(), palette.len());

    for (text, pos, size) in stickers {
        let center = pos2(pos.x * scale, pos.y * scale);
        let ink = ink_around(&image, center, size * scale / 2.0);
        assert!(ink > 200, "{text} at {center:?} painted only {ink} pixels");
    }
    // Nothing between the stickers
    assert_eq!(ink_around(&image, pos2(352.0, 512.0), 8.0), 0);
}
