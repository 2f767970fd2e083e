use egui::{Color32, pos2};
use sketchpad::command::{Command, CommandContext};
use sketchpad::state::RedrawReason;
use sketchpad::{
    Drawable, GestureState, InputEvent, Renderer, SketchConfig, SketchError, SketchState, Tool,
};

#[test]
fn test_line_gesture_scenario() {
    let mut state = SketchState::default();
    state.select_line(2.0).unwrap();

    state.handle_input(InputEvent::PointerDown(pos2(5.0, 5.0)));
    let id = state.history().committed()[0].id();
    assert_eq!(state.gesture(), GestureState::Committing { drawable: id });

    state.handle_input(InputEvent::PointerMove(pos2(6.0, 6.0)));
    state.handle_input(InputEvent::PointerMove(pos2(7.0, 5.0)));
    state.handle_input(InputEvent::PointerUp(pos2(7.0, 5.0)));

    assert_eq!(state.gesture(), GestureState::Idle);
    assert_eq!(state.history().len(), 1);
    let drawable = &state.history().committed()[0];
    assert_eq!(drawable.id(), id);
    let stroke = drawable.as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(5.0, 5.0), pos2(6.0, 6.0), pos2(7.0, 5.0)]);
    assert_eq!(stroke.thickness(), 2.0);

    // Moves after pointer-up only move the preview
    state.handle_input(InputEvent::PointerMove(pos2(40.0, 40.0)));
    assert_eq!(state.history().committed()[0].as_stroke().unwrap().points().len(), 3);
    assert_eq!(state.tool().position(), pos2(40.0, 40.0));
}

#[test]
fn test_second_pointer_down_finishes_first_gesture() {
    let mut state = SketchState::default();
    state.select_line(2.0).unwrap();

    state.pointer_down(pos2(5.0, 5.0));
    let first = state.history().committed()[0].id();
    // No pointer-up in between, e.g. the release was lost
    state.pointer_down(pos2(30.0, 30.0));
    let second = state.history().committed()[1].id();
    assert_ne!(first, second);
    assert_eq!(state.gesture().active_drawable(), Some(second));

    state.pointer_move(pos2(35.0, 32.0));
    state.pointer_up(pos2(35.0, 32.0));

    assert_eq!(state.history().len(), 2);
    let committed = state.history().committed();
    assert_eq!(committed[0].as_stroke().unwrap().points(), &[pos2(5.0, 5.0)]);
    assert_eq!(
        committed[1].as_stroke().unwrap().points(),
        &[pos2(30.0, 30.0), pos2(35.0, 32.0)]
    );
    assert_eq!(state.gesture(), GestureState::Idle);
}

#[test]
fn test_sticker_drag_moves_sticker() {
    let mut state = SketchState::default();
    state.select_sticker("🤠").unwrap();

    state.pointer_down(pos2(50.0, 50.0));
    state.pointer_move(pos2(55.0, 52.0));
    state.pointer_move(pos2(60.0, 58.0));
    state.pointer_up(pos2(60.0, 58.0));

    let sticker = state.history().committed()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(60.0, 58.0));
    assert_eq!(sticker.glyph(), "🤠");
}

#[test]
fn test_style_is_frozen_at_creation() {
    let mut state = SketchState::default();
    state.set_color(Color32::RED);
    state.select_line(3.0).unwrap();
    state.pointer_down(pos2(1.0, 1.0));
    state.pointer_move(pos2(2.0, 2.0));
    state.pointer_up(pos2(2.0, 2.0));

    state.set_color(Color32::BLUE);
    state.select_line(9.0).unwrap();

    let drawable = &state.history().committed()[0];
    assert_eq!(drawable.color(), Color32::RED);
    assert_eq!(drawable.as_stroke().unwrap().thickness(), 3.0);
    assert_eq!(state.tool().color(), Color32::BLUE);
}

#[test]
fn test_tool_switching_shares_thickness_and_color() {
    let mut state = SketchState::default();
    state.select_line(6.0).unwrap();
    state.set_color(Color32::GREEN);
    state.select_sticker("🎃").unwrap();

    let sticker_tool = state.tool().as_sticker_tool().unwrap();
    assert_eq!(sticker_tool.glyph(), "🎃");
    assert_eq!(sticker_tool.color(), Color32::GREEN);

    // Back to a line: shared thickness and colour are still there
    state.select_line(state.settings().thickness).unwrap();
    let line_tool = state.tool().as_line_tool().unwrap();
    assert_eq!(line_tool.thickness(), 6.0);
    assert_eq!(line_tool.color(), Color32::GREEN);

    // Changing colour while a sticker is selected keeps the glyph
    state.select_sticker("🌮").unwrap();
    state.set_color(Color32::RED);
    let sticker_tool = state.tool().as_sticker_tool().unwrap();
    assert_eq!(sticker_tool.glyph(), "🌮");
    assert_eq!(sticker_tool.color(), Color32::RED);
}

#[test]
fn test_tool_switch_keeps_cursor() {
    let mut state = SketchState::default();
    state.pointer_enter(pos2(30.0, 40.0));
    state.select_sticker("🤠").unwrap();
    assert_eq!(state.tool().position(), pos2(30.0, 40.0));
    assert!(state.tool().is_visible());
}

#[test]
fn test_preview_visibility_follows_gesture() {
    let mut state = SketchState::default();
    assert!(!state.tool().is_visible());

    state.pointer_enter(pos2(10.0, 10.0));
    assert!(state.tool().is_visible());

    state.pointer_down(pos2(10.0, 10.0));
    assert!(!state.tool().is_visible());

    // Entering again mid-gesture keeps the preview hidden
    state.pointer_leave();
    state.pointer_enter(pos2(12.0, 12.0));
    assert!(!state.tool().is_visible());
    assert!(state.gesture().is_committing());

    state.pointer_up(pos2(12.0, 12.0));
    assert!(state.tool().is_visible());

    state.pointer_leave();
    assert!(!state.tool().is_visible());
}

#[test]
fn test_release_outside_canvas_leaves_preview_hidden() {
    let mut state = SketchState::default();
    state.pointer_down(pos2(10.0, 10.0));
    state.pointer_leave();
    state.pointer_up(pos2(300.0, 10.0));
    assert!(state.gesture().is_idle());
    assert!(!state.tool().is_visible());
}

#[test]
fn test_custom_sticker_validation() {
    let mut state = SketchState::default();
    let palette_len = state.palette().len();

    assert!(matches!(state.add_custom_sticker(""), Err(SketchError::EmptyGlyph)));
    assert!(matches!(state.add_custom_sticker("   "), Err(SketchError::EmptyGlyph)));
    assert_eq!(state.palette().len(), palette_len);
    assert!(state.tool().as_line_tool().is_some());

    state.add_custom_sticker(" 🐸 ").unwrap();
    state.add_custom_sticker("🐸").unwrap();
    assert_eq!(state.palette().len(), palette_len + 1);
    assert_eq!(state.palette().last().map(String::as_str), Some("🐸"));
    assert_eq!(state.tool().as_sticker_tool().unwrap().glyph(), "🐸");
}

#[test]
fn test_invalid_thickness_keeps_tool() {
    let mut state = SketchState::default();
    state.select_line(4.0).unwrap();
    assert!(matches!(
        state.select_line(-1.0),
        Err(SketchError::InvalidThickness(_))
    ));
    assert_eq!(state.tool().as_line_tool().unwrap().thickness(), 4.0);
}

#[test]
fn test_every_mutation_requests_redraw() {
    let mut state = SketchState::default();
    let expect = |state: &mut SketchState, reason: RedrawReason| {
        assert!(state.take_redraw());
        assert_eq!(state.redraw_tracker().last_reason(), Some(reason));
    };

    state.pointer_move(pos2(1.0, 1.0));
    expect(&mut state, RedrawReason::ToolMoved);
    state.pointer_down(pos2(1.0, 1.0));
    expect(&mut state, RedrawReason::Commit);
    state.pointer_move(pos2(2.0, 2.0));
    expect(&mut state, RedrawReason::Extend);
    state.pointer_up(pos2(2.0, 2.0));
    expect(&mut state, RedrawReason::ToolVisibility);
    state.undo();
    expect(&mut state, RedrawReason::Undo);
    state.redo();
    expect(&mut state, RedrawReason::Redo);
    state.select_sticker("🤠").unwrap();
    expect(&mut state, RedrawReason::ToolChanged);
    state.clear();
    expect(&mut state, RedrawReason::Clear);

    // No-op undo on empty history does not ask for a redraw
    state.undo();
    assert!(!state.take_redraw());
}

#[test]
fn test_commands_drive_state() {
    let config = SketchConfig::default();
    let renderer = Renderer::from_config(&config);
    let mut state = SketchState::new(&config);

    let run = |state: &mut SketchState, command: Command| {
        let mut ctx = CommandContext::new(state, &renderer, &config);
        command.execute(&mut ctx)
    };

    run(&mut state, Command::SelectLine { thickness: config.thick_thickness }).unwrap();
    state.pointer_down(pos2(1.0, 1.0));
    state.pointer_up(pos2(1.0, 1.0));
    run(&mut state, Command::SetColor(Color32::RED)).unwrap();
    run(&mut state, Command::SelectSticker { glyph: "🎃".to_owned() }).unwrap();
    state.pointer_down(pos2(9.0, 9.0));
    state.pointer_up(pos2(9.0, 9.0));
    assert_eq!(state.history().len(), 2);

    run(&mut state, Command::Undo).unwrap();
    assert_eq!(state.history().len(), 1);
    run(&mut state, Command::Redo).unwrap();
    assert_eq!(state.history().len(), 2);
    run(&mut state, Command::Clear).unwrap();
    assert!(state.history().is_empty());
    assert!(!state.history().can_redo());

    // Silent no-ops stay successful
    run(&mut state, Command::Undo).unwrap();
    run(&mut state, Command::Redo).unwrap();

    assert!(matches!(
        run(&mut state, Command::AddSticker { glyph: String::new() }),
        Err(SketchError::EmptyGlyph)
    ));
}
