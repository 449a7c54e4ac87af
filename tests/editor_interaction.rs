use eframe_sketch::{Action, BrushWidth, Document, Editor, EditorState, InputEvent, InputLocation, ToolState};
use egui::{Color32, PointerButton, Pos2};

fn create_test_editor() -> Editor {
    let document = Document::new(100, 100, Color32::WHITE).unwrap();
    let tools = ToolState::new(Color32::GREEN, BrushWidth::default(), Color32::WHITE);
    Editor::new(document, tools)
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: Pos2::new(x, y),
        is_in_canvas: (0.0..100.0).contains(&x) && (0.0..100.0).contains(&y),
    }
}

fn press(button: PointerButton, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: at(x, y),
        button,
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        location: at(x, y),
        held_buttons: vec![PointerButton::Primary],
    }
}

fn release(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        location: at(x, y),
        button: PointerButton::Primary,
    }
}

#[test]
fn test_drag_samples_become_segments() {
    let mut editor = create_test_editor();

    // Two strokes: 1 press + 4 moves, then 1 press + 2 moves
    editor.handle_event(&press(PointerButton::Primary, 10.0, 10.0));
    for x in [15.0, 20.0, 25.0, 30.0] {
        editor.handle_event(&drag(x, 10.0));
    }
    editor.handle_event(&release(30.0, 10.0));
    editor.handle_event(&press(PointerButton::Primary, 10.0, 50.0));
    editor.handle_event(&drag(20.0, 50.0));
    editor.handle_event(&drag(30.0, 50.0));
    editor.handle_event(&release(30.0, 50.0));

    assert_eq!(editor.document().history_len(), 6);
    assert_eq!(editor.state(), EditorState::Idle);
    // The gap between the strokes stays blank
    assert_eq!(editor.document().canvas().pixel_at(20, 30).unwrap(), Color32::WHITE);
}

#[test]
fn test_moves_without_press_draw_nothing() {
    let mut editor = create_test_editor();
    editor.handle_event(&drag(10.0, 10.0));
    editor.handle_event(&drag(20.0, 20.0));
    assert_eq!(editor.document().history_len(), 0);
}

#[test]
fn test_release_forgets_last_position() {
    let mut editor = create_test_editor();
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(20.0, 10.0));
    editor.pointer_up();
    assert_eq!(editor.state().last_position(), None);

    editor.pointer_down(Pos2::new(20.0, 40.0));
    editor.pointer_move(Pos2::new(30.0, 40.0));

    let last = editor.document().history().undo_stack().last().copied();
    match last {
        Some(eframe_sketch::Command::DrawSegment(segment)) => {
            assert_eq!(segment.start(), Pos2::new(20.0, 40.0));
            assert_eq!(segment.end(), Pos2::new(30.0, 40.0));
        }
        None => panic!("expected a segment"),
    }
}

#[test]
fn test_press_outside_canvas_does_not_start_stroke() {
    let mut editor = create_test_editor();
    editor.handle_event(&press(PointerButton::Primary, -5.0, 10.0));
    editor.handle_event(&drag(10.0, 10.0));
    assert!(!editor.state().is_drawing());
    assert_eq!(editor.document().history_len(), 0);
}

#[test]
fn test_red_segment_scenario() {
    let mut editor = create_test_editor();
    editor.set_color(Color32::RED);
    editor.set_brush_width(BrushWidth::new(3).unwrap());
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(20.0, 20.0));
    editor.pointer_up();

    assert_eq!(editor.document().canvas().pixel_at(10, 10).unwrap(), Color32::RED);
    assert_eq!(editor.document().canvas().pixel_at(20, 20).unwrap(), Color32::RED);
    assert_eq!(editor.document().canvas().pixel_at(50, 50).unwrap(), Color32::WHITE);
}

#[test]
fn test_picked_color_used_for_next_segment() {
    let mut editor = create_test_editor();
    let sampled = Color32::from_rgb(12, 34, 56);
    editor.set_color(sampled);
    editor.pointer_down(Pos2::new(5.0, 5.0));
    editor.pointer_move(Pos2::new(8.0, 5.0));
    editor.pointer_up();

    editor.set_color(Color32::BLACK);
    editor.handle_event(&press(PointerButton::Secondary, 6.0, 5.0));
    assert_eq!(editor.tools().pen_color(), sampled);
    assert_eq!(editor.tools().previous_color(), Color32::BLACK);

    editor.pointer_down(Pos2::new(60.0, 60.0));
    editor.pointer_move(Pos2::new(70.0, 70.0));
    editor.pointer_up();
    assert_eq!(editor.document().canvas().pixel_at(65, 65).unwrap(), sampled);
}

#[test]
fn test_pick_outside_canvas_is_ignored() {
    let mut editor = create_test_editor();
    editor.pick_color_at(Pos2::new(150.0, 10.0));
    editor.pick_color_at(Pos2::new(10.0, -3.0));
    assert_eq!(editor.tools().pen_color(), Color32::GREEN);
}

#[test]
fn test_eraser_paints_background() {
    let mut editor = create_test_editor();
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(30.0, 10.0));
    editor.pointer_up();
    assert_eq!(editor.document().canvas().pixel_at(20, 10).unwrap(), Color32::GREEN);

    editor.use_eraser();
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(30.0, 10.0));
    editor.pointer_up();
    assert_eq!(editor.document().canvas().pixel_at(20, 10).unwrap(), Color32::WHITE);

    editor.toggle_eraser();
    assert_eq!(editor.tools().pen_color(), Color32::GREEN);
}

#[test]
fn test_undo_then_draw_discards_redo() {
    let mut editor = create_test_editor();
    let stroke = |editor: &mut Editor, y: f32| {
        editor.pointer_down(Pos2::new(10.0, y));
        editor.pointer_move(Pos2::new(20.0, y));
        editor.pointer_up();
    };

    stroke(&mut editor, 10.0);
    stroke(&mut editor, 20.0);
    assert!(editor.undo());
    stroke(&mut editor, 30.0);

    assert!(!editor.redo());
    assert_eq!(editor.document().history_len(), 2);
    assert_eq!(editor.document().canvas().pixel_at(15, 20).unwrap(), Color32::WHITE);
}

#[test]
fn test_invalid_resize_keeps_state() {
    let mut editor = create_test_editor();
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(20.0, 10.0));
    editor.pointer_up();

    assert!(editor.resize(0, 0).is_err());
    assert_eq!(editor.document().history_len(), 1);
    assert_eq!(editor.document().canvas().width(), 100);
}

#[test]
fn test_shortcut_events_are_ignored_by_editor() {
    let mut editor = create_test_editor();
    editor.handle_event(&InputEvent::Shortcut(Action::ClearCanvas));
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_move_without_primary_held_ends_stroke() {
    let mut editor = create_test_editor();
    editor.handle_event(&press(PointerButton::Primary, 10.0, 10.0));
    editor.handle_event(&drag(20.0, 10.0));

    // Button came up outside the window, so no release was delivered
    editor.handle_event(&InputEvent::PointerMove {
        location: at(40.0, 40.0),
        held_buttons: vec![],
    });
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.document().history_len(), 1);
    assert_eq!(editor.document().canvas().pixel_at(30, 25).unwrap(), Color32::WHITE);

    editor.handle_event(&InputEvent::PointerMove {
        location: at(50.0, 50.0),
        held_buttons: vec![PointerButton::Secondary],
    });
    assert_eq!(editor.document().history_len(), 1);
}
