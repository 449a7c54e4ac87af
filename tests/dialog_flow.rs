use eframe_sketch::dialogs::{self, ColorDialog, DialogOutcome, ResizeDialog};
use eframe_sketch::{BrushWidth, Document, Editor, ToolState};
use egui::{Color32, Pos2};

fn create_test_editor() -> Editor {
    let mut document = Document::new(100, 80, Color32::WHITE).unwrap();
    document.set_max_side(2048);
    let tools = ToolState::new(Color32::GREEN, BrushWidth::default(), Color32::WHITE);
    let mut editor = Editor::new(document, tools);
    editor.pointer_down(Pos2::new(10.0, 10.0));
    editor.pointer_move(Pos2::new(30.0, 10.0));
    editor.pointer_up();
    editor
}

fn open_resize(editor: &Editor) -> ResizeDialog {
    let document = editor.document();
    ResizeDialog::new(
        document.canvas().width(),
        document.canvas().height(),
        document.max_side(),
    )
}

#[test]
fn test_resize_cancelled_at_width_changes_nothing() {
    let mut editor = create_test_editor();
    let mut dialog = open_resize(&editor);

    dialog.set_value(300);
    assert!(dialogs::apply_resize_outcome(&mut editor, dialog.cancel()));

    assert_eq!(editor.document().canvas().size(), egui::vec2(100.0, 80.0));
    assert_eq!(editor.document().history_len(), 1);
    assert_eq!(editor.document().canvas().pixel_at(20, 10).unwrap(), Color32::GREEN);
}

#[test]
fn test_resize_cancelled_at_height_changes_nothing() {
    let mut editor = create_test_editor();
    let mut dialog = open_resize(&editor);

    dialog.set_value(300);
    let outcome = dialog.submit();
    assert!(!dialogs::apply_resize_outcome(&mut editor, outcome));

    dialog.set_value(200);
    assert!(dialogs::apply_resize_outcome(&mut editor, dialog.cancel()));

    assert_eq!(editor.document().canvas().size(), egui::vec2(100.0, 80.0));
    assert_eq!(editor.document().history_len(), 1);
    assert_eq!(editor.document().canvas().pixel_at(20, 10).unwrap(), Color32::GREEN);
}

#[test]
fn test_resize_completed_reallocates() {
    let mut editor = create_test_editor();
    let mut dialog = open_resize(&editor);

    dialog.set_value(300);
    dialog.submit();
    dialog.set_value(200);
    let outcome = dialog.submit();
    assert_eq!(outcome, DialogOutcome::Done((300, 200)));
    assert!(dialogs::apply_resize_outcome(&mut editor, outcome));

    assert_eq!(editor.document().canvas().size(), egui::vec2(300.0, 200.0));
    assert_eq!(editor.document().history_len(), 0);
    assert_eq!(editor.document().canvas().pixel_at(20, 10).unwrap(), Color32::WHITE);
}

#[test]
fn test_resize_beyond_display_limit_is_refused() {
    let mut editor = create_test_editor();
    let mut dialog = open_resize(&editor);

    dialog.set_value(16384);
    assert_eq!(dialog.submit(), DialogOutcome::Pending);

    // Even a forged outcome cannot get past the document
    assert!(dialogs::apply_resize_outcome(&mut editor, DialogOutcome::Done((16384, 16384))));
    assert_eq!(editor.document().canvas().size(), egui::vec2(100.0, 80.0));
    assert_eq!(editor.document().history_len(), 1);
}

#[test]
fn test_color_cancel_keeps_both_colors() {
    let mut editor = create_test_editor();
    editor.set_color(Color32::RED);
    let previous = editor.tools().previous_color();

    let mut dialog = ColorDialog::new(editor.tools().pen_color());
    dialog.set_color(Color32::BLUE);
    assert!(!dialogs::apply_color_outcome(&mut editor, DialogOutcome::Pending));
    assert!(dialogs::apply_color_outcome(&mut editor, dialog.cancel()));

    assert_eq!(editor.tools().pen_color(), Color32::RED);
    assert_eq!(editor.tools().previous_color(), previous);
    assert_eq!(editor.document().history_len(), 1);
}

#[test]
fn test_color_confirm_sets_pen() {
    let mut editor = create_test_editor();
    let mut dialog = ColorDialog::new(editor.tools().pen_color());
    dialog.set_color(Color32::BLUE);
    assert!(dialogs::apply_color_outcome(&mut editor, dialog.confirm()));

    assert_eq!(editor.tools().pen_color(), Color32::BLUE);
    assert_eq!(editor.tools().previous_color(), Color32::GREEN);
}
