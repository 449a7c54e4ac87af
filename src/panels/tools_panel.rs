use crate::PaintApp;
use crate::input::Action;
use crate::stroke::BrushWidth;
use egui::{Color32, Sense, vec2};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        let enabled = !app.has_open_dialog();
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                for action in Action::ALL {
                    if ui.button(action.button_text()).clicked() {
                        log::info!("Action selected from UI: {:?}", action);
                        app.perform(action);
                    }
                }

                ui.separator();
                brush_size_menu(app, ui);

                ui.separator();
                color_preview(app, ui);

                ui.separator();
                let document = app.editor().document();
                ui.label(format!(
                    "Undo: {}  Redo: {}",
                    document.history_len(),
                    document.redo_len()
                ));
            });
        });
    });
}

fn brush_size_menu(app: &mut PaintApp, ui: &mut egui::Ui) {
    let current = app.editor().tools().brush_width();
    let mut selected = None;
    egui::ComboBox::from_label("Brush size")
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for width in BrushWidth::all() {
                if ui.selectable_label(width == current, width.to_string()).clicked() {
                    selected = Some(width);
                }
            }
        });
    if let Some(width) = selected {
        app.editor_mut().set_brush_width(width);
    }
}

/// Swatches for the pen color and the one before it; clicking the second swaps them.
fn color_preview(app: &mut PaintApp, ui: &mut egui::Ui) {
    let tools = app.editor().tools();
    let (pen, previous) = (tools.pen_color(), tools.previous_color());

    ui.label("Color:");
    swatch(ui, pen).on_hover_text("Current color");
    if swatch(ui, previous)
        .on_hover_text("Previous color (click to swap)")
        .clicked()
    {
        app.editor_mut().swap_colors();
    }
}

fn swatch(ui: &mut egui::Ui, color: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(24.0, 24.0), Sense::click());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.painter()
        .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, Color32::GRAY));
    response
}
