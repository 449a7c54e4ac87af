use crate::PaintApp;
use crate::renderer::Renderer;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let origin = ui.available_rect_before_wrap().min;
        let canvas_rect = Renderer::canvas_rect(app.editor().document().canvas(), origin);

        // Claim the area so egui doesn't treat drags on it as window interaction
        let response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

        // Handle input before rendering so this frame's segments are visible.
        // contains_pointer is false when a combo box popup sits over the canvas.
        app.handle_input(ctx, canvas_rect, response.contains_pointer());
        app.render_canvas(ui.painter(), origin);
    });
}
