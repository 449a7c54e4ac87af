use crate::config::PaintConfig;
use crate::dialogs::{self, ColorDialog, ResizeDialog};
use crate::editor::Editor;
use crate::error::PaintResult;
use crate::file_handler::{self, NativeDialogs, SaveOutcome};
use crate::input::{Action, InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// The modal dialog currently shown, if any
#[derive(Debug)]
enum OpenDialog {
    Color(ColorDialog),
    Resize(ResizeDialog),
}

pub struct PaintApp {
    editor: Editor,
    renderer: Renderer,
    input_handler: InputHandler,
    dialog: Option<OpenDialog>,
    native_dialogs: NativeDialogs,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> PaintResult<Self> {
        let max_side = cc.egui_ctx.input(|i| i.max_texture_side) as u32;
        let editor = Editor::from_config(config, max_side)?;
        log::info!(
            "Created {}x{} canvas",
            editor.document().canvas().width(),
            editor.document().canvas().height()
        );

        Ok(Self {
            editor,
            renderer: Renderer::new(&cc.egui_ctx),
            input_handler: InputHandler::new(egui::Rect::NOTHING),
            dialog: None,
            native_dialogs: NativeDialogs,
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn has_open_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Run a toolbar or keyboard action
    pub fn perform(&mut self, action: Action) {
        if self.has_open_dialog() {
            return;
        }
        match action {
            Action::Save => self.save(),
            Action::ChooseColor => {
                self.dialog = Some(OpenDialog::Color(ColorDialog::new(
                    self.editor.tools().pen_color(),
                )));
            }
            Action::Undo => {
                self.editor.undo();
            }
            Action::Redo => {
                self.editor.redo();
            }
            Action::ClearCanvas => self.editor.clear(),
            Action::ToggleEraser => self.editor.toggle_eraser(),
            Action::ResizeCanvas => {
                let document = self.editor.document();
                self.dialog = Some(OpenDialog::Resize(ResizeDialog::new(
                    document.canvas().width(),
                    document.canvas().height(),
                    document.max_side(),
                )));
            }
        }
    }

    fn save(&mut self) {
        match file_handler::save_document(self.editor.document(), &mut self.native_dialogs) {
            SaveOutcome::Saved(path) => log::info!("Saved drawing to {}", path.display()),
            SaveOutcome::Cancelled | SaveOutcome::Failed(..) => {}
        }
    }

    /// Feed this frame's pointer and keyboard input to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect, hovered: bool) {
        self.input_handler.set_canvas(canvas_rect, hovered);
        for event in self.input_handler.process_input(ctx) {
            match event {
                InputEvent::Shortcut(action) => self.perform(action),
                // A stroke may still need ending while a dialog is up
                InputEvent::PointerUp { .. } => self.editor.handle_event(&event),
                _ if self.has_open_dialog() => {}
                _ => self.editor.handle_event(&event),
            }
        }
    }

    pub fn render_canvas(&mut self, painter: &egui::Painter, origin: egui::Pos2) {
        self.renderer
            .render(painter, self.editor.document().canvas(), origin);
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.dialog else {
            return;
        };
        let finished = match dialog {
            OpenDialog::Color(dialog) => {
                dialogs::apply_color_outcome(&mut self.editor, dialog.ui(ctx))
            }
            OpenDialog::Resize(dialog) => {
                dialogs::apply_resize_outcome(&mut self.editor, dialog.ui(ctx))
            }
        };
        if finished {
            self.dialog = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The backend reports its real texture limit once frames are running
        self.editor.set_max_side(self.renderer.max_texture_side());
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.show_dialog(ctx);
    }
}
