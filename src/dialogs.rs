use egui::Color32;
use egui::color_picker::{self, Alpha};

use crate::editor::Editor;

/// Result of showing a modal dialog for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// Still open
    Pending,
    Cancelled,
    Done(T),
}

/// Which number the resize dialog is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStep {
    Width,
    Height { width: u32 },
}

/// Asks for the new canvas width, then the height.
///
/// Cancelling at either step abandons the whole resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDialog {
    step: ResizeStep,
    value: u32,
    current_height: u32,
    /// Largest side the display can show
    max_side: u32,
}

impl ResizeDialog {
    pub fn new(current_width: u32, current_height: u32, max_side: u32) -> Self {
        Self {
            step: ResizeStep::Width,
            value: current_width,
            current_height,
            max_side: max_side.max(1),
        }
    }

    pub fn step(&self) -> ResizeStep {
        self.step
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    /// Confirm the number currently entered.
    pub fn submit(&mut self) -> DialogOutcome<(u32, u32)> {
        if !(1..=self.max_side).contains(&self.value) {
            log::warn!(
                "Canvas dimensions must be between 1 and {}, got {}",
                self.max_side,
                self.value
            );
            return DialogOutcome::Pending;
        }
        match self.step {
            ResizeStep::Width => {
                self.step = ResizeStep::Height { width: self.value };
                self.value = self.current_height.min(self.max_side);
                DialogOutcome::Pending
            }
            ResizeStep::Height { width } => DialogOutcome::Done((width, self.value)),
        }
    }

    /// Abandon the resize, whichever step it is at.
    pub fn cancel(&mut self) -> DialogOutcome<(u32, u32)> {
        log::debug!("Resize abandoned at {:?}", self.step);
        DialogOutcome::Cancelled
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> DialogOutcome<(u32, u32)> {
        let prompt = match self.step {
            ResizeStep::Width => "Enter new canvas width:",
            ResizeStep::Height { .. } => "Enter new canvas height:",
        };

        let max_side = self.max_side;
        let mut outcome = DialogOutcome::Pending;
        egui::Window::new("Resize canvas")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.add(egui::DragValue::new(&mut self.value).range(1..=max_side));
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = self.submit();
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = self.cancel();
                    }
                });
            });
        outcome
    }
}

/// Color chooser seeded with the current pen color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDialog {
    color: Color32,
}

impl ColorDialog {
    pub fn new(current: Color32) -> Self {
        Self { color: current }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn confirm(&mut self) -> DialogOutcome<Color32> {
        DialogOutcome::Done(self.color)
    }

    /// Close without touching the pen color.
    pub fn cancel(&mut self) -> DialogOutcome<Color32> {
        DialogOutcome::Cancelled
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> DialogOutcome<Color32> {
        let mut outcome = DialogOutcome::Pending;
        egui::Window::new("Choose color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                color_picker::color_picker_color32(ui, &mut self.color, Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = self.confirm();
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = self.cancel();
                    }
                });
            });
        outcome
    }
}

/// Apply a color dialog outcome. Returns true once the dialog should close.
pub fn apply_color_outcome(editor: &mut Editor, outcome: DialogOutcome<Color32>) -> bool {
    match outcome {
        DialogOutcome::Pending => false,
        DialogOutcome::Cancelled => true,
        DialogOutcome::Done(color) => {
            editor.set_color(color);
            true
        }
    }
}

/// Apply a resize dialog outcome. Returns true once the dialog should close.
pub fn apply_resize_outcome(editor: &mut Editor, outcome: DialogOutcome<(u32, u32)>) -> bool {
    match outcome {
        DialogOutcome::Pending => false,
        DialogOutcome::Cancelled => true,
        DialogOutcome::Done((width, height)) => {
            if let Err(err) = editor.resize(width, height) {
                log::warn!("Resize rejected: {}", err);
            }
            true
        }
    }
}
