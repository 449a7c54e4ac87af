use egui::Color32;

use crate::stroke::BrushWidth;

/// Pen settings applied to the next segment that gets drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pen_color: Color32,
    previous_color: Color32,
    brush_width: BrushWidth,
    background: Color32,
}

impl ToolState {
    pub fn new(pen_color: Color32, brush_width: BrushWidth, background: Color32) -> Self {
        let pen_color = opaque(pen_color);
        Self {
            pen_color,
            previous_color: pen_color,
            brush_width,
            background: opaque(background),
        }
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn previous_color(&self) -> Color32 {
        self.previous_color
    }

    pub fn brush_width(&self) -> BrushWidth {
        self.brush_width
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Change the pen color, remembering the one it replaces.
    pub fn set_color(&mut self, color: Color32) {
        self.previous_color = self.pen_color;
        self.pen_color = opaque(color);
    }

    /// Go back to the color used before the last change.
    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.pen_color, &mut self.previous_color);
    }

    /// Paint with the background color.
    pub fn use_eraser(&mut self) {
        if !self.is_erasing() {
            self.set_color(self.background);
        }
    }

    /// Switch the eraser on, or back to the color that was active before it.
    pub fn toggle_eraser(&mut self) {
        if self.is_erasing() {
            self.swap_colors();
        } else {
            self.use_eraser();
        }
    }

    pub fn is_erasing(&self) -> bool {
        self.pen_color == self.background
    }

    pub fn set_brush_width(&mut self, width: BrushWidth) {
        self.brush_width = width;
    }
}

// The raster stores opaque pixels only
fn opaque(color: Color32) -> Color32 {
    Color32::from_rgb(color.r(), color.g(), color.b())
}
