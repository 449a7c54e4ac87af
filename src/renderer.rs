// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};

use crate::canvas::Canvas;

/// Shows the canvas raster on screen.
///
/// Drawing never happens here: the raster is uploaded as a texture whenever its
/// revision changes, and that texture is what the user sees.
pub struct Renderer {
    ctx: egui::Context,
    texture: Option<TextureHandle>,
    /// Canvas revision the texture was built from
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
            uploaded_revision: None,
        }
    }

    /// Largest texture side the display backend accepts
    pub fn max_texture_side(&self) -> u32 {
        self.ctx.input(|i| i.max_texture_side) as u32
    }

    /// Re-upload the raster if it changed since the last call.
    /// Returns true when an upload happened.
    pub fn sync(&mut self, canvas: &Canvas) -> bool {
        if self.uploaded_revision == Some(canvas.revision()) && self.texture.is_some() {
            return false;
        }

        let max_side = self.max_texture_side();
        if canvas.width() > max_side || canvas.height() > max_side {
            if self.uploaded_revision != Some(canvas.revision()) {
                log::error!(
                    "Canvas {}x{} exceeds the maximum texture side {}",
                    canvas.width(),
                    canvas.height(),
                    max_side
                );
            }
            self.texture = None;
            self.uploaded_revision = Some(canvas.revision());
            return false;
        }

        let image = canvas.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_revision = Some(canvas.revision());
        log::debug!("Uploaded canvas revision {}", canvas.revision());
        true
    }

    /// Screen rectangle the canvas occupies when drawn at `origin`
    pub fn canvas_rect(canvas: &Canvas, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, canvas.size())
    }

    /// Paints the canvas 1:1 with its top-left corner at `origin`
    pub fn render(&mut self, painter: &egui::Painter, canvas: &Canvas, origin: Pos2) -> Rect {
        self.sync(canvas);
        let rect = Self::canvas_rect(canvas, origin);
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        rect
    }
}
