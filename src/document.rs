use std::path::Path;

use egui::Color32;

use crate::canvas::Canvas;
use crate::command::{Command, CommandHistory};
use crate::error::{PaintError, PaintResult};

/// The canvas together with the history that produced it.
///
/// Every visible pixel change goes through [`Document::record`], so the raster
/// can always be rebuilt by replaying the undo stack onto a blank canvas.
#[derive(Debug)]
pub struct Document {
    canvas: Canvas,
    history: CommandHistory,
    /// Largest width or height a resize may ask for
    max_side: u32,
}

impl Document {
    pub fn new(width: u32, height: u32, background: Color32) -> PaintResult<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height, background)?,
            history: CommandHistory::new(),
            max_side: u32::MAX,
        })
    }

    /// Limit later resizes to what the display can show as one texture.
    pub fn set_max_side(&mut self, max_side: u32) {
        self.max_side = max_side;
    }

    pub fn max_side(&self) -> u32 {
        self.max_side
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Draw a command and remember it. Anything previously undone is dropped.
    pub fn record(&mut self, command: Command) {
        command.apply(&mut self.canvas);
        self.history.push(command);
    }

    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.replay();
        true
    }

    /// Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.replay();
        true
    }

    /// Rebuild the raster from scratch out of the undo stack.
    pub fn replay(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        if let Err(err) = self.canvas.clear(width, height, self.canvas.background()) {
            // Current dimensions are always valid
            log::error!("Failed to reset canvas before replay: {}", err);
            return;
        }
        for command in self.history.undo_stack() {
            command.apply(&mut self.canvas);
        }
        log::debug!("Replayed {} commands", self.history.undo_stack().len());
    }

    /// Forget both the undo and the redo stack, leaving the pixels alone.
    pub fn reset_all(&mut self) {
        self.history.clear();
    }

    /// Blank the canvas and start a fresh history.
    pub fn clear(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        self.reallocate(width, height)
            .unwrap_or_else(|err| log::error!("Failed to clear canvas: {}", err));
    }

    /// Reallocate the canvas at a new size. Implies [`Document::clear`].
    ///
    /// Invalid dimensions, including sides above [`Document::max_side`],
    /// leave the document untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        if width > self.max_side || height > self.max_side {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        self.reallocate(width, height)?;
        log::info!("Canvas resized to {}x{}", width, height);
        Ok(())
    }

    fn reallocate(&mut self, width: u32, height: u32) -> PaintResult<()> {
        self.canvas.clear(width, height, self.canvas.background())?;
        self.reset_all();
        Ok(())
    }

    pub fn export(&self, path: &Path) -> PaintResult<()> {
        self.canvas.export(path)
    }

    pub fn history_len(&self) -> usize {
        self.history.undo_stack().len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_stack().len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
