use egui::{Color32, PointerButton, Pos2};

use crate::command::Command;
use crate::config::PaintConfig;
use crate::document::Document;
use crate::error::PaintResult;
use crate::input::InputEvent;
use crate::state::EditorState;
use crate::stroke::{BrushWidth, Segment};
use crate::tools::ToolState;

/// Turns pointer input into segments on the document.
///
/// Owns everything the user can change between strokes: the document, the pen
/// settings and the Idle/Drawing state.
#[derive(Debug)]
pub struct Editor {
    document: Document,
    tools: ToolState,
    state: EditorState,
}

impl Editor {
    pub fn new(document: Document, tools: ToolState) -> Self {
        Self {
            document,
            tools,
            state: EditorState::Idle,
        }
    }

    /// Builds the editor, fitting the configured canvas within `max_side`.
    pub fn from_config(config: &PaintConfig, max_side: u32) -> PaintResult<Self> {
        let (width, height) = config.canvas_size(max_side);
        let mut document = Document::new(width, height, config.background())?;
        document.set_max_side(max_side);
        Ok(Self::new(document, config.tool_state()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Route one input event. Shortcuts are handled by the caller.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => self.pointer_down(location.position),
            InputEvent::PointerDown {
                location,
                button: PointerButton::Secondary,
            } if location.is_in_canvas => self.pick_color_at(location.position),
            InputEvent::PointerMove {
                location,
                held_buttons,
            } => {
                if held_buttons.contains(&PointerButton::Primary) {
                    self.pointer_move(location.position);
                } else {
                    // The release happened somewhere we never heard about
                    self.pointer_up();
                }
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => self.pointer_up(),
            _ => {}
        }
    }

    /// Start a new chain of segments at `pos`.
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.state = EditorState::Drawing { last: pos };
    }

    /// Extend the current chain to `pos`. Does nothing while idle.
    pub fn pointer_move(&mut self, pos: Pos2) {
        let Some(last) = self.state.last_position() else {
            return;
        };
        let segment = Segment::new(last, pos, self.tools.pen_color(), self.tools.brush_width());
        self.document.record(Command::DrawSegment(segment));
        self.state = EditorState::Drawing { last: pos };
    }

    /// Finish the chain so the next press doesn't connect to it.
    pub fn pointer_up(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Use the color under `pos` as the pen color.
    ///
    /// Positions outside the canvas are ignored.
    pub fn pick_color_at(&mut self, pos: Pos2) {
        // Nearest pixel center, with ties going to the pixel on the right/below
        let (x, y) = ((pos.x + 0.5).floor() as i64, (pos.y + 0.5).floor() as i64);
        match self.document.canvas().pixel_at(x, y) {
            Ok(color) => {
                log::debug!("Picked color {:?} at ({}, {})", color, x, y);
                self.tools.set_color(color);
            }
            Err(err) => log::warn!("Ignoring color pick: {}", err),
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tools.set_color(color);
    }

    pub fn swap_colors(&mut self) {
        self.tools.swap_colors();
    }

    pub fn use_eraser(&mut self) {
        self.tools.use_eraser();
    }

    pub fn toggle_eraser(&mut self) {
        self.tools.toggle_eraser();
    }

    pub fn set_brush_width(&mut self, width: BrushWidth) {
        self.tools.set_brush_width(width);
    }

    pub fn undo(&mut self) -> bool {
        self.document.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.document.redo()
    }

    pub fn clear(&mut self) {
        self.document.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        self.document.resize(width, height)
    }

    pub fn set_max_side(&mut self, max_side: u32) {
        self.document.set_max_side(max_side);
    }
}
