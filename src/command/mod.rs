mod history;

use crate::canvas::Canvas;
use crate::stroke::Segment;

pub use history::CommandHistory;

/// Represents actions that can be undone/redone in the drawing application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Draws one straight line segment onto the canvas
    DrawSegment(Segment),
    // Future stroke kinds can be added here as needed
}

impl Command {
    /// Rasterizes the command onto the canvas
    pub fn apply(&self, canvas: &mut Canvas) {
        match self {
            Command::DrawSegment(segment) => canvas.draw_segment(segment),
        }
    }
}
