use super::Command;

/// Linear undo/redo history.
///
/// Recording a new command discards everything that was undone; there is no
/// branching.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone, oldest first
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly executed command to the history
    pub fn push(&mut self, command: Command) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Move the newest command onto the redo stack.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back onto the undo stack.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
