use egui::Pos2;

/// Whether the primary pointer button is currently drawing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    /// Button held; `last` is where the previous sample landed
    Drawing { last: Pos2 },
}

impl EditorState {
    /// Previous sample position while drawing
    pub fn last_position(&self) -> Option<Pos2> {
        match self {
            Self::Drawing { last } => Some(*last),
            Self::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
