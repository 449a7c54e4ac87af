use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect, Vec2};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas pixel coordinates
    pub position: Pos2,
    /// Whether this position is on the visible part of the canvas
    pub is_in_canvas: bool,
}

/// Editor actions reachable from the toolbar and the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Save,
    ChooseColor,
    Undo,
    Redo,
    ClearCanvas,
    ToggleEraser,
    ResizeCanvas,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::ClearCanvas,
        Action::ChooseColor,
        Action::ToggleEraser,
        Action::Save,
        Action::Undo,
        Action::Redo,
        Action::ResizeCanvas,
    ];

    /// Maps a Ctrl (⌘ on macOS) key combination to its action
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.command || modifiers.alt || modifiers.shift {
            return None;
        }
        match key {
            Key::S => Some(Action::Save),
            Key::C => Some(Action::ChooseColor),
            Key::Z => Some(Action::Undo),
            Key::Y => Some(Action::Redo),
            Key::Q => Some(Action::ClearCanvas),
            Key::E => Some(Action::ToggleEraser),
            Key::R => Some(Action::ResizeCanvas),
            _ => None,
        }
    }

    pub fn key(self) -> Key {
        match self {
            Action::Save => Key::S,
            Action::ChooseColor => Key::C,
            Action::Undo => Key::Z,
            Action::Redo => Key::Y,
            Action::ClearCanvas => Key::Q,
            Action::ToggleEraser => Key::E,
            Action::ResizeCanvas => Key::R,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Save => "Save",
            Action::ChooseColor => "Choose color",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::ClearCanvas => "Clear",
            Action::ToggleEraser => "Eraser",
            Action::ResizeCanvas => "Resize",
        }
    }

    /// Text for a toolbar button, e.g. "Save\nCtrl+S"
    pub fn button_text(self) -> String {
        format!("{}\nCtrl+{}", self.label(), self.key().name())
    }
}

/// Represents different types of input events that can occur in the application
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// A keyboard shortcut was pressed
    Shortcut(Action),
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// False while a popup or window covers the pointer
    canvas_hovered: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_hovered: true,
        }
    }

    /// Update the on-screen canvas rectangle and whether egui routes the
    /// pointer to it this frame
    pub fn set_canvas(&mut self, rect: Rect, hovered: bool) {
        self.canvas_rect = rect;
        self.canvas_hovered = hovered;
    }

    /// Converts a screen position into canvas pixel coordinates.
    ///
    /// Pixel `i` is shown over `[i, i + 1)` on screen, so its center maps to `i`.
    pub fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        let offset = screen_pos - self.canvas_rect.min - Vec2::splat(0.5);
        InputLocation {
            position: offset.to_pos2(),
            is_in_canvas: self.canvas_hovered && self.canvas_rect.contains(screen_pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.collect(input))
    }

    fn collect(&mut self, input: &egui::InputState) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let hover_pos = input.pointer.hover_pos();

        if let Some(pos) = hover_pos {
            if Some(pos) != self.last_pointer_pos {
                let held_buttons = BUTTONS
                    .into_iter()
                    .filter(|button| input.pointer.button_down(*button))
                    .collect();
                events.push(InputEvent::PointerMove {
                    location: self.make_location(pos),
                    held_buttons,
                });
            }
        }
        self.last_pointer_pos = hover_pos;

        // Presses and releases reported off-window still have to end a stroke
        let button_pos = hover_pos.or_else(|| input.pointer.latest_pos());
        if let Some(pos) = button_pos {
            for button in BUTTONS {
                if input.pointer.button_pressed(button) {
                    events.push(InputEvent::PointerDown {
                        location: self.make_location(pos),
                        button,
                    });
                }
                if input.pointer.button_released(button) {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                        button,
                    });
                }
            }
        }

        for event in &input.raw.events {
            let action = match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => Action::from_key(*key, *modifiers),
                // Ctrl+C reaches us as a clipboard event rather than a key press
                egui::Event::Copy => Some(Action::ChooseColor),
                _ => None,
            };
            if let Some(action) = action {
                events.push(InputEvent::Shortcut(action));
            }
        }

        events
    }
}
