#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::{Command, CommandHistory};
pub use config::PaintConfig;
pub use document::Document;
pub use editor::Editor;
pub use error::{PaintError, PaintResult};
pub use input::{Action, InputEvent, InputLocation};
pub use renderer::Renderer;
pub use state::EditorState;
pub use stroke::{BrushWidth, Segment};
pub use tools::ToolState;
