use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::PaintError;

/// Native dialogs used by the save flow
pub trait SaveDialogs {
    /// Ask for a destination; `None` if the user cancelled
    fn choose_save_path(&mut self) -> Option<PathBuf>;

    /// Acknowledge a successful save
    fn notify_saved(&mut self, path: &Path);

    /// Report a failed save
    fn alert_failed(&mut self, path: &Path, error: &PaintError);
}

/// What happened when the user asked to save
#[derive(Debug)]
pub enum SaveOutcome {
    Cancelled,
    Saved(PathBuf),
    Failed(PathBuf, PaintError),
}

/// Appends `.png` unless the path already ends with it (in any case).
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(".png");
    PathBuf::from(raw)
}

/// Ask for a path, export the canvas there and tell the user how it went.
pub fn save_document(document: &Document, dialogs: &mut dyn SaveDialogs) -> SaveOutcome {
    let Some(path) = dialogs.choose_save_path() else {
        log::debug!("Save cancelled");
        return SaveOutcome::Cancelled;
    };
    let path = with_png_extension(path);

    match document.export(&path) {
        Ok(()) => {
            dialogs.notify_saved(&path);
            SaveOutcome::Saved(path)
        }
        Err(err) => {
            log::error!("Failed to save {}: {}", path.display(), err);
            dialogs.alert_failed(&path, &err);
            SaveOutcome::Failed(path, err)
        }
    }
}

/// `rfd` backed dialogs
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl SaveDialogs for NativeDialogs {
    fn choose_save_path(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("PNG files", &["png"])
            .set_file_name("drawing.png")
            .save_file()
    }

    fn notify_saved(&mut self, path: &Path) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Information")
            .set_description(format!("Image saved to {}", path.display()))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn alert_failed(&mut self, path: &Path, error: &PaintError) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Save failed")
            .set_description(format!("Could not save {}: {}", path.display(), error))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
