//! UI layer for desktop GUI: main window and the PDF options dialog.

pub mod app;
pub mod options_dialog;

pub use app::{DesktopGuiApp, StartupConfig};
