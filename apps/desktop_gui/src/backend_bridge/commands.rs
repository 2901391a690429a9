//! Backend commands queued from UI to backend worker.

use shared::domain::PdfOptions;
use std::path::PathBuf;

pub enum BackendCommand {
    GeneratePdf {
        words: String,
        output_path: PathBuf,
        options: PdfOptions,
        open_after: bool,
    },
    PreviewGrid {
        words: String,
        options: PdfOptions,
    },
}
