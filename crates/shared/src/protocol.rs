//! Command-line vocabulary of the external wordsearch generator.

use crate::domain::PdfOptions;

pub const OUTPUT_FLAG: &str = "-o";
pub const JSON_FLAG: &str = "--json";

/// Stdout shape in `--json` mode: rows of single-character strings.
pub type GridPayload = Vec<Vec<String>>;

/// Value-taking option flags understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFlag {
    GridFontSize,
    WordBankFontSize,
    Size,
    Margin,
    Title,
    TitleFontSize,
    Rows,
    Cols,
}

impl OptionFlag {
    pub const ALL: [OptionFlag; 8] = [
        OptionFlag::GridFontSize,
        OptionFlag::WordBankFontSize,
        OptionFlag::Size,
        OptionFlag::Margin,
        OptionFlag::Title,
        OptionFlag::TitleFontSize,
        OptionFlag::Rows,
        OptionFlag::Cols,
    ];

    /// Flags that still matter when only the grid is requested.
    pub const GRID_ONLY: [OptionFlag; 2] = [OptionFlag::Rows, OptionFlag::Cols];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionFlag::GridFontSize => "--grid-font-size",
            OptionFlag::WordBankFontSize => "--word-bank-font-size",
            OptionFlag::Size => "--size",
            OptionFlag::Margin => "--margin",
            OptionFlag::Title => "--title",
            OptionFlag::TitleFontSize => "--title-font-size",
            OptionFlag::Rows => "--rows",
            OptionFlag::Cols => "--cols",
        }
    }

    pub fn value(self, options: &PdfOptions) -> String {
        match self {
            OptionFlag::GridFontSize => options.grid_font_size.to_string(),
            OptionFlag::WordBankFontSize => options.word_bank_font_size.to_string(),
            OptionFlag::Size => options.page_size.flag_value(),
            OptionFlag::Margin => options.margin.to_string(),
            OptionFlag::Title => options.title.clone(),
            OptionFlag::TitleFontSize => options.title_font_size.to_string(),
            OptionFlag::Rows => options.rows.to_string(),
            OptionFlag::Cols => options.cols.to_string(),
        }
    }
}
