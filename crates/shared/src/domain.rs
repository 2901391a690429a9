use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{GridShapeError, ParsePageSizeError},
    protocol::GridPayload,
};

pub const LETTER_DIMENSIONS_PT: (u32, u32) = (612, 792);
pub const A4_DIMENSIONS_PT: (u32, u32) = (595, 842);

/// Page size handed to the generator. Presets and explicit dimensions are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Custom {
        width: u32,
        height: u32,
    },
}

impl PageSize {
    /// Value passed after `--size`.
    pub fn flag_value(&self) -> String {
        match self {
            PageSize::Letter => "letter".to_string(),
            PageSize::A4 => "a4".to_string(),
            PageSize::Custom { width, height } => format!("{width},{height}"),
        }
    }

    pub fn dimensions_pt(&self) -> (u32, u32) {
        match self {
            PageSize::Letter => LETTER_DIMENSIONS_PT,
            PageSize::A4 => A4_DIMENSIONS_PT,
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PageSize::Custom { .. })
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flag_value())
    }
}

impl FromStr for PageSize {
    type Err = ParsePageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParsePageSizeError::Empty);
        }

        if trimmed.eq_ignore_ascii_case("letter") {
            return Ok(PageSize::Letter);
        }
        if trimmed.eq_ignore_ascii_case("a4") {
            return Ok(PageSize::A4);
        }

        let Some((width, height)) = trimmed.split_once(',') else {
            return Err(ParsePageSizeError::Unrecognized(trimmed.to_string()));
        };
        let parse = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| ParsePageSizeError::InvalidDimension {
                    input: trimmed.to_string(),
                    value: value.trim().to_string(),
                })
        };

        Ok(PageSize::Custom {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

impl TryFrom<String> for PageSize {
    type Error = ParsePageSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(value: PageSize) -> Self {
        value.flag_value()
    }
}

/// Layout parameters for one PDF generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub grid_font_size: u32,
    pub word_bank_font_size: u32,
    pub page_size: PageSize,
    pub margin: u32,
    pub title: String,
    pub title_font_size: u32,
    pub rows: u32,
    pub cols: u32,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            grid_font_size: 16,
            word_bank_font_size: 12,
            page_size: PageSize::Letter,
            margin: 36,
            title: "Wordsearch".to_string(),
            title_font_size: 24,
            rows: 15,
            cols: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Ready,
    Generating,
    Generated,
}

impl AppState {
    pub fn status_text(self) -> &'static str {
        match self {
            AppState::Ready => "Ready.",
            AppState::Generating => "Generating...",
            AppState::Generated => "PDF generation successful.",
        }
    }

    /// Whether a new generation may start from this state.
    pub fn accepts_generation(self) -> bool {
        !matches!(self, AppState::Generating)
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppState::Ready => "ready",
            AppState::Generating => "generating",
            AppState::Generated => "generated",
        };
        f.write_str(name)
    }
}

/// Rectangular puzzle grid returned by the generator in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_payload(payload: GridPayload) -> Result<Self, GridShapeError> {
        let expected = payload.first().map(Vec::len).unwrap_or_default();
        let mut cells = Vec::with_capacity(payload.len());

        for (row, values) in payload.into_iter().enumerate() {
            if values.len() != expected {
                return Err(GridShapeError::Ragged {
                    row,
                    expected,
                    actual: values.len(),
                });
            }

            let mut letters = Vec::with_capacity(values.len());
            for (col, value) in values.into_iter().enumerate() {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => letters.push(letter),
                    _ => return Err(GridShapeError::NotSingleChar { row, col, value }),
                }
            }
            cells.push(letters);
        }

        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line = row
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
