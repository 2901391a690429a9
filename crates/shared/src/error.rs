use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePageSizeError {
    #[error("page size is empty")]
    Empty,
    #[error("unknown page size '{0}': expected letter, a4, or WIDTH,HEIGHT")]
    Unrecognized(String),
    #[error("invalid page dimension '{value}' in '{input}'")]
    InvalidDimension { input: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridShapeError {
    #[error("cell at row {row}, column {col} is {value:?}; expected a single character")]
    NotSingleChar {
        row: usize,
        col: usize,
        value: String,
    },
    #[error("row {row} has {actual} cells; expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
