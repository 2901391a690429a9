use std::{io, path::PathBuf, time::Duration};

use shared::error::GridShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("word list is empty; enter at least one word")]
    EmptyWordList,
    #[error("failed to write temporary word list: {0}")]
    WordListFile(#[source] io::Error),
    #[error("failed to launch generator '{}': {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed while waiting for generator output: {0}")]
    Wait(#[source] io::Error),
    #[error("generator did not finish within {timeout:?}")]
    TimedOut { timeout: Duration },
    #[error("generator {}", describe_exit(*code))]
    NonZeroExit {
        code: Option<i32>,
        stderr: String,
        stdout: String,
    },
    #[error("generator output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("generator output is malformed: {reason}")]
    MalformedOutput { reason: String },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with nonzero exit code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

impl GenerationError {
    /// User-facing diagnostic. For failed runs this includes the trimmed
    /// stderr, or stdout when stderr is empty.
    pub fn detail(&self) -> String {
        match self {
            GenerationError::NonZeroExit {
                stderr, stdout, ..
            } => {
                let diagnostic = if stderr.trim().is_empty() {
                    stdout.trim()
                } else {
                    stderr.trim()
                };
                if diagnostic.is_empty() {
                    self.to_string()
                } else {
                    format!("{self}: {diagnostic}")
                }
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GenerationError::NonZeroExit { code, .. } => *code,
            _ => None,
        }
    }

    pub fn is_launch_failure(&self) -> bool {
        matches!(self, GenerationError::Launch { .. })
    }
}

impl From<GridShapeError> for GenerationError {
    fn from(value: GridShapeError) -> Self {
        GenerationError::MalformedOutput {
            reason: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(value: serde_json::Error) -> Self {
        GenerationError::MalformedOutput {
            reason: value.to_string(),
        }
    }
}
