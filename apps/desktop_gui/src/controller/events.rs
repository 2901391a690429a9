//! UI/backend events and error modeling for desktop GUI controller.

use shared::domain::Grid;
use wordsearch_core::{GenerationError, GenerationReport};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    GenerationSucceeded {
        report: GenerationReport,
        open_after: bool,
    },
    GenerationFailed(UiError),
    GridPreviewLoaded(Grid),
    GridPreviewFailed(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Launch,
    Process,
    Timeout,
    Output,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Generate,
    Preview,
    OpenOutput,
    General,
}

/// Short remedy appended to banners where one exists.
pub fn failure_hint(category: UiErrorCategory, context: UiErrorContext) -> Option<&'static str> {
    match category {
        UiErrorCategory::Launch if context == UiErrorContext::OpenOutput => {
            Some("No default PDF viewer could be started; open the file manually.")
        }
        UiErrorCategory::Launch => Some(
            "Check that the generator binary exists and is executable (set WORDSEARCH_BIN or --generator).",
        ),
        UiErrorCategory::Timeout => {
            Some("The generator did not finish in time; try fewer words or a larger grid.")
        }
        UiErrorCategory::Validation => Some("Enter one word per line."),
        UiErrorCategory::Process | UiErrorCategory::Output | UiErrorCategory::Unknown => None,
    }
}

/// Phrases this crate and the generator library put in free-form messages.
const MESSAGE_CATEGORIES: &[(&str, UiErrorCategory)] = &[
    ("failed to launch generator", UiErrorCategory::Launch),
    ("failed to open pdf viewer", UiErrorCategory::Launch),
    ("did not finish within", UiErrorCategory::Timeout),
    ("nonzero exit code", UiErrorCategory::Process),
    ("command processor disconnected", UiErrorCategory::Process),
    ("command queue is full", UiErrorCategory::Process),
    ("generator output is", UiErrorCategory::Output),
    ("word list is empty", UiErrorCategory::Validation),
    ("no output path set", UiErrorCategory::Validation),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
    exit_code: Option<i32>,
}

impl UiError {
    pub fn from_generation_error(context: UiErrorContext, err: &GenerationError) -> Self {
        let category = match err {
            GenerationError::EmptyWordList => UiErrorCategory::Validation,
            GenerationError::Launch { .. } => UiErrorCategory::Launch,
            GenerationError::TimedOut { .. } => UiErrorCategory::Timeout,
            GenerationError::NonZeroExit { .. } | GenerationError::Wait(_) => {
                UiErrorCategory::Process
            }
            GenerationError::InvalidUtf8(_) | GenerationError::MalformedOutput { .. } => {
                UiErrorCategory::Output
            }
            GenerationError::WordListFile(_) => UiErrorCategory::Unknown,
        };

        Self {
            category,
            context,
            message: err.detail(),
            exit_code: err.exit_code(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = MESSAGE_CATEGORIES
            .iter()
            .find(|(phrase, _)| message_lower.contains(phrase))
            .map_or(UiErrorCategory::Unknown, |(_, category)| *category);

        Self {
            category,
            context,
            message,
            exit_code: None,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Banner text: the message plus a remedy when one is known.
    pub fn banner_text(&self) -> String {
        match failure_hint(self.category, self.context) {
            Some(hint) => format!("{} {hint}", self.message),
            None => self.message.clone(),
        }
    }
}
