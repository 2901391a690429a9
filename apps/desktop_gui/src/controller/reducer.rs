//! Application shell state: the generation state machine and the options it
//! hands to each request.

use std::path::{Path, PathBuf};

use shared::domain::{AppState, PdfOptions};
use thiserror::Error;

use crate::controller::events::UiError;

/// Emitted on every state transition; the main window maps `to` onto its
/// status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    pub from: AppState,
    pub to: AppState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("a PDF is already being generated")]
    GenerationInFlight,
    #[error("a grid preview is still running")]
    PreviewInFlight,
    #[error("no PDF has been generated yet")]
    NothingGenerated,
}

#[derive(Debug, Default)]
pub struct AppShell {
    state: AppState,
    options: PdfOptions,
    preview_pending: bool,
    inputs_changed_in_flight: bool,
    last_output: Option<PathBuf>,
    last_failure: Option<UiError>,
    notifications: Vec<StateChanged>,
}

impl AppShell {
    pub fn new(options: PdfOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn options(&self) -> &PdfOptions {
        &self.options
    }

    pub fn is_busy(&self) -> bool {
        self.state == AppState::Generating || self.preview_pending
    }

    pub fn can_generate(&self) -> bool {
        self.state.accepts_generation() && !self.preview_pending
    }

    pub fn last_failure(&self) -> Option<&UiError> {
        self.last_failure.as_ref()
    }

    pub fn clear_failure(&mut self) {
        self.last_failure = None;
    }

    /// Path of the PDF produced by the latest successful run.
    pub fn generated_output(&self) -> Result<&Path, ShellError> {
        match (&self.last_output, self.state) {
            (Some(path), AppState::Generated) => Ok(path),
            _ => Err(ShellError::NothingGenerated),
        }
    }

    /// Replaces the options used for later requests. A finished PDF no longer
    /// matches them, so Generated falls back to Ready.
    pub fn set_options(&mut self, options: PdfOptions) {
        if options != self.options {
            self.options = options;
            self.invalidate_output();
        }
    }

    /// Called when the inputs of the last run change. During a run the edit is
    /// remembered so the result is not reported as current.
    pub fn invalidate_output(&mut self) {
        match self.state {
            AppState::Generated => self.transition(AppState::Ready),
            AppState::Generating => self.inputs_changed_in_flight = true,
            AppState::Ready => {}
        }
    }

    pub fn begin_generation(&mut self) -> Result<(), ShellError> {
        if self.state == AppState::Generating {
            return Err(ShellError::GenerationInFlight);
        }
        if self.preview_pending {
            return Err(ShellError::PreviewInFlight);
        }

        self.last_failure = None;
        self.inputs_changed_in_flight = false;
        self.transition(AppState::Generating);
        Ok(())
    }

    pub fn finish_generation(&mut self, outcome: Result<PathBuf, UiError>) {
        if self.state != AppState::Generating {
            tracing::warn!(
                state = %self.state,
                "ignoring generation result outside of generating state"
            );
            return;
        }

        match outcome {
            Ok(_) if self.inputs_changed_in_flight => {
                tracing::info!("inputs changed during generation; pdf is out of date");
                self.last_output = None;
                self.transition(AppState::Ready);
            }
            Ok(output_path) => {
                self.last_output = Some(output_path);
                self.transition(AppState::Generated);
            }
            Err(err) => {
                tracing::error!(
                    exit_code = ?err.exit_code(),
                    "generation failed: {}",
                    err.message()
                );
                self.last_failure = Some(err);
                self.transition(AppState::Ready);
            }
        }
    }

    pub fn begin_preview(&mut self) -> Result<(), ShellError> {
        if self.state == AppState::Generating {
            return Err(ShellError::GenerationInFlight);
        }
        if self.preview_pending {
            return Err(ShellError::PreviewInFlight);
        }

        self.last_failure = None;
        self.preview_pending = true;
        Ok(())
    }

    pub fn finish_preview(&mut self, outcome: Result<(), UiError>) {
        self.preview_pending = false;
        if let Err(err) = outcome {
            self.last_failure = Some(err);
        }
    }

    pub fn drain_notifications(&mut self) -> Vec<StateChanged> {
        std::mem::take(&mut self.notifications)
    }

    fn transition(&mut self, to: AppState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        tracing::debug!(%from, %to, "app state changed");
        self.notifications.push(StateChanged { from, to });
    }
}
