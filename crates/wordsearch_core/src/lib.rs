use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use shared::domain::{Grid, PdfOptions};
use tracing::{error, info, warn};

pub mod command_line;
pub mod config;
pub mod error;
pub mod output;
pub mod platform;
pub mod process;
pub mod word_list;

pub use command_line::OutputMode;
pub use config::GeneratorSettings;
pub use error::GenerationError;
pub use process::{ProcessOutput, ProcessRunner, TokioProcessRunner};

use command_line::{build_args, display_args};
use word_list::WordListFile;

/// Result of a successful PDF generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub word_count: usize,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

/// Drives the external wordsearch binary.
pub struct Generator<R = TokioProcessRunner> {
    binary: PathBuf,
    timeout: Duration,
    runner: R,
}

impl Generator<TokioProcessRunner> {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self::with_runner(binary, timeout, TokioProcessRunner)
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.binary_path.clone(), settings.timeout())
    }
}

impl<R: ProcessRunner> Generator<R> {
    pub fn with_runner(binary: impl Into<PathBuf>, timeout: Duration, runner: R) -> Self {
        Self {
            binary: binary.into(),
            timeout,
            runner,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Renders `words` into a PDF at `output_path`.
    pub async fn generate(
        &self,
        words: &str,
        output_path: &Path,
        options: &PdfOptions,
    ) -> Result<GenerationReport, GenerationError> {
        let started = Instant::now();
        let mode = OutputMode::Pdf {
            output_path: output_path.to_path_buf(),
        };
        let (word_count, output) = self.invoke(words, &mode, options).await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !stdout.trim().is_empty() {
            info!(stdout = %stdout.trim(), "generator output");
        }

        Ok(GenerationReport {
            output_path: output_path.to_path_buf(),
            word_count,
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            elapsed: started.elapsed(),
        })
    }

    /// Asks the generator for the grid only (`--json`).
    pub async fn generate_grid(
        &self,
        words: &str,
        options: &PdfOptions,
    ) -> Result<Grid, GenerationError> {
        let (_, output) = self.invoke(words, &OutputMode::Json, options).await?;
        output::decode_grid(output.stdout)
    }

    async fn invoke(
        &self,
        words: &str,
        mode: &OutputMode,
        options: &PdfOptions,
    ) -> Result<(usize, ProcessOutput), GenerationError> {
        // Lives until the process has exited; dropping it deletes the file.
        let word_list = WordListFile::create(words)?;
        let args = build_args(word_list.path(), mode, options);

        info!(
            binary = %self.binary.display(),
            words = word_list.word_count(),
            "launching generator: {}",
            display_args(&args)
        );

        let output = self
            .runner
            .run(&self.binary, &args, self.timeout)
            .await
            .inspect_err(|err| error!("generator failed to run: {err}"))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.success() {
            error!(
                exit_code = ?output.exit_code,
                stderr = %stderr.trim(),
                "generator reported failure"
            );
            return Err(GenerationError::NonZeroExit {
                code: output.exit_code,
                stderr: stderr.into_owned(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            });
        }
        if !stderr.trim().is_empty() {
            warn!(stderr = %stderr.trim(), "generator wrote to stderr");
        }

        Ok((word_list.word_count(), output))
    }
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
