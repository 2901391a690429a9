//! Runtime bridge between UI command queue and backend event intake.

use std::{path::Path, thread};

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use wordsearch_core::{Generator, GeneratorSettings, ProcessRunner};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Commands are handled one at a time, so
/// at most one generator process runs at any moment.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: GeneratorSettings,
) -> anyhow::Result<()> {
    thread::Builder::new()
        .name("generator-backend".to_string())
        .spawn(move || run_worker(cmd_rx, ui_tx, settings))
        .context("failed to spawn backend worker thread")?;
    Ok(())
}

fn run_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: GeneratorSettings,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    let generator = Generator::from_settings(&settings);
    tracing::info!(
        binary = %generator.binary().display(),
        timeout_secs = generator.timeout().as_secs(),
        "backend worker ready"
    );
    if let Some(message) = missing_binary_notice(generator.binary()) {
        tracing::warn!("{message}");
        let _ = ui_tx.try_send(UiEvent::Info(message));
    }

    runtime.block_on(async move {
        while let Ok(cmd) = cmd_rx.recv() {
            let event = handle_command(&generator, cmd).await;
            if ui_tx.send(event).is_err() {
                tracing::debug!("ui event receiver dropped; stopping backend worker");
                break;
            }
        }
    });
}

/// Bare program names are resolved through PATH at launch and are not checked.
fn missing_binary_notice(binary: &Path) -> Option<String> {
    let has_dir = binary
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    (has_dir && !binary.exists()).then(|| {
        format!(
            "Generator binary not found at {}; generation will fail until it is installed.",
            binary.display()
        )
    })
}

pub(crate) async fn handle_command<R: ProcessRunner>(
    generator: &Generator<R>,
    cmd: BackendCommand,
) -> UiEvent {
    match cmd {
        BackendCommand::GeneratePdf {
            words,
            output_path,
            options,
            open_after,
        } => {
            tracing::info!(output = %output_path.display(), "backend: generate_pdf");
            match generator.generate(&words, &output_path, &options).await {
                Ok(report) => {
                    tracing::info!(
                        output = %report.output_path.display(),
                        elapsed_ms = report.elapsed.as_millis() as u64,
                        "backend: generate_pdf succeeded"
                    );
                    UiEvent::GenerationSucceeded { report, open_after }
                }
                Err(err) => {
                    tracing::error!("backend: generate_pdf failed: {err}");
                    UiEvent::GenerationFailed(UiError::from_generation_error(
                        UiErrorContext::Generate,
                        &err,
                    ))
                }
            }
        }
        BackendCommand::PreviewGrid { words, options } => {
            tracing::info!("backend: preview_grid");
            match generator.generate_grid(&words, &options).await {
                Ok(grid) => UiEvent::GridPreviewLoaded(grid),
                Err(err) => {
                    tracing::error!("backend: preview_grid failed: {err}");
                    UiEvent::GridPreviewFailed(UiError::from_generation_error(
                        UiErrorContext::Preview,
                        &err,
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, sync::Mutex, time::Duration};

    use async_trait::async_trait;
    use shared::domain::PdfOptions;
    use wordsearch_core::{GenerationError, ProcessOutput};

    use super::*;
    use crate::controller::events::UiErrorCategory;

    struct CannedRunner(Mutex<Option<ProcessOutput>>);

    impl CannedRunner {
        fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
            Self(Mutex::new(Some(ProcessOutput {
                exit_code: Some(exit_code),
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
            })))
        }
    }

    #[async_trait]
    impl ProcessRunner for CannedRunner {
        async fn run(
            &self,
            _program: &Path,
            _args: &[OsString],
            _timeout: Duration,
        ) -> Result<ProcessOutput, GenerationError> {
            Ok(self
                .0
                .lock()
                .expect("lock")
                .take()
                .expect("single invocation"))
        }
    }

    fn generator(runner: CannedRunner) -> Generator<CannedRunner> {
        Generator::with_runner("bin/wordsearch", Duration::from_secs(5), runner)
    }

    #[tokio::test]
    async fn successful_generation_carries_open_flag() {
        let event = handle_command(
            &generator(CannedRunner::new(0, "", "")),
            BackendCommand::GeneratePdf {
                words: "cat\ndog".to_string(),
                output_path: "out.pdf".into(),
                options: PdfOptions::default(),
                open_after: true,
            },
        )
        .await;

        match event {
            UiEvent::GenerationSucceeded { report, open_after } => {
                assert!(open_after);
                assert_eq!(report.output_path, Path::new("out.pdf"));
                assert_eq!(report.word_count, 2);
            }
            _ => panic!("expected GenerationSucceeded"),
        }
    }

    #[tokio::test]
    async fn failed_generation_becomes_ui_error() {
        let event = handle_command(
            &generator(CannedRunner::new(3, "", "boom")),
            BackendCommand::GeneratePdf {
                words: "cat".to_string(),
                output_path: "out.pdf".into(),
                options: PdfOptions::default(),
                open_after: false,
            },
        )
        .await;

        match event {
            UiEvent::GenerationFailed(err) => {
                assert_eq!(err.category(), UiErrorCategory::Process);
                assert_eq!(err.exit_code(), Some(3));
                assert!(err.message().contains("boom"));
            }
            _ => panic!("expected GenerationFailed"),
        }
    }

    #[test]
    fn notices_missing_binary_only_for_explicit_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("wordsearch");
        assert!(missing_binary_notice(&missing)
            .expect("notice")
            .contains("not found"));
        assert!(missing_binary_notice(Path::new("wordsearch")).is_none());

        std::fs::write(&missing, b"").expect("write");
        assert!(missing_binary_notice(&missing).is_none());
    }

    #[tokio::test]
    async fn preview_returns_grid() {
        let event = handle_command(
            &generator(CannedRunner::new(0, r#"[["a","b"]]"#, "")),
            BackendCommand::PreviewGrid {
                words: "ab".to_string(),
                options: PdfOptions::default(),
            },
        )
        .await;

        match event {
            UiEvent::GridPreviewLoaded(grid) => assert_eq!(grid.to_string(), "a b\n"),
            _ => panic!("expected GridPreviewLoaded"),
        }
    }
}
