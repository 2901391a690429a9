//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let (cmd_name, context) = match &cmd {
        BackendCommand::GeneratePdf { .. } => ("generate_pdf", UiErrorContext::Generate),
        BackendCommand::PreviewGrid { .. } => ("preview_grid", UiErrorContext::Preview),
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            context,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::from_message(
            context,
            "Backend command processor disconnected (possible startup/runtime failure); restart the app",
        )),
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::PdfOptions;

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn preview() -> BackendCommand {
        BackendCommand::PreviewGrid {
            words: "cat".to_string(),
            options: PdfOptions::default(),
        }
    }

    #[test]
    fn queues_command_when_worker_is_listening() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, preview()).expect("queued");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::PreviewGrid { .. })));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, preview()).expect("first fits");
        let err = dispatch_backend_command(&tx, preview()).expect_err("queue full");
        assert_eq!(err.context(), UiErrorContext::Preview);
        assert!(err.message().contains("queue is full"));
    }

    #[test]
    fn reports_disconnected_worker() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, preview()).expect_err("disconnected");
        assert_eq!(err.category(), UiErrorCategory::Process);
    }
}
