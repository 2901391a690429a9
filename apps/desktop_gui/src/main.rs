use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{DesktopGuiApp, StartupConfig};
use wordsearch_core::config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "wordsearch-gui", about = "Word search PDF generator")]
struct Args {
    /// Settings file (defaults to ./wordsearch.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to the wordsearch generator binary.
    #[arg(long)]
    generator: Option<PathBuf>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Initial output PDF path.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref());
    if let Some(generator) = args.generator {
        settings.binary_path = generator;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        settings.timeout_secs = timeout_secs;
    }
    if let Some(output) = args.output {
        settings.output_path = output;
    }
    let startup = StartupConfig::from_settings(&settings);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordsearch Generator")
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Wordsearch Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("desktop window failed")
}
