use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Grid, PdfOptions};
use wordsearch_core::{platform, GeneratorSettings};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::AppShell;
use crate::ui::options_dialog::{EditorOutcome, OptionsEditor};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub output_path: PathBuf,
    pub open_after_generate: bool,
    pub options: PdfOptions,
    pub generator_label: String,
}

impl StartupConfig {
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self {
            output_path: settings.output_path.clone(),
            open_after_generate: settings.open_after_generate,
            options: settings.pdf.clone(),
            generator_label: settings.binary_path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
    Info,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    shell: AppShell,
    words: String,
    output_path: String,
    open_after_generate: bool,
    generator_label: String,

    status: String,
    status_banner: Option<StatusBanner>,

    options_editor: Option<OptionsEditor>,
    grid_preview: Option<Grid>,
}

impl DesktopGuiApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let shell = AppShell::new(startup.options);
        let status = shell.state().status_text().to_string();
        Self {
            cmd_tx,
            ui_rx,
            shell,
            words: String::new(),
            output_path: startup.output_path.display().to_string(),
            open_after_generate: startup.open_after_generate,
            generator_label: startup.generator_label,
            status,
            status_banner: None,
            options_editor: None,
            grid_preview: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
        self.sync_status();
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status_banner = Some(StatusBanner {
                    severity: StatusBannerSeverity::Info,
                    message,
                });
            }
            UiEvent::Error(err) => self.show_error(&err),
            UiEvent::GenerationSucceeded { report, open_after } => {
                tracing::info!(
                    output = %report.output_path.display(),
                    words = report.word_count,
                    "pdf ready"
                );
                self.shell.finish_generation(Ok(report.output_path.clone()));
                if self.shell.generated_output().is_err() {
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Info,
                        message: format!(
                            "Wrote {}, but the inputs changed while generating. \
                             Generate again to update it.",
                            report.output_path.display()
                        ),
                    });
                } else if open_after {
                    self.open_output(&report.output_path);
                }
            }
            UiEvent::GenerationFailed(err) => {
                self.show_error(&err);
                self.shell.finish_generation(Err(err));
            }
            UiEvent::GridPreviewLoaded(grid) => {
                self.shell.finish_preview(Ok(()));
                self.grid_preview = Some(grid);
            }
            UiEvent::GridPreviewFailed(err) => {
                self.show_error(&err);
                self.shell.finish_preview(Err(err));
            }
        }
    }

    /// Maps queued state transitions onto the status label.
    fn sync_status(&mut self) {
        for change in self.shell.drain_notifications() {
            tracing::debug!(from = %change.from, to = %change.to, "status label updated");
            self.status = change.to.status_text().to_string();
        }
    }

    fn show_error(&mut self, err: &UiError) {
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: err.banner_text(),
        });
    }

    fn selected_output_path(&self) -> Option<PathBuf> {
        let trimmed = self.output_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    fn request_generation(&mut self) {
        let Some(output_path) = self.selected_output_path() else {
            self.show_error(&UiError::from_message(
                UiErrorContext::Generate,
                "No output path set; choose where to save the PDF.",
            ));
            return;
        };

        if let Err(err) = self.shell.begin_generation() {
            tracing::debug!("generate ignored: {err}");
            return;
        }
        self.status_banner = None;

        let cmd = BackendCommand::GeneratePdf {
            words: self.words.clone(),
            output_path,
            options: self.shell.options().clone(),
            open_after: self.open_after_generate,
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.show_error(&err);
            self.shell.finish_generation(Err(err));
        }
        self.sync_status();
    }

    fn request_preview(&mut self) {
        if let Err(err) = self.shell.begin_preview() {
            tracing::debug!("preview ignored: {err}");
            return;
        }
        self.status_banner = None;

        let cmd = BackendCommand::PreviewGrid {
            words: self.words.clone(),
            options: self.shell.options().clone(),
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.show_error(&err);
            self.shell.finish_preview(Err(err));
        }
    }

    fn open_output(&mut self, path: &Path) {
        if let Err(err) = platform::open_with_default_viewer(path) {
            self.show_error(&UiError::from_message(
                UiErrorContext::OpenOutput,
                format!("Failed to open PDF viewer: {err}"),
            ));
        }
    }

    fn reopen_generated(&mut self) {
        match self.shell.generated_output() {
            Ok(path) => {
                let path = path.to_path_buf();
                self.open_output(&path);
            }
            Err(err) => tracing::debug!("open ignored: {err}"),
        }
    }

    fn apply_editor_outcome(&mut self, outcome: EditorOutcome) {
        match outcome {
            EditorOutcome::Accepted(options) => {
                tracing::debug!(?options, "pdf options updated");
                self.shell.set_options(options);
                self.sync_status();
            }
            EditorOutcome::Cancelled => tracing::debug!("pdf options dialog cancelled"),
        }
    }

    fn on_inputs_edited(&mut self) {
        self.shell.invalidate_output();
        self.sync_status();
    }

    fn pick_output_path(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("wordsearch.pdf");
        if let Some(current) = self.selected_output_path() {
            if let Some(dir) = current.parent().filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            if let Some(name) = current.file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }
        }

        if let Some(path) = dialog.save_file() {
            self.output_path = path.display().to_string();
            self.on_inputs_edited();
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
                StatusBannerSeverity::Info => (
                    egui::Color32::from_rgb(46, 72, 104),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(92, 132, 176)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                                self.shell.clear_failure();
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.shell.is_busy() {
                    ui.spinner();
                }
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Generator: {}", self.generator_label))
                            .small()
                            .weak(),
                    );
                });
            });
        });
    }

    fn show_main_panel(&mut self, ctx: &egui::Context) {
        let modal_open = self.options_editor.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.show_status_banner(ui);

                ui.label("Word List:");
                let actions_height = 90.0;
                let words_height = (ui.available_height() - actions_height).max(120.0);
                egui::ScrollArea::vertical()
                    .max_height(words_height)
                    .show(ui, |ui| {
                        let response = ui.add_sized(
                            [ui.available_width(), words_height],
                            egui::TextEdit::multiline(&mut self.words)
                                .hint_text("One word per line"),
                        );
                        if response.changed() {
                            self.on_inputs_edited();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Save to:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.output_path)
                            .desired_width(ui.available_width() - 90.0),
                    );
                    if response.changed() {
                        self.on_inputs_edited();
                    }
                    if ui.button("Save as...").clicked() {
                        self.pick_output_path();
                    }
                });

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("PDF options...").clicked() {
                        self.options_editor = Some(OptionsEditor::open(self.shell.options()));
                    }
                    ui.checkbox(&mut self.open_after_generate, "Open after generating");

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let generate = ui
                            .add_enabled(self.shell.can_generate(), egui::Button::new("Generate"));
                        if generate.clicked() {
                            self.request_generation();
                        }

                        let can_open = self.shell.generated_output().is_ok();
                        if ui.add_enabled(can_open, egui::Button::new("Open PDF")).clicked() {
                            self.reopen_generated();
                        }

                        if ui
                            .add_enabled(!self.shell.is_busy(), egui::Button::new("Show grid"))
                            .clicked()
                        {
                            self.request_preview();
                        }
                    });
                });
            });
        });
    }

    fn show_grid_preview(&mut self, ctx: &egui::Context) {
        let Some(grid) = &self.grid_preview else {
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Grid preview ({}x{})", grid.rows(), grid.cols()))
            .open(&mut open)
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    for row in grid.iter_rows() {
                        let line: Vec<String> = row.iter().map(char::to_string).collect();
                        ui.label(egui::RichText::new(line.join(" ")).monospace());
                    }
                });
            });

        if !open {
            self.grid_preview = None;
        }
    }

    fn show_options_editor(&mut self, ctx: &egui::Context) {
        let Some(editor) = self.options_editor.as_mut() else {
            return;
        };
        if let Some(outcome) = editor.show(ctx) {
            self.options_editor = None;
            self.apply_editor_outcome(outcome);
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_status_bar(ctx);
        self.show_main_panel(ctx);
        self.show_grid_preview(ctx);
        self.show_options_editor(ctx);

        if self.shell.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
