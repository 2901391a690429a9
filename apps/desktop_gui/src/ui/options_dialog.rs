//! Modal "PDF Options" dialog. Edits a draft copy; the caller's options only
//! change when the dialog is accepted.

use eframe::egui;
use shared::domain::{PageSize, PdfOptions};

pub const MAX_DIMENSION: u32 = 1000;
pub const MAX_FONT_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSizeChoice {
    Letter,
    A4,
    Other,
}

impl PageSizeChoice {
    fn label(self) -> &'static str {
        match self {
            PageSizeChoice::Letter => "Letter",
            PageSizeChoice::A4 => "A4",
            PageSizeChoice::Other => "Other:",
        }
    }
}

/// Control values of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsDraft {
    pub rows: u32,
    pub cols: u32,
    pub margin: u32,
    pub page_choice: PageSizeChoice,
    pub page_width: u32,
    pub page_height: u32,
    pub title: String,
    pub title_font_size: u32,
    pub grid_font_size: u32,
    pub word_bank_font_size: u32,
}

impl OptionsDraft {
    pub fn from_options(options: &PdfOptions) -> Self {
        let page_choice = match options.page_size {
            PageSize::Letter => PageSizeChoice::Letter,
            PageSize::A4 => PageSizeChoice::A4,
            PageSize::Custom { .. } => PageSizeChoice::Other,
        };
        let (page_width, page_height) = options.page_size.dimensions_pt();

        Self {
            rows: options.rows,
            cols: options.cols,
            margin: options.margin,
            page_choice,
            page_width,
            page_height,
            title: options.title.clone(),
            title_font_size: options.title_font_size,
            grid_font_size: options.grid_font_size,
            word_bank_font_size: options.word_bank_font_size,
        }
    }

    /// Width/height inputs are only editable for explicit dimensions.
    pub fn size_inputs_enabled(&self) -> bool {
        self.page_choice == PageSizeChoice::Other
    }

    pub fn to_options(&self) -> PdfOptions {
        let page_size = match self.page_choice {
            PageSizeChoice::Letter => PageSize::Letter,
            PageSizeChoice::A4 => PageSize::A4,
            PageSizeChoice::Other => PageSize::Custom {
                width: self.page_width.min(MAX_DIMENSION),
                height: self.page_height.min(MAX_DIMENSION),
            },
        };

        PdfOptions {
            grid_font_size: self.grid_font_size.min(MAX_FONT_SIZE),
            word_bank_font_size: self.word_bank_font_size.min(MAX_FONT_SIZE),
            page_size,
            margin: self.margin.min(MAX_DIMENSION),
            title: self.title.clone(),
            title_font_size: self.title_font_size.min(MAX_FONT_SIZE),
            rows: self.rows.min(MAX_DIMENSION),
            cols: self.cols.min(MAX_DIMENSION),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Accepted(PdfOptions),
    Cancelled,
}

pub struct OptionsEditor {
    draft: OptionsDraft,
}

impl OptionsEditor {
    pub fn open(current: &PdfOptions) -> Self {
        Self {
            draft: OptionsDraft::from_options(current),
        }
    }

    /// Draws the dialog. Returns the outcome on the frame the user closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<EditorOutcome> {
        let mut outcome = None;

        egui::Window::new("PDF Options")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                self.show_grid_group(ui);
                ui.add_space(6.0);
                self.show_page_group(ui);
                ui.add_space(6.0);
                self.show_fonts_group(ui);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Restore defaults").clicked() {
                        self.draft = OptionsDraft::from_options(&PdfOptions::default());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Ok").clicked() {
                            outcome = Some(EditorOutcome::Accepted(self.draft.to_options()));
                        }
                        if ui.button("Cancel").clicked() {
                            outcome = Some(EditorOutcome::Cancelled);
                        }
                    });
                });
            });

        if outcome.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = Some(EditorOutcome::Cancelled);
        }
        outcome
    }

    fn show_grid_group(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Grid").strong());
            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(egui::DragValue::new(&mut self.draft.rows).range(0..=MAX_DIMENSION));
                ui.add_space(12.0);
                ui.label("Columns:");
                ui.add(egui::DragValue::new(&mut self.draft.cols).range(0..=MAX_DIMENSION));
            });
        });
    }

    fn show_page_group(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Page").strong());
            setting_row(ui, "Margin", |ui| {
                ui.add(egui::DragValue::new(&mut self.draft.margin).range(0..=MAX_DIMENSION));
            });

            ui.label(egui::RichText::new("Size").strong());
            for choice in [
                PageSizeChoice::Letter,
                PageSizeChoice::A4,
                PageSizeChoice::Other,
            ] {
                ui.radio_value(&mut self.draft.page_choice, choice, choice.label());
            }

            let enabled = self.draft.size_inputs_enabled();
            ui.horizontal(|ui| {
                ui.label("Width (pts):");
                ui.add_enabled(
                    enabled,
                    egui::DragValue::new(&mut self.draft.page_width).range(0..=MAX_DIMENSION),
                );
                ui.add_space(10.0);
                ui.label("Height (pts):");
                ui.add_enabled(
                    enabled,
                    egui::DragValue::new(&mut self.draft.page_height).range(0..=MAX_DIMENSION),
                );
            });

            setting_row(ui, "Title", |ui| {
                ui.add(egui::TextEdit::singleline(&mut self.draft.title).desired_width(180.0));
            });
        });
    }

    fn show_fonts_group(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Font sizes (pts)").strong());
            setting_row(ui, "Title", |ui| {
                ui.add(
                    egui::DragValue::new(&mut self.draft.title_font_size).range(0..=MAX_FONT_SIZE),
                );
            });
            setting_row(ui, "Grid", |ui| {
                ui.add(
                    egui::DragValue::new(&mut self.draft.grid_font_size).range(0..=MAX_FONT_SIZE),
                );
            });
            setting_row(ui, "Word bank", |ui| {
                ui.add(
                    egui::DragValue::new(&mut self.draft.word_bank_font_size)
                        .range(0..=MAX_FONT_SIZE),
                );
            });
        });
    }
}

/// Label on the left, control pushed to the right.
fn setting_row(ui: &mut egui::Ui, label: &str, add: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), add);
    });
}
