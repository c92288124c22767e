//! Main window implemented with egui/eframe

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{debug, error, info, warn};

use super::components::{content_input, customization};
use super::constants::*;
use super::notifications::{NotificationKind, Notifier};
use super::preview::{PreviewTexture, preview_side};
use crate::config::{Config, Theme};
use crate::generator::{GeneratorForm, Session};
use crate::platform;

impl Theme {
    fn preference(self) -> egui::ThemePreference {
        match self {
            Theme::System => egui::ThemePreference::System,
            Theme::Light => egui::ThemePreference::Light,
            Theme::Dark => egui::ThemePreference::Dark,
        }
    }
}

struct QrGeneratorApp {
    config: Config,
    /// False when the config file failed to parse; it is left untouched on disk
    config_writable: bool,
    output_dir: PathBuf,
    form: GeneratorForm,
    session: Session,
    preview: PreviewTexture,
    notifier: Notifier,
    window_size: Option<egui::Vec2>,
}

impl QrGeneratorApp {
    fn new(cc: &CreationContext<'_>, config: Config, config_writable: bool, output_dir: PathBuf) -> Self {
        info!(output_dir = %output_dir.display(), "Initializing QR generator window");
        cc.egui_ctx.set_theme(config.window.theme.preference());

        Self {
            form: GeneratorForm::new(&config.generator),
            config,
            config_writable,
            output_dir,
            session: Session::new(),
            preview: PreviewTexture::default(),
            notifier: Notifier::new(),
            window_size: None,
        }
    }

    fn generate(&mut self) {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.notifier.notify(NotificationKind::Error, err.to_string());
                return;
            }
        };

        match self.session.generate(&request) {
            Ok(_) => {
                self.preview.clear();
                self.notifier
                    .notify(NotificationKind::Success, "QR code successfully generated!");
            }
            Err(err) => self.notifier.notify(NotificationKind::Error, err.to_string()),
        }
    }

    fn clear(&mut self) {
        self.form.reset(&self.config.generator);
        self.session.clear();
        self.preview.clear();
        self.notifier.notify(NotificationKind::Info, "All information cleared");
    }

    fn save(&mut self) {
        let Some(default_filename) = self.session.current().map(|o| o.default_filename.clone()) else {
            self.notifier.notify(NotificationKind::Error, crate::generator::GeneratorError::NoImage.to_string());
            return;
        };

        let destination = rfd::FileDialog::new()
            .set_title("Save QR Code")
            .set_directory(&self.output_dir)
            .set_file_name(&default_filename)
            .add_filter("PNG files", &["png"])
            .add_filter("All files", &["*"])
            .save_file();

        let Some(destination) = destination else {
            debug!("Save dialog cancelled");
            return;
        };

        match self.session.save(&destination) {
            Ok(written) => {
                let name = written
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| written.display().to_string());
                self.notifier
                    .notify(NotificationKind::Success, format!("QR code saved: {name}"));
                self.offer_open_folder(&written);
            }
            Err(err) => self.notifier.notify(NotificationKind::Error, err.to_string()),
        }
    }

    fn offer_open_folder(&mut self, written: &Path) {
        let Some(folder) = written.parent() else {
            return;
        };

        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Success")
            .set_description(format!(
                "QR code saved to:\n{}\n\nDo you want to open the containing folder?",
                written.display()
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();

        if answer == rfd::MessageDialogResult::Yes {
            if let Err(err) = platform::open_folder(folder) {
                error!(error = ?err, "Failed to open containing folder");
                self.notifier
                    .notify(NotificationKind::Warning, format!("Could not open folder: {err}"));
            }
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        if self.config.window.theme == theme {
            return;
        }
        info!(?theme, "Theme changed");
        self.config.window.theme = theme;
        ctx.set_theme(theme.preference());
        self.persist_config();
    }

    fn persist_config(&mut self) {
        if !self.config_writable {
            debug!("Config file is not writable this session, skipping save");
            return;
        }
        if let Err(err) = self.config.save() {
            warn!(error = ?err, "Failed to save config");
            self.notifier
                .notify(NotificationKind::Warning, format!("Could not save settings: {err}"));
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            ui.horizontal(|ui| {
                ui.add_space(PADDING);
                ui.heading(egui::RichText::new(WINDOW_TITLE).strong().size(28.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(PADDING);
                    let mut theme = self.config.window.theme;
                    ui.selectable_value(&mut theme, Theme::Dark, "\u{1F319} Dark");
                    ui.selectable_value(&mut theme, Theme::Light, "\u{2600} Light");
                    ui.selectable_value(&mut theme, Theme::System, "System");
                    self.set_theme(ui.ctx(), theme);
                });
            });
            ui.add_space(ITEM_SPACING);
        });
    }

    fn footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .exact_height(FOOTER_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(PADDING);
                    match self.notifier.status() {
                        Some(status) => {
                            ui.colored_label(status.kind.color(), status.line());
                        }
                        None => {
                            ui.label("Ready");
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(PADDING);
                        ui.label(egui::RichText::new(CREDIT_TEXT).small().weak());
                    });
                });
            });
    }

    fn controls(&mut self, ctx: &egui::Context) {
        let default_width = self.window_size.map_or(380.0, |s| s.x * LEFT_PANEL_FRACTION);
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(default_width)
            .show(ctx, |ui| {
                ui.add_space(PADDING);
                ui.group(|ui| {
                    content_input::ui(ui, &mut self.form.text);
                });

                ui.add_space(SECTION_SPACING);

                ui.group(|ui| {
                    customization::ui(ui, &mut self.form);
                });

                ui.add_space(SECTION_SPACING);

                ui.horizontal(|ui| {
                    let generate = egui::Button::new(
                        egui::RichText::new("\u{2728} Generate").strong().color(egui::Color32::WHITE),
                    )
                    .fill(SUCCESS_COLOR)
                    .min_size(egui::vec2(120.0, 42.0));
                    if ui.add(generate).clicked() {
                        self.generate();
                    }

                    let clear = egui::Button::new(
                        egui::RichText::new("\u{1F5D1} Clear").strong().color(egui::Color32::WHITE),
                    )
                    .fill(ERROR_COLOR)
                    .min_size(egui::vec2(120.0, 42.0));
                    if ui.add(clear).clicked() {
                        self.clear();
                    }
                });
            });
    }

    fn preview_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Preview").heading().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let save = egui::Button::new(
                        egui::RichText::new("\u{1F4BE} Save").strong().color(egui::Color32::WHITE),
                    )
                    .fill(ACCENT_COLOR)
                    .min_size(egui::vec2(90.0, 36.0));
                    if ui.add_enabled(self.session.has_image(), save).clicked() {
                        self.save();
                    }
                });
            });

            ui.add_space(SECTION_SPACING);

            let side = preview_side(ui.available_size());
            ui.centered_and_justified(|ui| match self.session.current() {
                Some(output) => {
                    let texture = self.preview.get_or_build(ui.ctx(), output, side);
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Image::new(texture));
                        ui.add_space(ITEM_SPACING);
                        ui.label(
                            egui::RichText::new(format!(
                                "{0}\u{00D7}{0} modules \u{00B7} level {1} (~{2}%) \u{00B7} {3} px per module",
                                output.modules,
                                output.request.error_correction,
                                output.request.error_correction.recovery_percent(),
                                output.request.module_pixels(),
                            ))
                            .small()
                            .weak(),
                        );
                    });
                }
                None => {
                    ui.label(egui::RichText::new(PREVIEW_EMPTY_TEXT).small().weak());
                }
            });
        });
    }
}

impl eframe::App for QrGeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = Some(rect.size());
        }

        self.header(ctx);
        self.footer(ctx);
        self.controls(ctx);
        self.preview_panel(ctx);
        self.notifier.show_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(size) = self.window_size {
            let width = (size.x.round() as u16).max(crate::constants::validation::MIN_WINDOW_WIDTH);
            let height = (size.y.round() as u16).max(crate::constants::validation::MIN_WINDOW_HEIGHT);
            if (width, height) != (self.config.window.width, self.config.window.height) {
                self.config.window.width = width;
                self.config.window.height = height;
                self.persist_config();
            }
        }
        info!("QR generator exiting");
    }
}

pub fn run_gui(config: Config, config_writable: bool, output_dir: PathBuf) -> Result<()> {
    let min_size = [
        crate::constants::validation::MIN_WINDOW_WIDTH as f32,
        crate::constants::validation::MIN_WINDOW_HEIGHT as f32,
    ];
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_min_inner_size(min_size)
            .with_title(WINDOW_TITLE)
            .with_app_id(APP_ID),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(QrGeneratorApp::new(cc, config, config_writable, output_dir)))),
    )
    .map_err(|err| anyhow!("Failed to launch QR generator window: {err}"))
}
