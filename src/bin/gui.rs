#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 두 개의 탭이 각각 하나의 계산 폼을 가진다.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eframe::{egui, App, Frame};
use fuel_calculator::{
    app::translator_for,
    config, i18n,
    i18n::keys,
    input::{CombustionForm, FuelOilForm},
    logging, report,
};
use rfd::FileDialog;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fuel_calculator", about = "Fuel calculator desktop GUI")]
struct GuiArgs {
    /// Language: auto, uk, en
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// Path to config.toml
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logging::init_logging(args.verbose);

    let app_cfg = config::load_or_default(&args.config).unwrap_or_else(|e| {
        error!("config load failed, using defaults: {e}");
        config::Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_transparent(true),
        ..Default::default()
    };
    let title = translator_for(&args.lang, &app_cfg).t(keys::APP_TITLE);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, args.config, args.lang))),
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Combustion,
    FuelOil,
}

/// 폼 하나의 화면 상태. 결과와 오류는 동시에 존재하지 않는다.
#[derive(Default)]
struct FormOutput {
    result: Option<String>,
    error: Option<String>,
}

impl FormOutput {
    fn set(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(text) => {
                self.result = Some(text);
                self.error = None;
            }
            Err(message) => {
                self.result = None;
                self.error = Some(message);
            }
        }
    }
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    /// `--lang` 값. 설정 파일에는 저장하지 않는다.
    cli_lang: String,
    tr: i18n::Translator,
    tab: Tab,
    combustion_form: CombustionForm,
    combustion_out: FormOutput,
    fuel_oil_form: FuelOilForm,
    fuel_oil_out: FormOutput,
    show_settings: bool,
    lang_input: String,
    settings_status: Option<String>,
    report_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf, cli_lang: String) -> Self {
        let tr = translator_for(&cli_lang, &config);
        info!(language = tr.language_code(), "GUI language resolved");
        Self {
            lang_input: config.language.clone(),
            config,
            config_path,
            cli_lang,
            tr,
            tab: Tab::Combustion,
            combustion_form: CombustionForm::default(),
            combustion_out: FormOutput::default(),
            fuel_oil_form: FuelOilForm::default(),
            fuel_oil_out: FormOutput::default(),
            show_settings: false,
            settings_status: None,
            report_status: None,
        }
    }

    fn ui_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (tab, key) in [
                (Tab::Combustion, keys::TAB_COMBUSTION),
                (Tab::FuelOil, keys::TAB_FUEL_OIL),
            ] {
                if ui
                    .selectable_value(&mut self.tab, tab, self.tr.t(key))
                    .clicked()
                {
                    self.report_status = None;
                }
            }
        });
    }

    fn ui_combustion(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::COMBUSTION_HEADING));
        ui.add_space(8.0);
        let tr = &self.tr;
        form_grid(ui, "combustion_grid", tr, self.combustion_form.fields_mut());
        ui.add_space(8.0);
        if ui.button(tr.t(keys::BUTTON_CALCULATE)).clicked() {
            self.combustion_out.set(report::evaluate_combustion_form(
                &self.combustion_form,
                tr,
                self.config.decimals,
            ));
            self.report_status = None;
        }
        ui.add_space(8.0);
        output_ui(ui, tr, &self.combustion_out, &mut self.report_status);
    }

    fn ui_fuel_oil(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::FUEL_OIL_HEADING));
        ui.add_space(4.0);
        let tr = &self.tr;
        form_grid(ui, "fuel_oil_grid", tr, self.fuel_oil_form.fields_mut());
        ui.add_space(4.0);
        if ui.button(tr.t(keys::BUTTON_CALCULATE)).clicked() {
            self.fuel_oil_out.set(report::evaluate_fuel_oil_form(
                &self.fuel_oil_form,
                tr,
                self.config.decimals,
            ));
            self.report_status = None;
        }
        ui.add_space(4.0);
        output_ui(ui, tr, &self.fuel_oil_out, &mut self.report_status);
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let mut save_clicked = false;
        let tr = self.tr.clone();
        egui::Window::new(tr.t(keys::SETTINGS_HEADING))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            tr.t(keys::SETTINGS_LANG_AUTO),
                        );
                        ui.selectable_value(&mut self.lang_input, "uk".into(), "Українська");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                    });
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_DECIMALS));
                ui.add(egui::Slider::new(
                    &mut self.config.decimals,
                    0..=config::MAX_DECIMALS,
                ));
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_ALPHA));
                ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0));
                ui.separator();
                if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;

        if save_clicked {
            if self.lang_input != self.config.language {
                self.config.language = self.lang_input.clone();
                self.cli_lang = "auto".into();
            }
            self.tr = translator_for(&self.cli_lang, &self.config);
            self.settings_status = Some(match self.config.save(&self.config_path) {
                Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                Err(e) => {
                    error!("config save failed: {e}");
                    format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))
                }
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        let alpha = self.config.window_alpha;
        style.visuals.window_fill = egui::Visuals::default().window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = egui::Visuals::default().panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::SETTINGS_HEADING)).clicked() {
                    self.show_settings = true;
                    self.settings_status = None;
                }
            });
            self.ui_tabs(ui);
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Combustion => self.ui_combustion(ui),
                    Tab::FuelOil => self.ui_fuel_oil(ui),
                });
        });
    }
}

/// 라벨 + 한 줄 입력칸 그리드를 그린다.
fn form_grid<const N: usize>(
    ui: &mut egui::Ui,
    id: &str,
    tr: &i18n::Translator,
    fields: [(&'static str, &mut String); N],
) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (field, buf) in fields {
                ui.strong(tr.field_label(field));
                ui.add(egui::TextEdit::singleline(buf).desired_width(160.0));
                ui.end_row();
            }
        });
}

/// 오류 메시지 또는 결과 텍스트와 보고서 저장 버튼을 그린다.
fn output_ui(
    ui: &mut egui::Ui,
    tr: &i18n::Translator,
    out: &FormOutput,
    report_status: &mut Option<String>,
) {
    if let Some(msg) = &out.error {
        ui.colored_label(ui.visuals().error_fg_color, msg);
    }
    let Some(text) = &out.result else {
        return;
    };
    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.monospace(text);
    });
    ui.add_space(4.0);
    if ui.button(tr.t(keys::REPORT_SAVE)).clicked() {
        *report_status = save_report(text, tr);
    }
    if let Some(status) = report_status {
        ui.label(status.as_str());
    }
}

fn save_report(text: &str, tr: &i18n::Translator) -> Option<String> {
    let path = FileDialog::new()
        .set_file_name("report.txt")
        .add_filter("Text", &["txt"])
        .save_file()?;
    Some(match fs::write(&path, text) {
        Ok(()) => {
            info!(path = %path.display(), "report saved");
            format!("{} {}", tr.t(keys::REPORT_SAVED_TO), path.display())
        }
        Err(e) => {
            error!(path = %path.display(), "report save failed: {e}");
            format!("{}: {e}", tr.t(keys::ERROR_PREFIX))
        }
    })
}
