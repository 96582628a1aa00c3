#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotBounds, PlotPoints, Points};
use image::GenericImageView;
use iu_diagram_tool::{
    circuit::{operating_point_texts, ResistorDiagram, ResistorForm, SourceDiagram, SourceForm},
    config, i18n, logging, plot_grid,
    units::{CurrentUnit, ResistanceUnit, VoltageUnit},
};
use std::{env, fs, path::Path, rc::Rc};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/de-de/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let (app_cfg, cfg_error) = match config::load_or_default() {
        Ok(cfg) => (cfg, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    if let Err(e) = logging::init_logging(logging::parse_level(&app_cfg.log_level)) {
        eprintln!("Logger error: {e}");
    }
    if let Some(e) = cfg_error {
        log::warn!("using default settings: {e}");
    }
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("I-U Diagram Generator")
        .with_inner_size(egui::vec2(1100.0, 650.0))
        .with_min_inner_size(egui::vec2(720.0, 420.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "I-U Diagram Generator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref()) {
                log::warn!("font: {e}");
            }
            cc.egui_ctx.set_pixels_per_point(app_cfg.effective_ui_scale());
            Box::new(GuiApp::new(app_cfg, &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 폴백 글꼴로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 기본 글꼴에 없는 문자(한글 등)를 위해 폴백 글꼴을 찾는다.
/// 1) 설정의 font_path 2) assets/fonts 3) Windows 시스템 폰트. 없으면 기본 글꼴만 쓴다.
fn setup_fonts(ctx: &egui::Context, font_path: Option<&str>) -> Result<(), String> {
    let mut candidates: Vec<&str> = font_path.into_iter().collect();
    candidates.extend([
        "assets/fonts/NotoSansKR-Regular.ttf",
        "assets/fonts/malgun.ttf",
        "C:/Windows/Fonts/malgun.ttf",
    ]);
    for path in candidates {
        if Path::new(path).exists() {
            let bytes = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
            apply_font_bytes(ctx, bytes, "fallback_font");
            log::debug!("loaded fallback font {path}");
            return Ok(());
        }
    }
    Err("no fallback font found; non-Latin text may not render".into())
}

/// 격자 설정을 egui_plot 격자 생성기로 바꾼다.
fn grid_spacer(show_minor: bool) -> impl Fn(GridInput) -> Vec<GridMark> + 'static {
    move |input: GridInput| {
        plot_grid::grid_lines(input.bounds, show_minor)
            .into_iter()
            .map(|l| GridMark {
                value: l.value,
                step_size: l.step,
            })
            .collect()
    }
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

/// 숫자 입력 칸. 엔터로 확정하면 true.
fn number_field(ui: &mut egui::Ui, text: &mut String, width: f32) -> bool {
    let resp = ui.add(egui::TextEdit::singleline(text).desired_width(width));
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn unit_combo<U: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut U,
    options: &[U],
    symbol: fn(U) -> &'static str,
) {
    egui::ComboBox::from_id_source(id)
        .width(56.0)
        .selected_text(symbol(*value))
        .show_ui(ui, |ui| {
            for &u in options {
                ui.selectable_value(value, u, symbol(u));
            }
        });
}

/// 그래프 한 장의 화면 상태. 오류가 나면 이전 그래프를 그대로 둔다.
struct PlotView<D> {
    diagram: Option<D>,
    /// 갱신 시점의 보조 격자 표시 여부
    minor_grid: bool,
    /// 다음 프레임에 축 범위를 계산값으로 맞춘다
    reset_bounds: bool,
    error: Option<String>,
}

impl<D> Default for PlotView<D> {
    fn default() -> Self {
        Self {
            diagram: None,
            minor_grid: false,
            reset_bounds: false,
            error: None,
        }
    }
}

impl<D> PlotView<D> {
    fn update(&mut self, result: Result<D, String>, minor_grid: bool) {
        match result {
            Ok(d) => {
                self.diagram = Some(d);
                self.minor_grid = minor_grid;
                self.reset_bounds = true;
                self.error = None;
            }
            Err(e) => {
                log::error!("Error: {e}");
                self.error = Some(e);
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Resistors,
    Source,
}

struct GuiApp {
    config: config::Config,
    tr: Rc<i18n::Translator>,
    tab: Tab,
    // 저항 특성
    resistor_form: ResistorForm,
    resistor_view: PlotView<ResistorDiagram>,
    // 전압원 특성
    source_form: SourceForm,
    source_view: PlotView<SourceDiagram>,
    // 설정
    lang_input: String,
    ui_scale: f32,
    settings_status: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let tr = i18n::Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        log::info!("language: {}", tr.language_code());
        let units = &config.default_units;
        let resistor_form = ResistorForm::with_units(units.voltage, units.current, units.resistance);
        let mut app = Self {
            tr: Rc::new(tr),
            tab: Tab::Resistors,
            resistor_form,
            resistor_view: PlotView::default(),
            source_form: SourceForm::default(),
            source_view: PlotView::default(),
            lang_input: config.language.clone(),
            ui_scale: config.effective_ui_scale(),
            settings_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            config,
        };
        // 첫 화면은 저항 특성선을 바로 그린다
        app.redraw_resistors();
        app
    }

    fn redraw_resistors(&mut self) {
        let result = self
            .resistor_form
            .compute(self.config.sweep.resistor_samples)
            .map_err(|e| e.to_string());
        if let Ok(d) = &result {
            log::debug!("resistor diagram: {} lines", d.lines.len());
        }
        self.resistor_view
            .update(result, self.resistor_form.show_secondary_grid);
    }

    fn redraw_source(&mut self) {
        let result = self
            .source_form
            .compute(&self.config.sweep.source)
            .map_err(|e| e.to_string());
        if let Ok(d) = &result {
            if let Some(op) = &d.operating_point {
                log::info!("operating point: U={:.3} V, I={:.3} A", op.voltage_v, op.current_a);
            }
        }
        self.source_view
            .update(result, self.source_form.show_secondary_grid);
    }

    fn ui_resistor_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = Rc::clone(&self.tr);
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut submit = false;
        let form = &mut self.resistor_form;

        egui::Grid::new("resistor_range_grid")
            .num_columns(5)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label(txt("gui.resistor.voltage_range", "Voltage range (U):"));
                submit |= number_field(ui, &mut form.u_min, 50.0);
                ui.label(txt("gui.common.to", "to"));
                submit |= number_field(ui, &mut form.u_max, 50.0);
                unit_combo(ui, "u_unit", &mut form.u_unit, &VoltageUnit::ALL, VoltageUnit::symbol);
                ui.end_row();

                ui.label(txt("gui.resistor.current_range", "Current range (I):"));
                submit |= number_field(ui, &mut form.i_min, 50.0);
                ui.label(txt("gui.common.to", "to"));
                submit |= number_field(ui, &mut form.i_max, 50.0);
                unit_combo(ui, "i_unit", &mut form.i_unit, &CurrentUnit::ALL, CurrentUnit::symbol);
                ui.end_row();
            });
        ui.add_space(8.0);
        label_with_tip(
            ui,
            &txt("gui.resistor.values", "Resistor values (R):"),
            &txt("gui.resistor.empty_tip", "Leave empty to hide this resistor."),
        );
        egui::Grid::new("resistor_values_grid")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (idx, (value, unit)) in form.resistors.iter_mut().enumerate() {
                    ui.label(format!("R{}:", idx + 1));
                    submit |= number_field(ui, value, 80.0);
                    unit_combo(
                        ui,
                        &format!("r{idx}_unit"),
                        unit,
                        &ResistanceUnit::ALL,
                        ResistanceUnit::symbol,
                    );
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        ui.checkbox(
            &mut form.show_secondary_grid,
            txt("gui.common.secondary_grid", "Show secondary grid"),
        );
        ui.add_space(8.0);
        if ui.button(txt("gui.common.update", "Update Diagram")).clicked() || submit {
            self.redraw_resistors();
        }
        error_status(ui, &txt("gui.error_prefix", "Error"), &self.resistor_view.error);
    }

    fn ui_source_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = Rc::clone(&self.tr);
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut submit = false;
        let form = &mut self.source_form;

        egui::Grid::new("source_grid")
            .num_columns(3)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label(txt("gui.source.uq", "Source Voltage (Uq):"));
                submit |= number_field(ui, &mut form.uq, 80.0);
                unit_combo(ui, "uq_unit", &mut form.uq_unit, &VoltageUnit::ALL, VoltageUnit::symbol);
                ui.end_row();

                ui.label(txt("gui.source.ri", "Internal Resistance (Ri):"));
                submit |= number_field(ui, &mut form.ri, 80.0);
                unit_combo(ui, "ri_unit", &mut form.ri_unit, &ResistanceUnit::ALL, ResistanceUnit::symbol);
                ui.end_row();

                ui.label(txt("gui.source.rl", "Load Resistance (RL):"));
                submit |= number_field(ui, &mut form.rl, 80.0);
                unit_combo(ui, "rl_unit", &mut form.rl_unit, &ResistanceUnit::ALL, ResistanceUnit::symbol);
                ui.end_row();
            });
        ui.add_space(8.0);
        ui.checkbox(&mut form.show_load, txt("gui.source.show_load", "Show load resistor"));
        ui.checkbox(
            &mut form.show_secondary_grid,
            txt("gui.common.secondary_grid", "Show secondary grid"),
        );
        ui.add_space(8.0);
        if ui.button(txt("gui.common.update", "Update Diagram")).clicked() || submit {
            self.redraw_source();
        }
        error_status(ui, &txt("gui.error_prefix", "Error"), &self.source_view.error);

        ui.add_space(12.0);
        ui.separator();
        ui.strong(txt("gui.source.op_heading", "Operating Point (OP):"));
        let diagram = self.source_view.diagram.as_ref();
        let (u_text, i_text) = operating_point_texts(diagram.and_then(|d| d.operating_point.as_ref()));
        egui::Grid::new("op_grid").num_columns(2).show(ui, |ui| {
            ui.label(txt("gui.source.op_voltage", "Voltage (U):"));
            ui.monospace(u_text);
            ui.end_row();
            ui.label(txt("gui.source.op_current", "Current (I):"));
            ui.monospace(i_text);
            ui.end_row();
        });
        if let Some(exact) = diagram.and_then(|d| d.exact_operating_point.as_ref()) {
            ui.small(format!(
                "{}U = {}, I = {}",
                txt("gui.source.op_exact", "Exact: "),
                exact.voltage_text(),
                exact.current_text()
            ));
        }
    }

    fn ui_resistor_plot(&mut self, ui: &mut egui::Ui) {
        let view = &mut self.resistor_view;
        let reset = std::mem::take(&mut view.reset_bounds);
        let Some(d) = &view.diagram else { return };
        let (x0, x1) = d.x_range.ordered();
        let (y0, y1) = d.y_range.ordered();
        Plot::new("resistor_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(d.x_label.clone())
            .y_axis_label(d.y_label.clone())
            .x_grid_spacer(grid_spacer(view.minor_grid))
            .y_grid_spacer(grid_spacer(view.minor_grid))
            .include_x(x0)
            .include_x(x1)
            .include_y(y0)
            .include_y(y1)
            .show(ui, |plot_ui| {
                if reset && x1 > x0 && y1 > y0 {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));
                }
                for line in &d.lines {
                    plot_ui.line(Line::new(PlotPoints::from(line.points.clone())).name(&line.label));
                }
            });
    }

    fn ui_source_plot(&mut self, ui: &mut egui::Ui) {
        let tr = Rc::clone(&self.tr);
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let view = &mut self.source_view;
        let reset = std::mem::take(&mut view.reset_bounds);
        let Some(d) = &view.diagram else { return };
        let (x0, x1) = d.x_range.ordered();
        let (y0, y1) = d.y_range.ordered();
        Plot::new("source_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label("U / V")
            .y_axis_label("I / A")
            .x_grid_spacer(grid_spacer(view.minor_grid))
            .y_grid_spacer(grid_spacer(view.minor_grid))
            .include_x(x0)
            .include_x(x1)
            .include_y(y0)
            .include_y(y1)
            .show(ui, |plot_ui| {
                if reset && x1 > x0 && y1 > y0 {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));
                }
                plot_ui.line(
                    Line::new(PlotPoints::from(d.source_line.clone()))
                        .name(txt("gui.source.legend_source", "Voltage Source (Uq, Ri)")),
                );
                if let Some(load) = &d.load_line {
                    plot_ui.line(
                        Line::new(PlotPoints::from(load.clone()))
                            .name(txt("gui.source.legend_load", "Load Resistor (RL)")),
                    );
                }
                if let Some(op) = &d.operating_point {
                    plot_ui.points(
                        Points::new(vec![[op.voltage_v, op.current_a]])
                            .radius(5.0)
                            .color(egui::Color32::RED)
                            .name(format!(
                                "{}: U={}, I={}",
                                txt("gui.source.legend_op", "OP"),
                                op.voltage_text(),
                                op.current_text()
                            )),
                    );
                }
            });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = Rc::clone(&self.tr);
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.settings.lang", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang_auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "de-de".into(), "Deutsch");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                ui.separator();
                ui.label(txt("gui.settings.ui_scale", "UI scale"));
                let scale_slider = egui::Slider::new(&mut self.ui_scale, config::UI_SCALE_RANGE).suffix(" x");
                if ui.add(scale_slider).changed() {
                    ctx.set_pixels_per_point(self.ui_scale);
                }
                ui.separator();
                if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                    self.config.language = self.lang_input.clone();
                    self.config.ui_scale = self.ui_scale;
                    let resolved = i18n::resolve_language(&self.config.language, None);
                    self.tr = Rc::new(i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    ));
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => txt("gui.settings.saved", "Saved."),
                        Err(e) => {
                            log::error!("saving settings failed: {e}");
                            format!("{}: {e}", txt("gui.error_prefix", "Error"))
                        }
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_help(&mut self, ctx: &egui::Context) {
        let tr = Rc::clone(&self.tr);
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        egui::Window::new(txt("gui.help.title", "Help / Formulas"))
            .collapsible(true)
            .resizable(true)
            .open(&mut self.show_help_modal)
            .show(ctx, |ui| {
                ui.label(txt("gui.help.ohm", "Resistor line: I = U / R"));
                ui.label(txt("gui.help.source", "Source line: U = Uq - I·Ri"));
                ui.label(txt("gui.help.load", "Load line: U = I·RL"));
                ui.label(txt(
                    "gui.help.op",
                    "Operating point: first sample where |U_source - U_load| < tolerance",
                ));
                ui.separator();
                ui.label(txt(
                    "gui.help.navigation",
                    "Chart: drag to pan, scroll to zoom, double-click to reset.",
                ));
            });
    }
}

fn error_status(ui: &mut egui::Ui, prefix: &str, error: &Option<String>) {
    if let Some(e) = error {
        let color = ui.visuals().error_fg_color;
        ui.add_space(4.0);
        ui.colored_label(color, format!("{prefix}: {e}"));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = Rc::clone(&self.tr);
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바: 제목 + 탭 + 설정/도움말
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.app_title", "I-U Diagram Generator"));
                ui.separator();
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Resistors,
                    txt("gui.tab.resistors", "Resistor Characteristics"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Source,
                    txt("gui.tab.source", "Voltage Source Characteristics"),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(txt("gui.help.title", "Help / Formulas")).clicked() {
                        self.show_help_modal = true;
                    }
                    if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        if self.show_help_modal {
            self.ui_help(ctx);
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(300.0)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                    Tab::Resistors => self.ui_resistor_inputs(ui),
                    Tab::Source => self.ui_source_inputs(ui),
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.small(txt(
                "gui.common.plot_tip",
                "Drag to pan, scroll to zoom, double-click to reset the view.",
            ));
            match self.tab {
                Tab::Resistors => self.ui_resistor_plot(ui),
                Tab::Source => self.ui_source_plot(ui),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iu_diagram_tool::circuit::RESISTOR_SLOTS;

    #[test]
    fn startup_draws_resistor_diagram() {
        let app = GuiApp::new(config::Config::default(), "en-us");
        let d = app.resistor_view.diagram.as_ref().expect("initial diagram");
        assert_eq!(d.lines.len(), RESISTOR_SLOTS);
        assert_eq!(d.x_label, "U / V");
        assert_eq!(d.y_label, "I / mA");
        assert!(app.source_view.diagram.is_none());
    }

    #[test]
    fn failed_redraw_keeps_previous_diagram() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.resistor_form.resistors[0].0 = "abc".into();
        app.redraw_resistors();
        assert!(app.resistor_view.error.is_some());
        let d = app.resistor_view.diagram.as_ref().unwrap();
        assert_eq!(d.lines[0].label, "R1 = 100 Ω");
    }

    #[test]
    fn source_redraw_with_load_sets_operating_point() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.source_form.uq = "12".into();
        app.source_form.ri = "2".into();
        app.source_form.rl = "4".into();
        app.source_form.show_load = true;
        app.redraw_source();
        let d = app.source_view.diagram.as_ref().unwrap();
        let (u, i) = operating_point_texts(d.operating_point.as_ref());
        assert_eq!(u, "8.00 V");
        assert_eq!(i, "2.00 A");
    }

    #[test]
    fn grid_toggle_is_captured_on_redraw() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.resistor_form.show_secondary_grid = true;
        assert!(!app.resistor_view.minor_grid);
        app.redraw_resistors();
        assert!(app.resistor_view.minor_grid);
    }

    #[test]
    fn out_of_range_ui_scale_is_clamped() {
        let mut cfg = config::Config::default();
        cfg.ui_scale = 0.0;
        let app = GuiApp::new(cfg, "en-us");
        assert_eq!(app.ui_scale, 0.8);
    }

    #[test]
    fn default_units_apply_to_resistor_form() {
        let mut cfg = config::Config::default();
        cfg.default_units.resistance = ResistanceUnit::KiloOhm;
        let app = GuiApp::new(cfg, "en-us");
        assert!(app
            .resistor_form
            .resistors
            .iter()
            .all(|(_, u)| *u == ResistanceUnit::KiloOhm));
    }
}
