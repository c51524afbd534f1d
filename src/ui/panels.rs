use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::to_color32;
use crate::data::filter::FilterKey;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – continent selector and cutoff filter
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, now: f64) {
    ui.heading("Filters");
    ui.separator();

    let Some(chart) = &state.chart else {
        ui.label("No dataset loaded.");
        return;
    };

    let current = chart.view().filter.clone();
    let options = state.selector_options();

    // ---- Continent selector ----
    ui.strong("Continent");
    let mut picked: Option<FilterKey> = None;
    egui::ComboBox::from_id_salt("continent")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for key in options {
                if ui
                    .selectable_label(current == key, key.to_string())
                    .clicked()
                {
                    picked = Some(key);
                }
            }
        });
    if let Some(key) = picked {
        state.select_continent(key, now);
    }
    ui.separator();

    // ---- Cutoff ----
    ui.strong("Minimum burden (%)");
    ui.horizontal(|ui: &mut Ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.cutoff_input)
                .desired_width(80.0)
                .hint_text("0"),
        );
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Filter Data").clicked() || submitted {
            state.apply_cutoff(now);
        }
    });
    ui.separator();

    // ---- Legend ----
    ui.strong("Legend");
    for (series, color) in [
        (&state.config.series_a.label, state.colors.bar_a),
        (&state.config.series_b.label, state.colors.bar_b),
    ] {
        ui.label(RichText::new(format!("■ {series}")).color(to_color32(color)));
    }

    if let Some(chart) = &state.chart {
        ui.add_space(8.0);
        ui.label(format!(
            "{} of {} countries shown",
            chart.scene().len(),
            chart.dataset().len()
        ));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, now: f64) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, now);
                ui.close_menu();
            }
            let can_export = state.chart.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export SVG…"))
                .clicked()
            {
                save_svg_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(chart) = &state.chart {
            ui.label(format!(
                "{} countries, {} continents",
                chart.dataset().len(),
                chart.dataset().continents.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, now: f64) {
    let file = rfd::FileDialog::new()
        .set_title("Open housing cost data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path, now);
    }
}

pub fn save_svg_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart")
        .set_file_name("housing_burden.svg")
        .add_filter("SVG", &["svg"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_svg(&path) {
            log::error!("Failed to export chart: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
