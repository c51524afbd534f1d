use eframe::egui;

use crate::config::ChartConfig;
use crate::state::AppState;
use crate::ui::{canvas, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HousingBurdenApp {
    pub state: AppState,
}

impl HousingBurdenApp {
    /// Build the app and load the configured data file right away.
    pub fn new(config: ChartConfig) -> Self {
        let path = config.data_path.clone();
        let mut state = AppState::new(config);
        state.load_path(&path, 0.0);
        Self { state }
    }
}

impl eframe::App for HousingBurdenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, now);
        });

        // ---- Left side panel: continent + cutoff controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, now);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::chart_canvas(ui, &self.state, now);
        });

        if self
            .state
            .chart
            .as_ref()
            .is_some_and(|c| c.is_animating(now))
        {
            ctx.request_repaint();
        }
    }
}
