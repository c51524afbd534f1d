use eframe::egui::{self, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};

use crate::chart::scale::percent_label;
use crate::color::to_color32;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart canvas (central panel)
// ---------------------------------------------------------------------------

/// Paint the chart at its state for the current frame time.
pub fn chart_canvas(ui: &mut Ui, state: &AppState, now: f64) {
    let Some(chart) = &state.chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a housing cost file  (File → Open…)");
        });
        return;
    };

    let layout = chart.layout();
    let scale = chart.scale();
    let ink = to_color32(state.colors.ink);
    let fill_a = to_color32(state.colors.bar_a);
    let fill_b = to_color32(state.colors.bar_b);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let size = vec2(layout.canvas_width as f32, layout.canvas_height as f32);
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            let origin = response.rect.min;
            painter.rect_filled(response.rect, 0.0, Color32::WHITE);

            painter.text(
                origin + vec2(100.0, 30.0),
                Align2::CENTER_BOTTOM,
                &state.config.title,
                FontId::proportional(16.0),
                ink,
            );

            // Chart group, offset by the padding.
            let group = origin + vec2(layout.padding.left as f32, layout.padding.top as f32);
            let at = |x: f64, y: f64| -> Pos2 { group + vec2(x as f32, y as f32) };
            let stroke = Stroke::new(1.0, ink);

            // ---- Value axis on the baseline ----
            let baseline = layout.baseline();
            painter.line_segment([at(0.0, baseline), at(layout.chart_width, baseline)], stroke);
            for tick in scale.ticks(state.config.axis_ticks) {
                let x = scale.apply(tick);
                painter.line_segment([at(x, baseline), at(x, baseline + 6.0)], stroke);
                painter.text(
                    at(x, baseline + 9.0),
                    Align2::CENTER_TOP,
                    percent_label(tick),
                    FontId::proportional(10.0),
                    ink,
                );
            }

            if chart.scene().is_empty() {
                painter.text(
                    at(layout.chart_width / 2.0, baseline / 2.0),
                    Align2::CENTER_CENTER,
                    "No countries match this filter",
                    FontId::proportional(14.0),
                    Color32::GRAY,
                );
            }

            // ---- Bars and labels ----
            let mut hovered = None;
            for mark in chart.frame(now) {
                for (bar, fill) in [(mark.bar_a, fill_a), (mark.bar_b, fill_b)] {
                    let rect = Rect::from_two_pos(
                        at(bar.x, bar.y),
                        at(bar.x + bar.width, bar.y + bar.height),
                    );
                    painter.rect_filled(rect, 0.0, fill);
                    if response.hover_pos().is_some_and(|p| rect.contains(p)) {
                        hovered = Some((mark.country.to_string(), mark.value_a, mark.value_b));
                    }
                }
                painter.text(
                    at(mark.label.x, mark.label.y),
                    Align2::CENTER_TOP,
                    mark.country,
                    FontId::proportional(10.0),
                    ink,
                );
            }

            if let Some((country, a, b)) = hovered {
                let text = format!(
                    "{country}\n{}: {}\n{}: {}",
                    state.config.series_a.label,
                    percent_label(a),
                    state.config.series_b.label,
                    percent_label(b)
                );
                response.on_hover_text_at_pointer(text);
            }
        });
}
