// src/gui/components/bar_chart.rs
//
// Horizontal bars in a grid: label, bar, count. Bars scale to the largest count.

use eframe::egui::{self, Sense, vec2};

const BAR_MAX_W: f32 = 280.0;
const BAR_H: f32 = 14.0;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, rows: &[(String, usize)]) {
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
    let fill = ui.visuals().selection.bg_fill;

    egui::Grid::new(id_salt)
        .num_columns(3)
        .striped(true)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            for (label, n) in rows {
                ui.label(label);
                let (rect, _) = ui.allocate_exact_size(vec2(BAR_MAX_W, BAR_H), Sense::hover());
                let w = BAR_MAX_W * (*n as f32 / max as f32);
                let bar = egui::Rect::from_min_size(rect.min, vec2(w, BAR_H));
                ui.painter().rect_filled(bar, 2.0, fill);
                ui.label(n.to_string());
                ui.end_row();
            }
        });
}
