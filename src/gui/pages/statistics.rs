// src/gui/pages/statistics.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::components::bar_chart;

use super::Page;

pub struct StatisticsPage;
pub static PAGE: StatisticsPage = StatisticsPage;

impl Page for StatisticsPage {
    fn title(&self) -> &'static str { "Statistics" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let stats = &app.stats;
        ui.label(format!(
            "{} irregularit(ies) across {} record(s)",
            stats.total(),
            stats.per_record.len()
        ));

        egui::ScrollArea::vertical()
            .id_salt("stats_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Irregularities per record");
                bar_chart::draw(ui, "per_record", &stats.per_record);

                ui.separator();
                ui.heading("Most frequent irregularities");
                bar_chart::draw(ui, "frequencies", &stats.frequencies);
            });
    }
}
