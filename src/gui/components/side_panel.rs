// src/gui/components/side_panel.rs
//
// Left panel: corpus source plus every filter input. Writes straight into
// `app.state.filters`; the pages recompute their view from it.

use std::path::PathBuf;

use eframe::egui;

use crate::config::consts::ALL_PROVENANCES;
use crate::explore;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Corpus");

    ui.horizontal(|ui| {
        let w = ui.available_width() - 56.0;
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.path_text)
                .hint_text("corpus.csv")
                .desired_width(w),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Open").clicked() || enter) && !app.state.path_text.trim().is_empty() {
            let path = PathBuf::from(app.state.path_text.trim());
            app.load(&path);
        }
    });
    ui.weak("or drop a CSV file on the window");

    let App { corpus, state, .. } = app;
    let Some(corpus) = corpus.as_ref() else {
        return;
    };
    let filters = &mut state.filters;

    ui.separator();
    ui.heading("Filters");

    let provenances = explore::provenance_options(corpus);
    let current = filters.provenance.clone().unwrap_or_else(|| s!(ALL_PROVENANCES));
    egui::ComboBox::from_label("Provenance")
        .selected_text(current)
        .width(ui.available_width() - 80.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filters.provenance, None, ALL_PROVENANCES);
            for p in provenances {
                ui.selectable_value(&mut filters.provenance, Some(s!(p)), p);
            }
        });

    ui.add_space(6.0);
    match explore::year_bounds(corpus) {
        Some((lo, hi)) => {
            let (mut from, mut to) = filters.years.unwrap_or((lo, hi));
            let mut changed = false;
            changed |= ui.add(egui::Slider::new(&mut from, lo..=hi).text("from")).changed();
            changed |= ui.add(egui::Slider::new(&mut to, lo..=hi).text("to")).changed();
            if changed {
                filters.years = Some((from.min(to), from.max(to)));
            }
            if filters.years.is_some() && ui.small_button("Reset years").clicked() {
                filters.years = None;
            }
        }
        None => {
            ui.weak("No dates to filter on");
        }
    }

    ui.separator();
    ui.heading("Search");
    ui.add(
        egui::TextEdit::singleline(&mut filters.query)
            .hint_text("keyword in full text")
            .desired_width(f32::INFINITY),
    );
}
