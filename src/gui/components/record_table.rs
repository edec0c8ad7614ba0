// src/gui/components/record_table.rs
//
// The filtered record list. Clicking an id selects the record.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::Corpus;
use crate::explore::Filters;

const HEADERS: [&str; 4] = ["ID", "Date", "Provenance", "Content"];

pub fn draw(ui: &mut egui::Ui, corpus: &Corpus, visible: &[usize], selected: Option<&str>, filters: &mut Filters) {
    // Reserve space for the scroll bar instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked: Option<&str> = None;

    TableBuilder::new(ui)
        .id_salt("records_table")
        .striped(true)
        .max_scroll_height(220.0)
        .column(Column::initial(90.0).at_least(60.0).resizable(true))
        .column(Column::initial(150.0).resizable(true).clip(true))
        .column(Column::initial(180.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, visible.len(), |mut row| {
                let Some(rec) = visible.get(row.index()).and_then(|&ix| corpus.get(ix)) else {
                    return;
                };
                let is_sel = selected == Some(rec.id.as_str());
                row.col(|ui| {
                    if ui.selectable_label(is_sel, &rec.id).clicked() {
                        clicked = Some(rec.id.as_str());
                    }
                });
                for cell in [&rec.date, &rec.provenance, &rec.content] {
                    row.col(|ui| {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(cell);
                        });
                    });
                }
            });
        });

    if let Some(id) = clicked {
        logd!("UI: Select {id}");
        filters.select(id);
    }
}
