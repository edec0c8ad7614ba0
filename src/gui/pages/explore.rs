// src/gui/pages/explore.rs
use eframe::egui::{self, RichText};

use crate::config::consts::PLACE_URL_PREFIX;
use crate::core::sanitize::present;
use crate::explore::{Detail, ExplorerView, Filters, Hit, Lookup, Related};
use crate::gui::app::App;
use crate::gui::components::{markup, record_table};

use super::Page;

pub struct ExplorePage;
pub static PAGE: ExplorePage = ExplorePage;

impl Page for ExplorePage {
    fn title(&self) -> &'static str { "Explore" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let App { corpus, state, .. } = app;
        let Some(corpus) = corpus.as_ref() else {
            return;
        };
        let filters = &mut state.filters;
        let view = ExplorerView::compute(corpus, filters);

        ui.label(format!("{} of {} record(s) shown", view.visible.len(), corpus.len()));
        record_table::draw(ui, corpus, &view.visible, view.selected_id(), filters);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("explore_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                match &view.detail {
                    Some(detail) => draw_detail(ui, detail, view.related.as_ref(), filters),
                    None => {
                        ui.label("No record matches the current filters.");
                    }
                }

                if !filters.query.is_empty() {
                    ui.separator();
                    draw_hits(ui, &filters.query, &view.hits);
                }
            });
    }
}

fn draw_detail(ui: &mut egui::Ui, d: &Detail<'_>, related: Option<&Related>, filters: &mut Filters) {
    let r = d.record;
    ui.heading(&r.id);

    egui::Grid::new("record_fields")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (k, v) in [
                ("Date", &r.date),
                ("Provenance", &r.provenance),
                ("Language/Script", &r.language),
                ("Material", &r.material),
                ("Content", &r.content),
                ("Publications", &r.publications),
                ("Collections", &r.collections),
                ("Archive", &r.archive),
            ] {
                ui.label(RichText::new(k).strong());
                ui.label(v);
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.label(RichText::new("People").strong());
    ui.horizontal_wrapped(|ui| {
        if r.people.is_empty() {
            ui.weak("none");
        }
        for name in &r.people {
            if ui.button(name).clicked() {
                filters.lookup = Some(Lookup::Person(name.clone()));
            }
        }
    });

    ui.label(RichText::new("Places").strong());
    ui.horizontal_wrapped(|ui| {
        if r.places.is_empty() {
            ui.weak("none");
        }
        for place in &r.places {
            if ui.button(&place.name).clicked() {
                filters.lookup = Some(Lookup::Place(place.name.clone()));
            }
            if let Some(geo) = present(&place.geo_id) {
                ui.hyperlink_to("↗", join!(PLACE_URL_PREFIX, geo));
            }
        }
    });

    if let Some(rel) = related {
        ui.add_space(4.0);
        ui.label(format!(
            "{} text(s) mentioning {} \"{}\":",
            rel.ids.len(),
            rel.lookup.kind(),
            rel.lookup.name()
        ));
        ui.horizontal_wrapped(|ui| {
            for id in &rel.ids {
                if ui.small_button(id).clicked() {
                    filters.select(id);
                }
            }
        });
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Full text").strong());
    markup::label(ui, &d.annotated);

    if !r.irregularities.is_empty() {
        ui.add_space(6.0);
        ui.collapsing(format!("Text irregularities ({})", r.irregularities.len()), |ui| {
            for entry in &r.irregularities {
                ui.label(entry);
            }
        });
    }
}

fn draw_hits(ui: &mut egui::Ui, query: &str, hits: &[Hit<'_>]) {
    ui.heading(format!("{} text(s) containing \"{query}\"", hits.len()));
    for hit in hits {
        let r = hit.record;
        ui.label(RichText::new(format!("{} · {} · {}", r.id, r.date, r.provenance)).strong());
        markup::label(ui, &hit.excerpt);
        ui.add_space(6.0);
    }
}
