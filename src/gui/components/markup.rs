// src/gui/components/markup.rs
//
// Renders `**strong**` / `~~struck~~` markup as one wrapped rich-text label.

use eframe::egui::{self, Stroke, TextFormat, TextStyle, text::LayoutJob};

use crate::explore::annotate::spans;

pub fn layout_job(ui: &egui::Ui, markup: &str) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(ui.style());
    let visuals = ui.visuals();

    let mut job = LayoutJob::default();
    job.wrap.max_width = ui.available_width();
    for span in spans(markup) {
        let mut fmt = TextFormat {
            font_id: font_id.clone(),
            color: visuals.text_color(),
            ..Default::default()
        };
        if span.strong {
            fmt.color = visuals.strong_text_color();
            fmt.background = visuals.selection.bg_fill.linear_multiply(0.35);
        }
        if span.strike {
            fmt.color = visuals.weak_text_color();
            fmt.strikethrough = Stroke::new(1.0, visuals.weak_text_color());
        }
        job.append(&span.text, 0.0, fmt);
    }
    job
}

pub fn label(ui: &mut egui::Ui, markup: &str) -> egui::Response {
    let job = layout_job(ui, markup);
    ui.add(egui::Label::new(job).wrap())
}
