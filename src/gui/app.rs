// src/gui/app.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::{config::state::GuiState, data::Corpus, explore::IrregularityStats};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions, initial: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Papyrus Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(GuiState::default(), initial)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: GuiState,

    // loaded once per file, read-only afterwards
    pub corpus: Option<Corpus>,
    pub stats: IrregularityStats,
    pub source: Option<PathBuf>,

    pub status: String,
}

impl App {
    pub fn new(state: GuiState, initial: Option<PathBuf>) -> Self {
        let mut app = Self {
            state,
            corpus: None,
            stats: IrregularityStats::default(),
            source: None,
            status: s!("Idle"),
        };
        if let Some(path) = initial {
            app.state.path_text = path.to_string_lossy().into_owned();
            app.load(&path);
        }
        logf!("Init: default page={}", app.current_page().title());
        app
    }

    /// Replace the corpus. On failure the previous one stays loaded.
    pub fn load(&mut self, path: &Path) {
        match Corpus::load(path) {
            Ok(corpus) => {
                self.status = format!("Loaded {} record(s) from {}", corpus.len(), path.display());
                self.stats = IrregularityStats::compute(&corpus);
                self.corpus = Some(corpus);
                self.source = Some(path.to_path_buf());
                self.state.filters = Default::default();
            }
            Err(e) => {
                loge!("Load: {} failed: {e}", path.display());
                self.status = format!("Could not load {}: {e}", path.display());
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    fn take_dropped_file(ctx: &egui::Context) -> Option<PathBuf> {
        ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = Self::take_dropped_file(ctx) {
            logf!("UI: File dropped {}", path.display());
            self.state.path_text = path.to_string_lossy().into_owned();
            self.load(&path);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::side_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            if self.corpus.is_none() {
                ui.label(page.placeholder());
            } else {
                page.draw(ui, self);
            }
        });
    }
}
