// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use papyrus_scrape::{config::state::GuiState, gui, log};

fn main() {
    log::init_file();

    // Optional corpus to open at start
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.window_w as f32, state.window_h as f32])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, initial) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
