// src/config/state.rs
use crate::explore::Filters;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text of the "open file" field
    pub path_text: String,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Session filters; the only input the explorer view depends on
    pub filters: Filters,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            path_text: s!(),
            current_page_index: 0,
            filters: Filters::default(),
        }
    }
}
