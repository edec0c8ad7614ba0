// src/gui/components/mod.rs
pub mod bar_chart;
pub mod markup;
pub mod record_table;
pub mod side_panel;
pub mod tabs;
