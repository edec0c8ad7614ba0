// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod record;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;

pub mod analysis;
pub mod explore;
pub mod scrape;

pub mod cli;
pub mod gui;

pub use error::{Error, Result};
