// src/bin/cli.rs
use papyrus_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_cli();
    cli::run()?;
    Ok(())
}
