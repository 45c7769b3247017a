use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use tickdown::core::config;
use tickdown::tui;

/// Takes no arguments: run it, type a minute count, press Enter.
#[derive(Parser)]
#[command(name = "tickdown", version, about = "Terminal countdown timer")]
struct Args {}

fn main() {
    Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let config = config::resolve(&file_config);

    // File logger, only when configured - stdout belongs to the TUI
    if let Some(path) = &config.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
    }

    log::info!("tickdown {} starting up", env!("CARGO_PKG_VERSION"));
    // Everything logged before WriteLogger::init never reached the file;
    // record the configuration that actually took effect.
    log::debug!("Resolved config: {:?}", config);

    if let Err(e) = tui::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
