mod config;
mod io;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();

    let lines = io::read_lines(&config.input_path)?;
    let output = pipeline::run(&lines, &config)
        .with_context(|| format!("processing {}", config.input_path.display()))?;
    io::write_lines(&config.output_path, &output)?;

    info!(
        "smoothed {} ({} lines) -> {} ({} lines)",
        config.input_path.display(),
        lines.len(),
        config.output_path.display(),
        output.len()
    );
    Ok(())
}
