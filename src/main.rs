//! Command-line entry point.
//!
//! A thin wrapper around the `opengraph` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All extraction logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use opengraph::config::Opt;
use opengraph::initialization::init_logger_with;
use opengraph::{OpenGraph, Reader, ReaderConfig};

fn print_summary(og: &OpenGraph) {
    for property in ["title", "description", "image", "type", "url"] {
        println!(
            "{:<12} {}",
            format!("{property}:"),
            og.get_property(property).unwrap_or("-")
        );
    }
    println!(
        "{:<12} {}",
        "base type:",
        og.base_type().map(|b| b.as_str()).unwrap_or("-")
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let reader = Reader::new(ReaderConfig::from(&opt));

    match reader.read(&opt.url).await {
        Ok(og) => {
            if opt.json {
                let json = serde_json::to_string_pretty(&og)
                    .context("Failed to serialize Open Graph data")?;
                println!("{json}");
            } else if let Some(style) = opt.markup.clone() {
                for line in og.to_meta_markup(style.into()) {
                    println!("{line}");
                }
            } else {
                print_summary(&og);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("opengraph error ({}): {:#}", e.error_type(), e);
            process::exit(1);
        }
    }
}
