//! svgsprite - merge individual SVG files into a single SVG sprite.

mod cli;
mod logger;
mod sprite;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use sprite::{Options, build_sprite_blocking};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let options = Options {
        verbose: cli.verbose,
    };

    let sprite = match build_sprite_blocking(&cli.files, &options) {
        Ok(sprite) => sprite,
        Err(e) => {
            log!("error"; "failed to convert to a sprite");
            eprintln!("{:#}", anyhow::Error::from(e));
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, &sprite)
            .with_context(|| format!("failed to write file: {}", path.display()))?,
        None => println!("{sprite}"),
    }

    Ok(())
}
