//! SVG sprite construction.
//!
//! Fans a list of SVG files out to independent per-file pipelines whose
//! results are appended to a single sprite document:
//!
//! ```text
//! file --> source --> fragment --> symbol --\
//! file --> source --> fragment --> symbol ---> assembler --> sprite
//! file --> source --> fragment --> symbol --/
//! ```
//!
//! Symbols land in the sprite in pipeline completion order, not input
//! order. Unreadable files are skipped; a read or parse failure fails the
//! whole batch, reported after every pipeline has settled.

mod assembler;
mod error;
mod fragment;
mod source;
mod symbol;

pub use error::SpriteError;

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use assembler::AssemblerActor;
use fragment::parse_fragment;
use source::{Source, read_source};
use symbol::{Symbol, build_symbol};

/// Channel buffer size
const CHANNEL_BUFFER: usize = 32;

/// Options for a sprite build.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Emit one diagnostic line per input file.
    pub verbose: bool,
}

/// Convert a list of SVG files into a single SVG sprite.
///
/// Runs one pipeline per file, all concurrently. On success returns the
/// serialized sprite document; on failure the first error among the
/// pipelines, with no partial sprite.
pub async fn build_sprite(files: &[PathBuf], options: &Options) -> Result<String, SpriteError> {
    let (tx, rx) = mpsc::channel::<Symbol>(CHANNEL_BUFFER);
    let actor = tokio::spawn(AssemblerActor::new(rx).run());

    let mut pipelines = JoinSet::new();
    for file in files {
        let file = file.clone();
        let appender = tx.clone();
        let verbose = options.verbose;
        pipelines.spawn(async move { run_pipeline(&file, verbose, &appender).await });
    }

    // Every pipeline settles before the batch reports; a failure does not
    // cancel its siblings. Keep the first error in completion order.
    let mut first_error = None;
    while let Some(joined) = pipelines.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => {} // cancelled, only on runtime shutdown
        }
    }

    // All appenders are gone once the pipelines settle; closing ours lets
    // the actor serialize and return.
    drop(tx);
    let sprite = match actor.await {
        Ok(sprite) => sprite,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    };

    match first_error {
        Some(e) => Err(e),
        None => Ok(sprite),
    }
}

/// Blocking entry point for the CLI. Builds its own runtime.
pub fn build_sprite_blocking(files: &[PathBuf], options: &Options) -> Result<String, SpriteError> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    rt.block_on(build_sprite(files, options))
}

/// One per-file pipeline: read, parse, build, append.
async fn run_pipeline(
    file: &Path,
    verbose: bool,
    appender: &mpsc::Sender<Symbol>,
) -> Result<(), SpriteError> {
    let content = match read_source(file).await? {
        Source::Content(content) => content,
        Source::Unreadable => {
            if verbose {
                crate::log!("sprite"; "skipping {}", file.display().bold().red());
            }
            return Ok(());
        }
    };

    let fragment = parse_fragment(&content, file)?;
    let symbol = build_symbol(&fragment, file);
    if verbose {
        crate::log!("sprite"; "spriting {} with id {}",
            file.display().bold().cyan(), symbol.id.bold());
    }

    // Send cannot fail: the actor outlives every pipeline's appender.
    let _ = appender.send(symbol).await;
    Ok(())
}
