//! Sprite pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors from the sprite pipeline.
///
/// Unreadable input files never show up here: they are the soft tier,
/// skipped with a verbose notice. Every variant below fails the whole
/// batch.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// File passed the readability probe but the read itself failed.
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    /// File content is not well-formed XML.
    #[error("failed to parse `{0}` as SVG")]
    Parse(PathBuf, #[source] quick_xml::Error),

    /// Document parsed but its root element is not `<svg>`.
    #[error("no root <svg> element in `{0}`")]
    MissingRoot(PathBuf),
}
