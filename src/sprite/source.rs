//! Input file loading with the two-tier readability policy.
//!
//! Missing or permission-restricted files are expected and tolerated; a
//! read that fails after the file was probed readable is not.

use std::path::Path;

use super::error::SpriteError;

/// Outcome of probing and loading one input file.
#[derive(Debug)]
pub enum Source {
    /// Full UTF-8 content of a readable file.
    Content(String),
    /// File is missing or not readable; skip it.
    Unreadable,
}

/// Probe `path` for readability, then load its content.
///
/// A failed probe is a skip, not an error. A failed read after a
/// successful probe (including non-UTF-8 content) is fatal for the batch.
pub async fn read_source(path: &Path) -> Result<Source, SpriteError> {
    if tokio::fs::File::open(path).await.is_err() {
        return Ok(Source::Unreadable);
    }

    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Source::Content(content)),
        Err(e) => Err(SpriteError::Read(path.to_path_buf(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_source_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(&path, "<svg/>").unwrap();

        match read_source(&path).await.unwrap() {
            Source::Content(content) => assert_eq!(content, "<svg/>"),
            Source::Unreadable => panic!("readable file reported unreadable"),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_a_skip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.svg");

        assert!(matches!(
            read_source(&path).await.unwrap(),
            Source::Unreadable
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.svg");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_source(&path).await,
            Err(SpriteError::Read(..))
        ));
    }
}
