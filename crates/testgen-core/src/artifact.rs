//! Writing the generated test to disk

use crate::error::{TestGenError, TestGenResult};
use std::path::Path;

/// Write the generated test text to a file.
///
/// The file receives the UTF-8 bytes of `content` exactly; what is displayed
/// and what lands on disk are byte-identical.
pub fn write_artifact(path: impl AsRef<Path>, content: &str) -> TestGenResult<()> {
    let path = path.as_ref();
    std::fs::write(path, content.as_bytes())
        .map_err(|e| TestGenError::io(e.to_string(), Some(path.display().to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_bytes_match_the_displayed_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PlaywrightTest.java");
        let content = "// Playwright test\npage.navigate(\"https://example.com\");\n// é ↔ ✓";

        write_artifact(&path, content).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, content.as_bytes());
        assert_eq!(String::from_utf8(bytes).unwrap(), content);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let err = write_artifact("/nonexistent-dir/out.java", "text").unwrap_err();
        match err {
            TestGenError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some("/nonexistent-dir/out.java"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
