//! Writing the rendered document to disk.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// Write `html` to `path`, truncating any existing file. The file handle is
/// closed before returning, on success and on error.
pub fn write_html(path: &Path, html: &str) -> RenderResult<u64> {
    let write = || -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(html.as_bytes())?;
        file.flush()
    };
    write().map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = html.len() as u64;
    tracing::info!(path = %path.display(), bytes, "diagram written");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        std::fs::write(&path, "a much longer previous document").unwrap();

        let bytes = write_html(&path, "<html></html>").unwrap();
        assert_eq!(bytes, 13);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");

        let err = write_html(&path, "<html></html>").unwrap_err();
        assert!(err.to_string().contains("Failed to write diagram"));
        assert!(!path.exists());
    }
}
