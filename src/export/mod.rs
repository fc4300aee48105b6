//! Docx export
//!
//! Persists a generated document returned by the backend to the output
//! directory, keeping the server-provided filename. Filenames are
//! sanitized to their final path component so a hostile header cannot
//! escape the output directory.

use std::path::{Path, PathBuf};

use crate::client::types::DocxDownload;
use crate::error::FormfillError;

/// Write a downloaded document into `output_dir`, returning the path
pub fn save_download(download: &DocxDownload, output_dir: &Path) -> Result<PathBuf, FormfillError> {
    let filename = sanitize_filename(&download.filename);
    let path = output_dir.join(filename);
    std::fs::create_dir_all(output_dir)?;
    std::fs::write(&path, &download.bytes)?;
    log::debug!("Saved document to {}", path.display());
    Ok(path)
}

/// Keep only the final path component of a server-provided filename
fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .to_string();
    if base.is_empty() || base == "." || base == ".." {
        "document.docx".to_string()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download(filename: &str) -> DocxDownload {
        DocxDownload {
            filename: filename.to_string(),
            bytes: vec![0x50, 0x4b, 0x03, 0x04],
        }
    }

    #[test]
    fn test_save_writes_bytes_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_download(&download("contract.docx"), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("contract.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x50, 0x4b, 0x03, 0x04]);
    }

    #[test]
    fn test_save_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");
        let path = save_download(&download("doc.docx"), &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("reports\\q1.docx"), "q1.docx");
        assert_eq!(sanitize_filename("plain.docx"), "plain.docx");
    }

    #[test]
    fn test_sanitize_rejects_empty_and_dot_names() {
        assert_eq!(sanitize_filename(""), "document.docx");
        assert_eq!(sanitize_filename(".."), "document.docx");
        assert_eq!(sanitize_filename("dir/"), "document.docx");
    }
}
