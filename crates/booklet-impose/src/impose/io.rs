//! Document I/O operations for imposition

use crate::constants::{BOOKLET_SUFFIX, PDF_EXTENSION};
use crate::types::*;
use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save the imposed document.
///
/// The PDF is written to a temporary file in the destination directory and
/// renamed into place once complete, so a failed write leaves no partial file.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
            _ => PathBuf::from("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
        temp.write_all(&writer)?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| ImposeError::Io(e.error))?;
        Ok::<_, ImposeError>(())
    })
    .await??;
    Ok(())
}

/// Whether the path ends in `.pdf`, ignoring case
pub fn has_pdf_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Check that `path` names an existing PDF file
pub fn validate_input_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ImposeError::InvalidInput(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if !has_pdf_extension(path) {
        return Err(ImposeError::InvalidInput(format!(
            "{} is not a PDF file",
            path.display()
        )));
    }
    Ok(())
}

/// `<dir>/<stem>_booklet.pdf` for an input of `<dir>/<stem>.<ext>`
pub fn booklet_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.{}", stem, BOOKLET_SUFFIX, PDF_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_pdf_extension() {
        assert!(has_pdf_extension("doc.pdf"));
        assert!(has_pdf_extension("doc.PDF"));
        assert!(has_pdf_extension("dir/doc.Pdf"));
        assert!(!has_pdf_extension("doc.txt"));
        assert!(!has_pdf_extension("doc"));
        assert!(!has_pdf_extension("pdf"));
    }

    #[test]
    fn test_booklet_output_path() {
        assert_eq!(
            booklet_output_path("/tmp/docs/report.pdf"),
            PathBuf::from("/tmp/docs/report_booklet.pdf")
        );
        assert_eq!(
            booklet_output_path("Report.PDF"),
            PathBuf::from("Report_booklet.pdf")
        );
        assert_eq!(
            booklet_output_path("my.notes.pdf"),
            PathBuf::from("my.notes_booklet.pdf")
        );
    }

    #[test]
    fn test_validate_missing_file() {
        let result = validate_input_path("/definitely/not/here.pdf");
        assert!(matches!(result, Err(ImposeError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_wrong_extension() {
        let temp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let result = validate_input_path(temp.path());
        assert!(matches!(result, Err(ImposeError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_existing_pdf() {
        let temp = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        assert!(validate_input_path(temp.path()).is_ok());
    }
}
